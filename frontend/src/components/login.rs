use crate::auth::use_auth;
use crate::bridge::{bind, use_page};
use crate::components::status::FormError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use yijing::Status;
use yijing::pages::{self, AuthMode, AuthReply, LoginForm, RegisterForm};

#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <span class="label label-text">{label}</span>
            <input
                type=kind
                class="input input-bordered"
                placeholder=label
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
            />
        </label>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let page = use_page(pages::LoginPage::new(auth.session()), pages::LoginPage::dispose);
    let state = page.with_value(|p| bind(p.controller()));
    let (mode, set_mode) = signal(AuthMode::Login);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let username = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        let api = auth.api();
        let submitted = page.with_value(|p| match p.mode() {
            AuthMode::Login => p.login(
                &api,
                &LoginForm {
                    username: username.get(),
                    password: password.get(),
                },
            ),
            AuthMode::Register => p.register(
                &api,
                &RegisterForm {
                    username: username.get(),
                    nickname: nickname.get(),
                    email: email.get(),
                    password: password.get(),
                    confirm_password: confirm_password.get(),
                },
            ),
        });
        match submitted {
            Ok(pending) => spawn_local(async move {
                pending.await;
                // 注册成功后控制器已切回登录模式
                if let Some(next) = page.try_with_value(|p| p.mode()) {
                    set_mode.try_set(next);
                }
            }),
            Err(errors) => set_local_error.set(errors.first().map(str::to_string)),
        }
    };

    let on_toggle = move |_| {
        set_local_error.set(None);
        if let Some(next) = page.try_with_value(|p| p.toggle_mode()) {
            set_mode.set(next);
        }
    };

    let is_register = move || mode.get() == AuthMode::Register;
    let is_submitting = move || state.with(|s| s.is_loading());
    let notice = move || {
        state.with(|s| match (s.status, s.data.as_ref(), s.error.clone()) {
            (Status::Error, _, Some(msg)) => Some(view! {
                <div role="alert" class="alert alert-error text-sm py-2"><span>{msg}</span></div>
            }
            .into_any()),
            (Status::Success, Some(AuthReply::Registered), _) => Some(view! {
                <div role="alert" class="alert alert-success text-sm py-2"><span>"注册成功，请登录"</span></div>
            }
            .into_any()),
            _ => None,
        })
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">{move || mode.get().title()}</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {notice}
                        <FormError message=local_error />
                        <TextField label="用户名" value=username />
                        <Show when=is_register>
                            <TextField label="昵称" value=nickname />
                            <TextField label="邮箱" kind="email" value=email />
                        </Show>
                        <TextField label="密码" kind="password" value=password />
                        <Show when=is_register>
                            <TextField label="确认密码" kind="password" value=confirm_password />
                        </Show>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    mode.get().submit_label().into_any()
                                }}
                            </button>
                        </div>
                        <button type="button" class="btn btn-link" on:click=on_toggle>
                            {move || mode.get().toggle_label()}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
