use crate::auth::use_auth;
use crate::bridge::{bind, run, use_page};
use crate::components::status::{ErrorAlert, FormError, Spinner};
use leptos::prelude::*;
use leptos::task::spawn_local;
use yijing::pages::{self, PasswordForm, ProfileTab};
use yijing::view::Render;
use yijing::{ControllerState, RequestController};
use yijing_shared::{DivinationRecord, UserProfile};

#[component]
fn RecordList(records: Vec<DivinationRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! { <p class="text-base-content/60 py-6 text-center">"暂无记录"</p> }.into_any();
    }
    records
        .into_iter()
        .map(|r| {
            view! {
                <li class="py-3 border-b">
                    <div class="font-semibold">{r.question.clone()}</div>
                    <div class="text-sm mt-1">
                        <span class="badge badge-info">{r.kind_label().to_string()}</span>
                        <span class="ml-2">{r.created_at.clone()}</span>
                    </div>
                    <p class="mt-1 text-base-content/80">{r.result.clone()}</p>
                </li>
            }
        })
        .collect_view()
        .into_any()
}

/// 列表类标签页的通用渲染
fn list_panel(
    state: ReadSignal<ControllerState<Vec<DivinationRecord>>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        let s = state.get();
        let rendered = match s.render() {
            Render::Idle => ().into_any(),
            Render::Busy { .. } => view! { <Spinner /> }.into_any(),
            Render::Failed { message, stale } => view! {
                <ErrorAlert message=message.to_string() on_retry />
                {stale.cloned().map(|records| view! { <ul><RecordList records /></ul> })}
            }
            .into_any(),
            Render::Ready(records) => {
                view! { <ul><RecordList records=records.clone() /></ul> }.into_any()
            }
        };
        rendered
    }
}

fn info_panel(
    state: ReadSignal<ControllerState<UserProfile>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        let s = state.get();
        let rendered = match s.render() {
            Render::Idle => ().into_any(),
            Render::Busy { .. } => view! { <Spinner /> }.into_any(),
            Render::Failed { message, .. } => {
                view! { <ErrorAlert message=message.to_string() on_retry /> }.into_any()
            }
            Render::Ready(profile) => view! {
                <dl class="grid grid-cols-[6rem_1fr] gap-2">
                    <dt class="font-semibold">"用户名"</dt>
                    <dd>{profile.username.clone()}</dd>
                    <dt class="font-semibold">"邮箱"</dt>
                    <dd>{profile.email.clone()}</dd>
                </dl>
            }
            .into_any(),
        };
        rendered
    }
}

/// 构造某个标签页的重试回调
fn retry_callback<V, F>(
    page: StoredValue<pages::ProfilePage, LocalStorage>,
    pick: F,
) -> Callback<()>
where
    V: Clone + 'static,
    F: Fn(&pages::ProfilePage) -> &RequestController<V> + Send + Sync + 'static,
{
    Callback::new(move |_| {
        if let Some(pending) = page.try_with_value(|p| pick(p).retry()).flatten() {
            run(pending);
        }
    })
}

#[component]
fn PasswordModal(
    page: StoredValue<pages::ProfilePage, LocalStorage>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let auth = use_auth();
    let state = page.with_value(|p| bind(p.password()));
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        let form = PasswordForm {
            old_password: old_password.get(),
            new_password: new_password.get(),
            confirm_password: confirm_password.get(),
        };
        let api = auth.api();
        match page.with_value(|p| p.update_password(&api, &form)) {
            Ok(pending) => spawn_local(async move {
                pending.await;
                if let Some(still_open) = page.try_with_value(|p| p.is_password_modal_open()) {
                    open.try_set(still_open);
                }
            }),
            Err(errors) => set_local_error.set(errors.first().map(str::to_string)),
        }
    };

    let on_cancel = move |_| {
        page.with_value(|p| p.close_password_modal());
        open.set(false);
    };

    let server_error = move || state.with(|s| s.error.clone());
    let field = |label: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-control">
                <span class="label label-text">{label}</span>
                <input
                    type="password"
                    class="input input-bordered"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </label>
        }
    };

    view! {
        <div class="modal modal-open">
            <form class="modal-box flex flex-col gap-3" on:submit=on_submit>
                <h3 class="font-bold text-lg">"修改密码"</h3>
                <FormError message=local_error />
                {move || server_error().map(|msg| view! {
                    <div role="alert" class="alert alert-error text-sm py-2"><span>{msg}</span></div>
                })}
                {field("原密码", old_password)}
                {field("新密码", new_password)}
                {field("确认新密码", confirm_password)}
                <div class="modal-action">
                    <button type="button" class="btn" on:click=on_cancel>"取消"</button>
                    <button class="btn btn-primary" disabled=move || state.with(|s| s.is_loading())>
                        "确定"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let page = use_page(pages::ProfilePage::default(), pages::ProfilePage::dispose);
    let info = page.with_value(|p| bind(p.info()));
    let history = page.with_value(|p| bind(p.history()));
    let favorites = page.with_value(|p| bind(p.favorites()));
    let (active, set_active) = signal(ProfileTab::default());
    let modal_open = RwSignal::new(false);

    for pending in page.with_value(|p| p.mount(&auth.api())) {
        run(pending);
    }

    let activate = move |tab: ProfileTab| {
        let api = auth.api();
        set_active.set(tab);
        if let Some(pending) = page.with_value(|p| p.activate_tab(&api, tab)) {
            run(pending);
        }
    };

    let open_modal = move |_| {
        page.with_value(|p| p.open_password_modal());
        modal_open.set(true);
    };

    let tabs = ProfileTab::ALL
        .into_iter()
        .map(|tab| {
            let class = move || {
                if active.get() == tab {
                    "tab tab-active"
                } else {
                    "tab"
                }
            };
            view! {
                <a role="tab" class=class on:click=move |_| activate(tab)>{tab.label()}</a>
            }
        })
        .collect_view();

    let retry_info = retry_callback(page, pages::ProfilePage::info);
    let retry_history = retry_callback(page, pages::ProfilePage::history);
    let retry_favorites = retry_callback(page, pages::ProfilePage::favorites);

    let panel = move || match active.get() {
        ProfileTab::Info => view! {
            {info_panel(info, retry_info)}
            <button class="btn btn-outline mt-4" on:click=open_modal>"修改密码"</button>
        }
        .into_any(),
        ProfileTab::History => list_panel(history, retry_history).into_any(),
        ProfileTab::Favorites => list_panel(favorites, retry_favorites).into_any(),
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold mb-4">"个人中心"</h2>
            <div role="tablist" class="tabs tabs-bordered mb-4">{tabs}</div>
            {panel}
            <Show when=move || modal_open.get()>
                <PasswordModal page open=modal_open />
            </Show>
        </div>
    }
}
