use crate::auth::use_auth;
use crate::bridge::{bind, run, use_page};
use crate::components::status::{ErrorAlert, FormError, Spinner};
use leptos::prelude::*;
use yijing::pages::{self, DivinationForm};
use yijing::view::Render;
use yijing_shared::{DivinationResult, DivinationType};

#[component]
fn ResultCard(result: DivinationResult) -> impl IntoView {
    view! {
        <div class="card bg-base-100 border mt-6">
            <div class="card-body">
                <h3 class="card-title">"占卜结果"</h3>
                <h4 class="font-semibold">"卦象"</h4>
                <p>{result.hexagram}</p>
                <h4 class="font-semibold">"解释"</h4>
                <p>{result.interpretation}</p>
                <h4 class="font-semibold">"结果"</h4>
                <p>{result.result}</p>
                <h4 class="font-semibold">"AI分析"</h4>
                <p>{result.ai_analysis}</p>
            </div>
        </div>
    }
}

#[component]
pub fn DivinationPage() -> impl IntoView {
    let auth = use_auth();
    let page = use_page(pages::DivinationPage::new(), pages::DivinationPage::dispose);
    let state = page.with_value(|p| bind(p.controller()));

    let kind = RwSignal::new(Option::<DivinationType>::None);
    let question = RwSignal::new(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        let form = DivinationForm {
            kind: kind.get(),
            question: question.get(),
        };
        let api = auth.api();
        match page.with_value(|p| p.submit(&api, &form)) {
            Ok(pending) => run(pending),
            Err(errors) => set_local_error.set(errors.first().map(str::to_string)),
        }
    };

    let retry = Callback::new(move |_| {
        if let Some(pending) = page.try_with_value(|p| p.controller().retry()).flatten() {
            run(pending);
        }
    });

    let options = DivinationType::ALL
        .into_iter()
        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
        .collect_view();

    let outcome = move || {
        let s = state.get();
        let rendered = match s.render() {
            Render::Idle => ().into_any(),
            Render::Busy { stale } => view! {
                <Spinner />
                {stale.cloned().map(|result| view! { <ResultCard result /> })}
            }
            .into_any(),
            Render::Failed { message, .. } => {
                view! { <ErrorAlert message=message.to_string() on_retry=retry /> }.into_any()
            }
            Render::Ready(result) => view! { <ResultCard result=result.clone() /> }.into_any(),
        };
        rendered
    };

    view! {
        <div>
            <h2 class="text-2xl font-bold mb-4">"易经占卜"</h2>
            <form class="flex flex-col gap-4 max-w-xl" on:submit=on_submit>
                <FormError message=local_error />
                <label class="form-control">
                    <span class="label label-text">"占卜类型"</span>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| kind.set(DivinationType::parse(&event_target_value(&ev)))
                    >
                        <option value="" selected>"请选择占卜类型"</option>
                        {options}
                    </select>
                </label>
                <label class="form-control">
                    <span class="label label-text">"您的问题"</span>
                    <textarea
                        class="textarea textarea-bordered"
                        rows="4"
                        placeholder="请输入您想要占卜的问题"
                        on:input=move |ev| question.set(event_target_value(&ev))
                        prop:value=question
                    ></textarea>
                </label>
                <button class="btn btn-primary" disabled=move || state.with(|s| s.is_loading())>
                    "开始占卜"
                </button>
            </form>
            {outcome}
        </div>
    }
}
