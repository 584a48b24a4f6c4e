//! 通用状态展示：加载指示与可重试的错误提示

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center py-6">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 请求失败提示；提供重试入口
#[component]
pub fn ErrorAlert(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error text-sm py-2">
            <span>{message}</span>
            <button class="btn btn-sm btn-ghost" on:click=move |_| on_retry.run(())>
                "重试"
            </button>
        </div>
    }
}

/// 表单本地校验提示
#[component]
pub fn FormError(message: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div role="alert" class="alert alert-warning text-sm py-2">
                    <span>{msg}</span>
                </div>
            }
        })
    }
}
