//! 应用外壳：侧栏导航 + 顶栏用户菜单

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use yijing::AppRoute;

#[component]
pub fn Shell(current: AppRoute, children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen bg-base-200">
            <Sider current=current />
            <div class="flex-1 flex flex-col">
                <Header />
                <main class="m-6 p-6 bg-base-100 rounded-box shadow-sm">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Sider(current: AppRoute) -> impl IntoView {
    let items = AppRoute::MENU
        .into_iter()
        .map(|route| {
            let class = if route == current { "active" } else { "" };
            view! {
                <li>
                    <Link route=route class=class>{route.title()}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="w-56 bg-base-100 shadow-md">
            <div class="h-16 flex items-center justify-center">
                <h1 class="text-xl font-bold">"易经占卜"</h1>
            </div>
            <ul class="menu w-full">{items}</ul>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    view! {
        <header class="navbar bg-base-100 px-6 justify-end">
            <div class="dropdown dropdown-end">
                <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                    <div class="bg-neutral text-neutral-content w-10 rounded-full">
                        <span>"我"</span>
                    </div>
                </div>
                <ul tabindex="0" class="menu dropdown-content bg-base-100 rounded-box z-10 w-40 p-2 shadow">
                    <li>
                        <a on:click=move |_| router.navigate(AppRoute::Profile.to_path())>"个人中心"</a>
                    </li>
                    <li>
                        <a on:click=move |_| auth.logout()>"退出登录"</a>
                    </li>
                </ul>
            </div>
        </header>
    }
}
