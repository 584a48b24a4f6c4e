//! 易经占卜前端应用
//!
//! - `web::router`: 路由服务，守卫判定委托给 `yijing::gate`
//! - `auth`: 会话上下文与认证信号
//! - `bridge`: 请求控制器到信号的桥接
//! - `components`: UI 组件层

mod auth;
mod bridge;
mod components {
    pub mod divination;
    pub mod fortune;
    pub mod home;
    pub mod layout;
    pub mod login;
    pub mod profile;
    pub mod status;
}

// 原生 Web API 封装模块
// 直接基于 web_sys 实现，替代 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use crate::auth::AuthContext;
use crate::components::divination::DivinationPage;
use crate::components::fortune::FortunePage;
use crate::components::home::HomePage;
use crate::components::layout::Shell;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;

use leptos::prelude::*;
use web::router::{Router, RouterOutlet};
use yijing::AppRoute;

/// 路由匹配函数
///
/// 登录页独占整个视口；其余路由挂在应用外壳（侧栏 + 顶栏）内。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Divination => view! { <DivinationPage /> }.into_any(),
        AppRoute::Fortune => view! { <FortunePage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
    };
    view! { <Shell current=route>{page}</Shell> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    view! {
        <Router is_authenticated=auth_ctx.is_authenticated_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
