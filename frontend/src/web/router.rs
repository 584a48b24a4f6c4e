//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 守卫判定完全委托给 `yijing::gate::resolve`，认证状态以信号形式注入，
//! 登录/登出后由 Effect 重新评估，无需整页刷新。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use yijing::gate::{self, AppRoute};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证状态由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let resolution = gate::resolve(&path, is_authenticated.get_untracked());
        if resolution.redirected {
            write_history(resolution.route.to_path(), false);
        }
        let (current_route, set_route) = signal(resolution.route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫解析 -> 写 History -> 更新路由信号
    pub fn navigate(&self, path: &str) {
        self.apply(path, true);
    }

    fn apply(&self, path: &str, push: bool) {
        let resolution = gate::resolve(path, self.is_authenticated.get_untracked());
        if resolution.redirected {
            web_sys::console::log_1(
                &format!("[Router] {} redirected to {}", path, resolution.route).into(),
            );
        }
        // 重定向一律 replace，避免后退键回到被拒绝的路径
        write_history(resolution.route.to_path(), push && !resolution.redirected);
        self.set_route.set(resolution.route);
    }

    /// 浏览器后退/前进时同样经过守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(&current_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 凭据变化时重新评估当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            let resolution = gate::resolve(route.to_path(), is_auth);
            if resolution.redirected {
                web_sys::console::log_1(
                    &format!(
                        "[Router] Auth state changed (authenticated={}), redirecting to {}.",
                        is_auth, resolution.route
                    )
                    .into(),
                );
                write_history(resolution.route.to_path(), true);
                router.set_route.set(resolution.route);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    move || matcher(router.current_route().get())
}

/// 站内链接：拦截点击并交给路由服务
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(route.to_path());
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
