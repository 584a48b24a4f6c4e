//! 认证模块
//!
//! 持有 API 客户端与会话上下文，并把会话变化同步到一个认证信号上。
//! 路由服务只依赖这个信号，与认证实现解耦。

use crate::web::{BrowserStorage, FetchHttpClient};
use leptos::prelude::*;
use std::rc::Rc;
use yijing::config::{API_BASE_VAR, TOKEN_KEY_VAR};
use yijing::{ApiClient, ClientConfig, SessionContext, SessionStore};

pub type Api = ApiClient<FetchHttpClient>;

/// 构建期注入的配置（`option_env!`），缺省时使用同源 API
fn build_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| match key {
        API_BASE_VAR => option_env!("YIJING_API_BASE").map(str::to_string),
        TOKEN_KEY_VAR => option_env!("YIJING_TOKEN_KEY").map(str::to_string),
        _ => None,
    })
}

/// 认证上下文
///
/// `Copy` 句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    api: StoredValue<Api, LocalStorage>,
    is_authenticated: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let config = build_config();
        let store = SessionStore::new(Rc::new(BrowserStorage), config.token_key.clone());
        let session = SessionContext::new(store);

        let is_authenticated = RwSignal::new(session.is_authenticated());
        session.subscribe(move |authenticated| {
            is_authenticated.try_set(authenticated);
        });

        Self {
            api: StoredValue::new_local(ApiClient::new(FetchHttpClient, config, session)),
            is_authenticated,
        }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        self.is_authenticated.into()
    }

    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn session(&self) -> SessionContext {
        self.api.with_value(|api| api.session().clone())
    }

    /// 注销：清空存储，路由服务随认证信号自动重定向到登录页
    pub fn logout(&self) {
        self.session().end();
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
