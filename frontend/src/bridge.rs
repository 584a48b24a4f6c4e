//! 控制器与 Leptos 响应式系统之间的桥接

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use yijing::{Completion, ControllerState, RequestController};

/// 把控制器状态镜像到一个只读信号
pub fn bind<V>(controller: &RequestController<V>) -> ReadSignal<ControllerState<V>>
where
    V: Clone + Send + Sync + 'static,
{
    let (state, set_state) = signal(controller.state());
    controller.subscribe(move |s| {
        set_state.try_set(s.clone());
    });
    state
}

/// 把页面控制器挂到当前 Owner 上；组件卸载时调用 `dispose`，
/// 之后到达的响应会被丢弃
pub fn use_page<P: 'static>(page: P, dispose: fn(&P)) -> StoredValue<P, LocalStorage> {
    let stored = StoredValue::new_local(page);
    on_cleanup(move || {
        stored.try_with_value(dispose);
    });
    stored
}

/// 在 UI 线程上驱动一次提交
pub fn run(pending: impl Future<Output = Completion> + 'static) {
    spawn_local(async move {
        pending.await;
    });
}
