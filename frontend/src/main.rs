use leptos::prelude::*;
use yijing_frontend::App;

// 单线程 WASM 环境下使用 lol_alloc 作为全局分配器，减小产物体积
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: lol_alloc::AssumeSingleThreaded<lol_alloc::FreeListAllocator> =
    unsafe { lol_alloc::AssumeSingleThreaded::new(lol_alloc::FreeListAllocator::new()) };

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
