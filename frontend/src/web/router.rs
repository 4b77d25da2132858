//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 当前路由 = 当前路由表（由会话选出）对当前路径的匹配结果。

use finboard_shared::SessionStatus;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteTable};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    let pushed = web_sys::window()
        .and_then(|w| w.history().ok())
        .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)).is_ok())
        .unwrap_or(false);

    if !pushed {
        log::warn!("[Router] Failed to push history state for {}", path);
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入会话状态信号实现与会话系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 设置当前浏览器路径
    set_path: WriteSignal<String>,
    /// 当前生效的路由表；每次渲染只读取这一份
    table: Memo<RouteTable>,
    /// 当前路由
    route: Memo<AppRoute>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// # Arguments
    /// * `status` - 会话状态信号，由外部注入实现解耦
    fn new(status: Memo<SessionStatus>) -> Self {
        let (path, set_path) = signal(current_path());
        let table = Memo::new(move |_| RouteTable::for_status(status.get()));
        let route = Memo::new(move |_| {
            let table = table.get();
            path.with(|p| table.resolve(p))
        });

        Self {
            set_path,
            table,
            route,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Memo<AppRoute> {
        self.route
    }

    /// 获取当前路由表信号
    pub fn route_table(&self) -> Memo<RouteTable> {
        self.table
    }

    /// **核心方法：导航**
    ///
    /// 发出即忘：未注册的路径会落到 404 视图，从不失败。
    pub fn navigate(&self, path: &str) {
        log::debug!("[Router] Navigate to {}", path);
        push_history_state(path);
        self.set_path.set(path.to_string());
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_path = self.set_path;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_path.set(current_path());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由表切换时记录日志
    fn log_table_changes(&self) {
        let table = self.table;
        Effect::new(move |_| {
            let status = table.with(RouteTable::status);
            log::info!("[Router] Active route table: {:?}", status);
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(status: Memo<SessionStatus>) -> RouterService {
    let router = RouterService::new(status);

    router.init_popstate_listener();
    router.log_table_changes();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话状态信号
    status: Memo<SessionStatus>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(status);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
