//! FinBoard 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由表与仲裁（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态
//! - `display`: 分类器、余额格式化、导航配置（纯逻辑）
//! - `schedule`: 延迟回调守卫
//! - `components`: UI 组件层

mod api;
pub mod config;
pub mod display;
pub mod schedule;
mod session;
mod components {
    pub mod balance_card;
    pub mod dashboard;
    pub mod feature_page;
    pub mod icons;
    pub mod landing;
    pub mod mobile_nav;
    pub mod navbar;
    pub mod transaction_list;
}

use crate::api::BankApi;
use crate::components::dashboard::DashboardPage;
use crate::components::feature_page::FeaturePage;
use crate::components::landing::LandingPage;
use crate::components::mobile_nav::MobileNav;
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::schedule::{BrowserScheduler, UiGuard};
use crate::session::{SessionContext, init_session};

use finboard_shared::SessionStatus;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub mod web {
    mod http;
    mod logger;
    pub mod route;
    pub mod router;
    mod timer;

    pub use http::{HttpClient, HttpError};
    pub use logger::init_logger;
    pub use timer::Timeout;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_navigate, use_router};

#[component]
fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();
    let locale = config::use_config().locale;

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center space-y-4">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl">{AppRoute::NotFound.title(locale)}</p>
                <button class="btn btn-primary" on:click=move |_| navigate("/")>
                    {display::text::UiText::BackHome.get(locale)}
                </button>
            </div>
        </div>
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        other => view! { <FeaturePage route=other /> }.into_any(),
    }
}

/// 页面骨架：已认证时显示导航栏
#[component]
fn Shell() -> impl IntoView {
    let router = use_router();
    let table = router.route_table();
    let authenticated = move || table.with(|t| t.status() == SessionStatus::Authenticated);

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <Show
                when=authenticated
                fallback=|| view! { <RouterOutlet matcher=route_matcher /> }
            >
                <div class="max-w-7xl mx-auto p-4 md:p-8 pb-24 md:pb-8 space-y-8">
                    <Navbar />
                    <RouterOutlet matcher=route_matcher />
                </div>
                <MobileNav />
            </Show>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与基础服务
    let config = AppConfig::from_env();
    let api = BankApi::new(config.api_base_url.clone());
    provide_context(UiGuard::new(BrowserScheduler, config.guard));
    provide_context(api.clone());
    provide_context(config);

    // 2. 创建会话上下文并向服务端查询
    let session = SessionContext::new();
    provide_context(session);
    init_session(session, api);

    // 3. 路由器组件：注入会话状态信号，路由表随状态切换
    view! {
        <Router status=session.status_signal()>
            <Shell />
        </Router>
    }
}
