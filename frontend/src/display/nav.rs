//! 导航配置
//!
//! 导航栏只渲染这里列出的目标；新增顶层路由不需要改动导航组件，
//! 只需调整下面的配置列表。

use crate::config::Locale;
use crate::web::route::AppRoute;

/// 一个导航目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub key: AppRoute,
    pub path: &'static str,
    /// 图标名，见 `components::icons`
    pub icon: &'static str,
}

impl NavTarget {
    const fn new(key: AppRoute, path: &'static str, icon: &'static str) -> Self {
        Self { key, path, icon }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self.key, locale) {
            (AppRoute::Dashboard, Locale::Fr) => "Accueil",
            (AppRoute::Dashboard, Locale::En) => "Home",
            (key, locale) => key.title(locale),
        }
    }
}

/// 桌面导航栏
pub const DESKTOP_NAV: &[NavTarget] = &[
    NavTarget::new(AppRoute::Dashboard, "/", "home"),
    NavTarget::new(AppRoute::Transactions, "/transactions", "history"),
    NavTarget::new(AppRoute::Transfer, "/transfer", "transfer"),
    NavTarget::new(AppRoute::Cards, "/cards", "credit-card"),
    NavTarget::new(AppRoute::Analytics, "/analytics", "chart"),
    NavTarget::new(AppRoute::Savings, "/savings", "savings"),
    NavTarget::new(AppRoute::Support, "/support", "support"),
];

/// 移动端底部导航，固定 5 项
pub const MOBILE_NAV: &[NavTarget] = &[
    NavTarget::new(AppRoute::Dashboard, "/", "home"),
    NavTarget::new(AppRoute::Transactions, "/transactions", "history"),
    NavTarget::new(AppRoute::Transfer, "/transfer", "transfer"),
    NavTarget::new(AppRoute::Cards, "/cards", "credit-card"),
    NavTarget::new(AppRoute::Profile, "/profile", "user"),
];

/// 标记与当前页面匹配的目标
pub fn nav_items(
    targets: &'static [NavTarget],
    current: AppRoute,
) -> impl Iterator<Item = (NavTarget, bool)> {
    targets.iter().map(move |t| (*t, t.key == current))
}
