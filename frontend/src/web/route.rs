//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、两张路由表以及根据会话选择路由表的仲裁逻辑。

use finboard_shared::{SessionState, SessionStatus};

use crate::config::Locale;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 落地页 (未认证时的唯一页面)
    #[default]
    Landing,
    Dashboard,
    Transfer,
    InstantTransfer,
    Transactions,
    Cards,
    Profile,
    Analytics,
    Savings,
    Credit,
    Support,
    Kyc,
    InternationalTransfer,
    CurrencyExchange,
    MultiCurrency,
    Recharge,
    Notifications,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 页面标题
    pub fn title(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Landing, _) => "FinBoard",
            (Self::Dashboard, Locale::Fr) => "Tableau de bord",
            (Self::Dashboard, Locale::En) => "Dashboard",
            (Self::Transfer, Locale::Fr) => "Virement",
            (Self::Transfer, Locale::En) => "Transfer",
            (Self::InstantTransfer, Locale::Fr) => "Virement instantané",
            (Self::InstantTransfer, Locale::En) => "Instant transfer",
            (Self::Transactions, Locale::Fr) => "Historique",
            (Self::Transactions, Locale::En) => "History",
            (Self::Cards, Locale::Fr) => "Cartes",
            (Self::Cards, Locale::En) => "Cards",
            (Self::Profile, Locale::Fr) => "Profil",
            (Self::Profile, Locale::En) => "Profile",
            (Self::Analytics, Locale::Fr) => "Analyses",
            (Self::Analytics, Locale::En) => "Analytics",
            (Self::Savings, Locale::Fr) => "Épargne",
            (Self::Savings, Locale::En) => "Savings",
            (Self::Credit, Locale::Fr) => "Crédit",
            (Self::Credit, Locale::En) => "Credit",
            (Self::Support, _) => "Support",
            (Self::Kyc, Locale::Fr) => "Vérification d'identité",
            (Self::Kyc, Locale::En) => "Identity verification",
            (Self::InternationalTransfer, Locale::Fr) => "Virement international",
            (Self::InternationalTransfer, Locale::En) => "International transfer",
            (Self::CurrencyExchange, Locale::Fr) => "Change de devises",
            (Self::CurrencyExchange, Locale::En) => "Currency exchange",
            (Self::MultiCurrency, Locale::Fr) => "Multi-devises",
            (Self::MultiCurrency, Locale::En) => "Multi-currency",
            (Self::Recharge, _) => "Recharge",
            (Self::Notifications, _) => "Notifications",
            (Self::NotFound, Locale::Fr) => "Page introuvable",
            (Self::NotFound, Locale::En) => "Page not found",
        }
    }
}

/// 路由表中的一条 (path, view) 记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: AppRoute,
}

const fn entry(path: &'static str, route: AppRoute) -> RouteEntry {
    RouteEntry { path, route }
}

/// 未认证路由表
pub const PUBLIC_ROUTES: &[RouteEntry] = &[entry("/", AppRoute::Landing)];

/// 已认证路由表（顺序即匹配顺序）
pub const AUTHENTICATED_ROUTES: &[RouteEntry] = &[
    entry("/", AppRoute::Dashboard),
    entry("/transfer", AppRoute::Transfer),
    entry("/instant-transfer", AppRoute::InstantTransfer),
    entry("/transactions", AppRoute::Transactions),
    entry("/cards", AppRoute::Cards),
    entry("/profile", AppRoute::Profile),
    entry("/analytics", AppRoute::Analytics),
    entry("/savings", AppRoute::Savings),
    entry("/credit", AppRoute::Credit),
    entry("/support", AppRoute::Support),
    entry("/kyc", AppRoute::Kyc),
    entry("/international-transfer", AppRoute::InternationalTransfer),
    entry("/currency-exchange", AppRoute::CurrencyExchange),
    entry("/multi-currency", AppRoute::MultiCurrency),
    entry("/recharge", AppRoute::Recharge),
    entry("/notifications", AppRoute::Notifications),
];

/// 路由表中的一个槽位
///
/// `CatchAll` 是显式的哨兵，永远位于最后，匹配任何路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSlot {
    Path(RouteEntry),
    CatchAll,
}

impl RouteSlot {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RouteSlot::Path(entry) => entry.path == path,
            RouteSlot::CatchAll => true,
        }
    }

    pub fn route(&self) -> AppRoute {
        match self {
            RouteSlot::Path(entry) => entry.route,
            RouteSlot::CatchAll => AppRoute::NotFound,
        }
    }
}

/// 当前生效的路由表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTable {
    status: SessionStatus,
    entries: &'static [RouteEntry],
}

impl RouteTable {
    pub fn public() -> Self {
        Self {
            status: SessionStatus::Public,
            entries: PUBLIC_ROUTES,
        }
    }

    pub fn authenticated() -> Self {
        Self {
            status: SessionStatus::Authenticated,
            entries: AUTHENTICATED_ROUTES,
        }
    }

    pub fn for_status(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Public => Self::public(),
            SessionStatus::Authenticated => Self::authenticated(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// 具名路由（不含兜底）
    pub fn entries(&self) -> &'static [RouteEntry] {
        self.entries
    }

    /// 按匹配顺序列出所有槽位，兜底永远在最后
    pub fn slots(&self) -> impl Iterator<Item = RouteSlot> + '_ {
        self.entries
            .iter()
            .copied()
            .map(RouteSlot::Path)
            .chain(std::iter::once(RouteSlot::CatchAll))
    }

    /// 先匹配者胜出；未注册路径落到兜底的 404 视图
    pub fn resolve(&self, path: &str) -> AppRoute {
        let path = normalize_path(path);
        self.slots()
            .find(|slot| slot.matches(path))
            .map(|slot| slot.route())
            .unwrap_or(AppRoute::NotFound)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.entries.iter().any(|e| e.path == path)
    }
}

/// 去掉结尾的 `/`（根路径除外），空路径视为根
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// **核心仲裁逻辑：根据会话选择路由表**
///
/// 只取决于 `(is_loading, is_authenticated)`，加载中一律视为未认证。
/// 路由服务拿到的是已派生好的 `SessionStatus`，直接走 `RouteTable::for_status`。
pub fn select_route_table(session: &SessionState) -> RouteTable {
    RouteTable::for_status(session.status())
}
