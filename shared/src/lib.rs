//! 共享领域模型
//!
//! 前端与服务端共用的数据结构：
//! - `session`: 会话状态与用户资料
//! - `transaction`: 交易记录及其类型、状态
//! - `amount`: 带符号金额
//! - `protocol`: API 端点定义

pub mod amount;
pub mod protocol;
pub mod session;
pub mod transaction;

pub use amount::{AmountError, Sign, SignedAmount, parse_plain_decimal};
pub use session::{SessionState, SessionStatus, UserProfile};
pub use transaction::{Transaction, TransactionStatus, TransactionType};

use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 无法从用户资料推导出首字母时使用的头像字符
pub const FALLBACK_INITIAL: &str = "U";
/// 服务端登录入口（认证流程不在前端）
pub const LOGIN_PATH: &str = "/auth/login";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 账户余额快照
///
/// 数值均以字符串传输，由前端负责解析与格式化。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// 原始余额，十进制字符串，如 `"12345.6"`
    pub raw: String,
    pub currency: String,
    /// 本月收益，如 `"+2.5%"`
    pub monthly_gain: String,
    /// 储蓄目标进度；上游可能给出越界值，显示前需截断
    pub savings_progress_percent: i32,
}

/// 控制面板首页所需的全部数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountOverview {
    pub balance: AccountBalance,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
