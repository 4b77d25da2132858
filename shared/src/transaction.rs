//! 交易记录
//!
//! 类型与状态在线上是自由字符串；未识别的值保留在 `Other` 中，
//! 交由展示层的兜底规则处理。

use crate::SignedAmount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Incoming,
    Outgoing,
    Payment,
    Mobile,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Incoming => "incoming",
            TransactionType::Outgoing => "outgoing",
            TransactionType::Payment => "payment",
            TransactionType::Mobile => "mobile",
            TransactionType::Other(raw) => raw,
        }
    }
}

impl From<&str> for TransactionType {
    fn from(raw: &str) -> Self {
        match raw {
            "incoming" => TransactionType::Incoming,
            "outgoing" => TransactionType::Outgoing,
            "payment" => TransactionType::Payment,
            "mobile" => TransactionType::Mobile,
            other => TransactionType::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        raw.as_str().into()
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for TransactionStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "completed" => TransactionStatus::Completed,
            "pending" => TransactionStatus::Pending,
            "failed" => TransactionStatus::Failed,
            other => TransactionStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        raw.as_str().into()
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// 一条交易记录，展示后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub amount: SignedAmount,
    pub status: TransactionStatus,
    /// 图标引用（图标名）
    #[serde(default)]
    pub icon: String,
}
