//! 带符号金额
//!
//! 上游以 `"+120.00"` / `"-45.00"` 这样的字符串传输金额，符号即语义。
//! 解码永远不会失败：原始文本原样保留用于展示，符号取自首字符，
//! 数值部分只有在是普通十进制数时才可用。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 金额符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// 显式 `+` 前缀（入账）
    Plus,
    /// 显式 `-` 前缀（出账）
    Minus,
    /// 无前缀
    #[default]
    Unsigned,
}

impl Sign {
    /// 只看首字符，对任意字符串都有定义
    pub fn of(raw: &str) -> Self {
        match raw.chars().next() {
            Some('+') => Sign::Plus,
            Some('-') => Sign::Minus,
            _ => Sign::Unsigned,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Sign::Plus => "+",
            Sign::Minus => "-",
            Sign::Unsigned => "",
        }
    }
}

/// 金额解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("金额为空")]
    Empty,
    #[error("金额不是有效数字: {0}")]
    NotNumeric(String),
}

/// 只由数字和至多一个小数点组成
fn is_plain_digits(body: &str) -> bool {
    body.bytes().any(|b| b.is_ascii_digit())
        && body.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && body.bytes().filter(|b| *b == b'.').count() <= 1
}

/// 解析普通十进制数（可带一个前导符号）
///
/// 与 `Decimal::from_str` 不同，拒绝科学计数法（`"1e3"`）、
/// 下划线分隔（`"1_000"`）和空格分组（`"1 000"`）。
pub fn parse_plain_decimal(raw: &str) -> Option<Decimal> {
    let body = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    if !is_plain_digits(body) {
        return None;
    }
    Decimal::from_str(raw.strip_prefix('+').unwrap_or(raw)).ok()
}

/// 带符号金额
///
/// 保留线上原文；`magnitude` 为 `None` 表示原文不是普通数字，
/// 此时仍按首字符给出符号，展示层照常渲染原文。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SignedAmount {
    raw: String,
    sign: Sign,
    magnitude: Option<Decimal>,
}

impl SignedAmount {
    pub fn new(sign: Sign, magnitude: Decimal) -> Self {
        let magnitude = magnitude.abs();
        Self {
            raw: format!("{}{}", sign.prefix(), magnitude),
            sign,
            magnitude: Some(magnitude),
        }
    }

    /// 宽松解析：任何字符串都能得到一个金额
    pub fn lenient(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let sign = Sign::of(&raw);
        let body = &raw[sign.prefix().len()..];
        let magnitude = if is_plain_digits(body) {
            Decimal::from_str(body).ok()
        } else {
            None
        };
        Self {
            raw,
            sign,
            magnitude,
        }
    }

    /// 线上原文
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> Option<Decimal> {
        self.magnitude
    }

    pub fn is_numeric(&self) -> bool {
        self.magnitude.is_some()
    }

    /// 带符号的数值（无前缀视为正数）
    pub fn value(&self) -> Option<Decimal> {
        self.magnitude.map(|magnitude| match self.sign {
            Sign::Minus => -magnitude,
            Sign::Plus | Sign::Unsigned => magnitude,
        })
    }
}

/// 严格解析：原文必须是普通十进制数
impl FromStr for SignedAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(AmountError::Empty);
        }

        let amount = Self::lenient(raw);
        if amount.is_numeric() {
            Ok(amount)
        } else {
            Err(AmountError::NotNumeric(raw.to_string()))
        }
    }
}

impl From<String> for SignedAmount {
    fn from(raw: String) -> Self {
        Self::lenient(raw)
    }
}

impl From<&str> for SignedAmount {
    fn from(raw: &str) -> Self {
        Self::lenient(raw)
    }
}

impl From<SignedAmount> for String {
    fn from(amount: SignedAmount) -> Self {
        amount.raw
    }
}

impl fmt::Display for SignedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
