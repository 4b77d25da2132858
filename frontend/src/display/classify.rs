//! 展示分类器
//!
//! 把领域枚举映射为展示用的样式类与文案。三个函数都是全函数：
//! 任何输入（包括未声明的枚举值）都有确定输出。

use std::borrow::Cow;

use finboard_shared::{Sign, Transaction, TransactionStatus, TransactionType};

use crate::config::Locale;

/// 颜色语义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// 入账金额
    Positive,
    /// 出账及无符号金额；出账刻意不使用红色
    NeutralDark,
    Success,
    Warning,
    Error,
    /// 未识别状态
    NeutralGray,
}

impl ColorToken {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorToken::Positive => "text-success",
            ColorToken::NeutralDark => "text-base-content",
            ColorToken::Success => "badge badge-success badge-soft",
            ColorToken::Warning => "badge badge-warning badge-soft",
            ColorToken::Error => "badge badge-error badge-soft",
            ColorToken::NeutralGray => "badge badge-ghost",
        }
    }
}

/// 交易图标底色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconToken {
    Incoming,
    Outgoing,
    Payment,
    Mobile,
    Neutral,
}

impl IconToken {
    pub fn css_class(&self) -> &'static str {
        match self {
            IconToken::Incoming => "bg-success/10 text-success",
            IconToken::Outgoing => "bg-warning/10 text-warning",
            IconToken::Payment => "bg-info/10 text-info",
            IconToken::Mobile => "bg-secondary/10 text-secondary",
            IconToken::Neutral => "bg-base-200 text-base-content",
        }
    }
}

/// 交易类型 -> 图标底色，未识别的类型退回中性色
pub fn classify_transaction_type(kind: &TransactionType) -> IconToken {
    match kind {
        TransactionType::Incoming => IconToken::Incoming,
        TransactionType::Outgoing => IconToken::Outgoing,
        TransactionType::Payment => IconToken::Payment,
        TransactionType::Mobile => IconToken::Mobile,
        TransactionType::Other(_) => IconToken::Neutral,
    }
}

/// 金额符号 -> 颜色
pub fn classify_sign(sign: Sign) -> ColorToken {
    match sign {
        Sign::Plus => ColorToken::Positive,
        Sign::Minus | Sign::Unsigned => ColorToken::NeutralDark,
    }
}

/// 金额字符串 -> 颜色，只看首字符
pub fn classify_amount_color(amount: &str) -> ColorToken {
    classify_sign(Sign::of(amount))
}

/// 状态的颜色与文案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusToken {
    pub color: ColorToken,
    pub label: Cow<'static, str>,
}

/// 交易状态 -> (颜色, 文案)，使用默认语言
pub fn classify_status(status: &TransactionStatus) -> StatusToken {
    classify_status_in(status, Locale::default())
}

/// 交易状态 -> (颜色, 文案)；未识别的状态原样显示
pub fn classify_status_in(status: &TransactionStatus, locale: Locale) -> StatusToken {
    let (color, label) = match (status, locale) {
        (TransactionStatus::Completed, Locale::Fr) => (ColorToken::Success, "Terminé"),
        (TransactionStatus::Completed, Locale::En) => (ColorToken::Success, "Completed"),
        (TransactionStatus::Pending, Locale::Fr) => (ColorToken::Warning, "En attente"),
        (TransactionStatus::Pending, Locale::En) => (ColorToken::Warning, "Pending"),
        (TransactionStatus::Failed, Locale::Fr) => (ColorToken::Error, "Échoué"),
        (TransactionStatus::Failed, Locale::En) => (ColorToken::Error, "Failed"),
        (TransactionStatus::Other(raw), _) => {
            return StatusToken {
                color: ColorToken::NeutralGray,
                label: Cow::Owned(raw.clone()),
            };
        }
    };

    StatusToken {
        color,
        label: Cow::Borrowed(label),
    }
}

/// 一行交易的全部展示信息，按需计算，不存储
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayToken {
    pub amount_color: ColorToken,
    pub icon_container: IconToken,
    pub status: StatusToken,
}

impl DisplayToken {
    pub fn for_transaction(tx: &Transaction, locale: Locale) -> Self {
        Self {
            amount_color: classify_sign(tx.amount.sign()),
            icon_container: classify_transaction_type(&tx.kind),
            status: classify_status_in(&tx.status, locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn amount_color_follows_first_character() {
        assert_eq!(classify_amount_color("+120.00"), ColorToken::Positive);
        assert_eq!(classify_amount_color("-45.00"), ColorToken::NeutralDark);
        assert_eq!(classify_amount_color("0.00"), ColorToken::NeutralDark);
        assert_eq!(classify_amount_color(""), ColorToken::NeutralDark);
    }

    #[test]
    fn outgoing_is_not_flagged_as_error() {
        assert_ne!(classify_amount_color("-45.00"), ColorToken::Error);
    }

    #[test]
    fn known_statuses_map_to_fixed_pairs() {
        let completed = classify_status(&TransactionStatus::Completed);
        assert_eq!(completed.color, ColorToken::Success);
        assert_eq!(completed.label, "Terminé");

        let pending = classify_status(&TransactionStatus::Pending);
        assert_eq!(pending.color, ColorToken::Warning);
        assert_eq!(pending.label, "En attente");

        let failed = classify_status_in(&TransactionStatus::Failed, Locale::En);
        assert_eq!(failed.color, ColorToken::Error);
        assert_eq!(failed.label, "Failed");
    }

    #[test]
    fn transaction_types_map_to_distinct_tokens() {
        let tokens: Vec<_> = ["incoming", "outgoing", "payment", "mobile"]
            .into_iter()
            .map(|t| classify_transaction_type(&t.into()))
            .collect();
        assert_eq!(
            tokens,
            vec![
                IconToken::Incoming,
                IconToken::Outgoing,
                IconToken::Payment,
                IconToken::Mobile
            ]
        );
        assert_eq!(
            classify_transaction_type(&"crypto".into()),
            IconToken::Neutral
        );
    }

    #[test]
    fn display_token_for_row() {
        let tx = Transaction {
            id: "tx-9".into(),
            kind: "mobile".into(),
            title: "Orange Money".into(),
            subtitle: String::new(),
            amount: "+5000".parse().unwrap(),
            status: "pending".into(),
            icon: "smartphone".into(),
        };
        let token = DisplayToken::for_transaction(&tx, Locale::Fr);
        assert_eq!(token.amount_color, ColorToken::Positive);
        assert_eq!(token.icon_container, IconToken::Mobile);
        assert_eq!(token.status.label, "En attente");
    }

    proptest! {
        #[test]
        fn unknown_status_is_echoed(raw in "[a-z_]{1,16}") {
            prop_assume!(!["completed", "pending", "failed"].contains(&raw.as_str()));
            let token = classify_status(&TransactionStatus::from(raw.as_str()));
            prop_assert_eq!(token.color, ColorToken::NeutralGray);
            prop_assert_eq!(&*token.label, raw.as_str());
        }

        #[test]
        fn classifiers_are_total(raw in ".*") {
            let _ = classify_amount_color(&raw);
            let _ = classify_transaction_type(&TransactionType::from(raw.as_str()));
            let _ = classify_status(&TransactionStatus::from(raw.as_str()));
        }

        #[test]
        fn decoded_amount_color_matches_raw_string(raw in ".*") {
            let amount = finboard_shared::SignedAmount::lenient(raw.as_str());
            prop_assert_eq!(classify_sign(amount.sign()), classify_amount_color(&raw));
            prop_assert_eq!(amount.to_string(), raw);
        }
    }
}
