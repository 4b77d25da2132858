//! 余额展示
//!
//! 负责余额的千位分组格式化、可见性切换和储蓄进度的截断。

use finboard_shared::parse_plain_decimal;
use thiserror::Error;

use crate::config::{Locale, MASKED_BALANCE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("余额不是有效数字: {0:?}")]
    NotNumeric(String),
}

/// 按语言习惯格式化余额
///
/// `"12345.6"` 在 fr 下为 `"12 345,6"`，在 en 下为 `"12,345.6"`。
/// 保留原始的小数位数，不做四舍五入。
/// 只接受普通十进制数，`"1e3"`、`"1_000"` 之类视为非数字。
pub fn format_balance(raw: &str, locale: Locale) -> Result<String, BalanceError> {
    let value =
        parse_plain_decimal(raw.trim()).ok_or_else(|| BalanceError::NotNumeric(raw.to_string()))?;

    let digits = value.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value.is_sign_negative() && !value.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, locale.group_separator()));
    if let Some(frac_part) = frac_part {
        out.push(locale.decimal_separator());
        out.push_str(frac_part);
    }
    Ok(out)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// 储蓄进度截断到 [0, 100]
pub fn clamp_progress(percent: i32) -> u8 {
    percent.clamp(0, 100) as u8
}

/// 进度条宽度样式
pub fn progress_width_style(percent: i32) -> String {
    format!("width: {}%", clamp_progress(percent))
}

/// 余额展示器
///
/// 持有唯一的本地可变状态 `visible`，外部只能拿到渲染后的字符串。
/// 每次挂载重新创建，默认可见，不做持久化。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancePresenter {
    visible: bool,
    locale: Locale,
}

impl BalancePresenter {
    pub fn new(locale: Locale) -> Self {
        Self {
            visible: true,
            locale,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// 隐藏时显示固定掩码；无法解析时同样显示掩码
    pub fn render(&self, raw: &str) -> String {
        if !self.visible {
            return MASKED_BALANCE.to_string();
        }

        format_balance(raw, self.locale).unwrap_or_else(|err| {
            log::warn!("[Balance] {}", err);
            MASKED_BALANCE.to_string()
        })
    }
}

impl Default for BalancePresenter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn ungroup(formatted: &str, locale: Locale) -> String {
        formatted
            .chars()
            .filter(|c| *c != locale.group_separator())
            .map(|c| if c == locale.decimal_separator() { '.' } else { c })
            .collect()
    }

    #[test]
    fn groups_thousands_per_locale() {
        assert_eq!(format_balance("12345.6", Locale::Fr).unwrap(), "12 345,6");
        assert_eq!(format_balance("12345.6", Locale::En).unwrap(), "12,345.6");
        assert_eq!(format_balance("1234567", Locale::Fr).unwrap(), "1 234 567");
        assert_eq!(format_balance("999", Locale::Fr).unwrap(), "999");
        assert_eq!(format_balance("-1500.25", Locale::Fr).unwrap(), "-1 500,25");
        assert_eq!(format_balance(" 0.00 ", Locale::En).unwrap(), "0.00");
    }

    #[test]
    fn non_numeric_is_an_error() {
        assert_eq!(
            format_balance("abc", Locale::Fr),
            Err(BalanceError::NotNumeric("abc".into()))
        );
        assert!(format_balance("", Locale::Fr).is_err());
        assert!(format_balance("12 345", Locale::Fr).is_err());
    }

    #[test]
    fn exponent_and_underscore_forms_are_masked() {
        assert!(format_balance("1e3", Locale::Fr).is_err());
        assert!(format_balance("1_000", Locale::En).is_err());
        assert_eq!(BalancePresenter::new(Locale::Fr).render("1e3"), MASKED_BALANCE);
        assert_eq!(BalancePresenter::new(Locale::Fr).render("1_000"), MASKED_BALANCE);
    }

    #[test]
    fn presenter_masks_when_hidden_or_malformed() {
        let mut presenter = BalancePresenter::default();
        assert!(presenter.is_visible());
        assert_eq!(presenter.render("not a number"), MASKED_BALANCE);

        presenter.toggle_visibility();
        assert!(!presenter.is_visible());
        assert_eq!(presenter.render("12345.6"), MASKED_BALANCE);
    }

    #[test]
    fn double_toggle_restores_display() {
        let mut presenter = BalancePresenter::new(Locale::Fr);
        let before = presenter.render("12345.6");
        presenter.toggle_visibility();
        presenter.toggle_visibility();
        assert_eq!(presenter.render("12345.6"), before);
        assert_eq!(before, "12 345,6");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(clamp_progress(150), 100);
        assert_eq!(clamp_progress(-10), 0);
        assert_eq!(clamp_progress(42), 42);
        assert_eq!(progress_width_style(150), "width: 100%");
        assert_eq!(progress_width_style(-10), "width: 0%");
    }

    proptest! {
        #[test]
        fn grouped_value_reparses_to_original(
            mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
            scale in 0u32..6,
            en in any::<bool>(),
        ) {
            let locale = if en { Locale::En } else { Locale::Fr };
            let original = Decimal::new(mantissa, scale);
            let formatted = format_balance(&original.to_string(), locale).unwrap();
            let reparsed = Decimal::from_str(&ungroup(&formatted, locale)).unwrap();
            prop_assert_eq!(reparsed, original);
        }
    }
}
