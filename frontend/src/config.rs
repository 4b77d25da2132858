//! 应用配置
//!
//! 配置在编译期确定，通过 Context 下发到组件树。
//! 可用环境变量覆盖：
//! - `FINBOARD_API_URL`: 后端地址（缺省为同源）
//! - `FINBOARD_LOCALE`: `fr` | `en`

use leptos::prelude::use_context;

/// 延迟回调的默认延迟（毫秒）
pub const DEFAULT_GUARD_DELAY_MS: u32 = 100;
/// 批量回调之间的间隔（毫秒）
pub const BATCH_STAGGER_MS: u32 = 50;
/// 余额隐藏或无法解析时显示的占位符
pub const MASKED_BALANCE: &str = "••••••••";

/// 显示语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// 解析语言代码，未知值返回 `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Locale::Fr),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }

    /// 千位分隔符
    pub fn group_separator(&self) -> char {
        match self {
            Locale::Fr => ' ',
            Locale::En => ',',
        }
    }

    /// 小数点
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::Fr => ',',
            Locale::En => '.',
        }
    }
}

/// 延迟回调的时间参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardConfig {
    pub default_delay_ms: u32,
    pub stagger_ms: u32,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: DEFAULT_GUARD_DELAY_MS,
            stagger_ms: BATCH_STAGGER_MS,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// 后端地址，空字符串表示同源
    pub api_base_url: String,
    pub locale: Locale,
    pub guard: GuardConfig,
}

impl AppConfig {
    /// 从编译期环境变量构建
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FINBOARD_API_URL"), option_env!("FINBOARD_LOCALE"))
    }

    fn from_values(api_url: Option<&str>, locale: Option<&str>) -> Self {
        let locale = match locale {
            Some(code) => Locale::from_code(code).unwrap_or_else(|| {
                log::warn!("[Config] Unknown locale {:?}, falling back to fr", code);
                Locale::default()
            }),
            None => Locale::default(),
        };

        Self {
            api_base_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            locale,
            guard: GuardConfig::default(),
        }
    }
}

/// 从 Context 获取配置，未提供时使用默认值
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(config.guard.default_delay_ms, 100);
        assert_eq!(config.guard.stagger_ms, 50);
    }

    #[test]
    fn overrides_and_unknown_locale() {
        let config = AppConfig::from_values(Some("https://api.bank.test/"), Some("EN"));
        assert_eq!(config.api_base_url, "https://api.bank.test");
        assert_eq!(config.locale, Locale::En);

        assert_eq!(AppConfig::from_values(None, Some("xx")).locale, Locale::Fr);
    }
}
