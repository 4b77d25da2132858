//! 会话模型
//!
//! 会话由外部的 Session Oracle 提供，本地只读。

use crate::FALLBACK_INITIAL;
use serde::{Deserialize, Serialize};

/// 用户资料（字段均可能缺失）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// 取字符串首个非空白字符并大写
fn first_upper(value: Option<&str>) -> Option<String> {
    value
        .and_then(|v| v.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
}

impl UserProfile {
    /// 头像首字母
    ///
    /// 优先使用名与姓的首字母；都缺失时退回邮箱首字母；再退回 `"U"`。
    pub fn initials(&self) -> String {
        let from_name: String = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(first_upper)
            .collect();

        if !from_name.is_empty() {
            return from_name;
        }

        first_upper(self.email.as_deref()).unwrap_or_else(|| FALLBACK_INITIAL.to_string())
    }
}

/// 会话状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// 路由仲裁所依据的会话状态（只有两种）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// 未认证或仍在加载
    #[default]
    Public,
    Authenticated,
}

impl SessionState {
    /// 正在向服务端查询会话
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// 已确认的匿名访客
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user: Some(user),
        }
    }

    /// 本地注销：清除用户与认证标记
    pub fn sign_out(&mut self) {
        self.is_authenticated = false;
        self.is_loading = false;
        self.user = None;
    }

    /// 加载期间的 `is_authenticated` 不可信，一律视为未认证
    pub fn status(&self) -> SessionStatus {
        if self.is_authenticated && !self.is_loading {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Public
        }
    }

    /// 当前用户的头像首字母
    pub fn initials(&self) -> String {
        self.user
            .as_ref()
            .map(UserProfile::initials)
            .unwrap_or_else(|| FALLBACK_INITIAL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> UserProfile {
        UserProfile {
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn status_ignores_auth_flag_while_loading() {
        let mut state = SessionState::loading();
        state.is_authenticated = true;
        assert_eq!(state.status(), SessionStatus::Public);

        state.is_loading = false;
        assert_eq!(state.status(), SessionStatus::Authenticated);

        assert_eq!(SessionState::anonymous().status(), SessionStatus::Public);
    }

    #[test]
    fn sign_out_returns_to_public() {
        let mut state = SessionState::authenticated(profile(Some("awa"), None, None));
        assert_eq!(state.status(), SessionStatus::Authenticated);

        state.sign_out();
        assert_eq!(state, SessionState::anonymous());
        assert_eq!(state.status(), SessionStatus::Public);
        assert_eq!(state.initials(), "U");
    }

    #[test]
    fn initials_from_names() {
        let user = profile(Some("awa"), Some("diallo"), Some("x@bank.test"));
        assert_eq!(user.initials(), "AD");
        assert_eq!(profile(Some("moussa"), None, None).initials(), "M");
    }

    #[test]
    fn initials_fall_back_to_email_then_u() {
        assert_eq!(profile(None, None, Some("kofi@bank.test")).initials(), "K");
        assert_eq!(profile(Some(" "), None, Some("kofi@bank.test")).initials(), "K");
        assert_eq!(profile(None, None, None).initials(), "U");
        assert_eq!(SessionState::anonymous().initials(), "U");
    }

    #[test]
    fn decodes_camel_case_payload() {
        let json = r#"{"isAuthenticated":true,"user":{"firstName":"Ana","email":"a@b.c"}}"#;
        let state: SessionState = serde_json::from_str(json).unwrap();
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.initials(), "A");
    }
}
