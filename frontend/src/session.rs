//! 会话模块
//!
//! 包装外部 Session Oracle 的结果。路由服务只通过注入的信号读取会话，
//! 本模块之外的组件不修改会话状态。

use finboard_shared::{SessionState, SessionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BankApi;
use crate::web::router::RouterService;

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文，初始为加载中
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::loading());
        Self { state, set_state }
    }

    /// 会话状态的派生信号；只在 `(is_loading, is_authenticated)` 决定的状态变化时通知
    ///
    /// 路由服务通过它选择路由表，用户资料的变化不会触发路由表重算。
    pub fn status_signal(&self) -> Memo<SessionStatus> {
        let state = self.state;
        Memo::new(move |_| state.with(SessionState::status))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 向服务端查询会话
///
/// 查询失败视为匿名访客，不向用户报错。
pub fn init_session(ctx: SessionContext, api: BankApi) {
    ctx.set_state.set(SessionState::loading());

    spawn_local(async move {
        let state = match api.fetch_session().await {
            Ok(mut state) => {
                state.is_loading = false;
                log::info!("[Session] Resolved as {:?}", state.status());
                state
            }
            Err(e) => {
                log::warn!("[Session] Lookup failed, continuing anonymously: {}", e);
                SessionState::anonymous()
            }
        };
        ctx.set_state.set(state);
    });
}

/// 注销：清除本地会话并回到 `/`
///
/// 路由表会随会话状态自动切换回公开表，`/` 随之解析为落地页。
pub fn logout(ctx: &SessionContext, router: &RouterService) {
    ctx.set_state.update(SessionState::sign_out);
    log::info!("[Session] Signed out");
    router.navigate("/");
}

#[cfg(test)]
mod tests {
    use super::*;
    use finboard_shared::UserProfile;

    fn user() -> UserProfile {
        UserProfile {
            first_name: Some("Awa".into()),
            last_name: Some("Diallo".into()),
            email: None,
        }
    }

    #[test]
    fn status_signal_follows_session_state() {
        let owner = Owner::new();
        owner.set();

        let ctx = SessionContext::new();
        let status = ctx.status_signal();
        assert_eq!(status.get_untracked(), SessionStatus::Public);

        ctx.set_state.set(SessionState::authenticated(user()));
        assert_eq!(status.get_untracked(), SessionStatus::Authenticated);

        // 加载中即便带着认证标记也视为未认证
        ctx.set_state.update(|state| state.is_loading = true);
        assert_eq!(status.get_untracked(), SessionStatus::Public);

        ctx.set_state.update(SessionState::sign_out);
        assert_eq!(status.get_untracked(), SessionStatus::Public);
        assert_eq!(ctx.state.get_untracked(), SessionState::anonymous());
    }
}
