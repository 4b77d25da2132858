//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setTimeout`，不依赖 `gloo-timers`。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 回调执行后闭包由 wasm-bindgen 自动释放；不提供取消。
pub struct Timeout;

impl Timeout {
    /// 在 `millis` 毫秒后执行一次 `callback`
    ///
    /// # 返回
    /// - `Some(handle)` 定时器句柄
    /// - `None` 无法获取 window 或设置定时器失败（回调不会执行）
    pub fn once<F>(millis: u32, callback: F) -> Option<i32>
    where
        F: FnOnce() + 'static,
    {
        let window = web_sys::window()?;
        let closure = Closure::once_into_js(callback);
        let timeout = i32::try_from(millis).unwrap_or(i32::MAX);

        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                timeout,
            )
            .ok()
    }
}
