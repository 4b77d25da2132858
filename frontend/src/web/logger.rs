//! 日志初始化
//!
//! `log` 门面的后端由 wasm-logger 提供，按级别写入浏览器 console。

use log::Level;

/// 安装全局日志器
///
/// 只应在入口调用一次；重复设置时 wasm-logger 会在 console 报错而不是 panic。
pub fn init_logger(level: Level) {
    wasm_logger::init(wasm_logger::Config::new(level));
}
