//! 展示层纯逻辑
//!
//! 不依赖 DOM，全部可在宿主机上测试。

pub mod balance;
pub mod classify;
pub mod nav;
pub mod text;
