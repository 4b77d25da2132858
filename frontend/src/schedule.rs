//! 延迟回调守卫
//!
//! 所有对 DOM 时序敏感的更新都经由 `Guard` 延迟执行：
//! - 单个任务在给定延迟后执行一次；
//! - 批量任务按输入顺序递增错开，保证执行顺序；
//! - 任务返回的错误或 panic 只记录警告，不向外传播。

#[cfg(test)]
mod tests;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::config::GuardConfig;

/// 延迟任务的失败原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("{0}")]
    Failed(String),
    #[error("panicked: {0}")]
    Panicked(String),
}

impl TaskError {
    pub fn failed(message: impl Into<String>) -> Self {
        TaskError::Failed(message.into())
    }
}

pub type TaskResult = Result<(), TaskError>;

/// 一个待执行的 UI 任务
pub type Task = Box<dyn FnOnce() -> TaskResult + 'static>;

/// 宿主的延迟执行队列
pub trait Scheduler {
    /// 在 `delay_ms` 之后执行一次 `job`
    ///
    /// 宿主在延迟结束前被销毁时，`job` 可能永远不会执行。
    fn defer(&self, delay_ms: u32, job: Box<dyn FnOnce() + 'static>);
}

/// 基于浏览器 `setTimeout` 的调度器
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay_ms: u32, job: Box<dyn FnOnce() + 'static>) {
        if crate::web::Timeout::once(delay_ms, job).is_none() {
            log::warn!("[Guard] setTimeout unavailable, task dropped");
        }
    }
}

/// 已调度任务的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduledHandle {
    /// 同一个 Guard 内严格递增
    pub seq: u64,
    pub delay_ms: u32,
}

/// 延迟回调守卫
#[derive(Clone)]
pub struct Guard<S> {
    scheduler: S,
    config: GuardConfig,
    next_seq: Arc<AtomicU64>,
}

/// 组件树中使用的守卫
pub type UiGuard = Guard<BrowserScheduler>;

/// 从 Context 获取守卫
pub fn use_guard() -> UiGuard {
    leptos::prelude::use_context::<UiGuard>().expect("UiGuard should be provided")
}

impl<S: Scheduler> Guard<S> {
    pub fn new(scheduler: S, config: GuardConfig) -> Self {
        Self {
            scheduler,
            config,
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// 在 `delay_ms` 后执行 `task`
    pub fn guard<F>(&self, task: F, delay_ms: u32) -> ScheduledHandle
    where
        F: FnOnce() -> TaskResult + 'static,
    {
        self.schedule(Box::new(task), delay_ms)
    }

    /// 使用默认延迟
    pub fn defer<F>(&self, task: F) -> ScheduledHandle
    where
        F: FnOnce() -> TaskResult + 'static,
    {
        self.guard(task, self.config.default_delay_ms)
    }

    /// 按输入顺序错开执行：第 i 个任务延迟 `i * stagger_ms`
    pub fn batch<I>(&self, tasks: I) -> Vec<ScheduledHandle>
    where
        I: IntoIterator<Item = Task>,
    {
        let stagger = self.config.stagger_ms.max(1);
        tasks
            .into_iter()
            .enumerate()
            .map(|(i, task)| {
                let delay = u32::try_from(i)
                    .ok()
                    .and_then(|i| i.checked_mul(stagger))
                    .unwrap_or(u32::MAX);
                self.schedule(task, delay)
            })
            .collect()
    }

    fn schedule(&self, task: Task, delay_ms: u32) -> ScheduledHandle {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.scheduler
            .defer(delay_ms, Box::new(move || run_contained(seq, task)));
        ScheduledHandle { seq, delay_ms }
    }
}

/// 执行任务并吞掉失败，只留日志
fn run_contained(seq: u64, task: Task) {
    let result = panic::catch_unwind(AssertUnwindSafe(task))
        .unwrap_or_else(|payload| Err(TaskError::Panicked(panic_message(payload.as_ref()))));

    if let Err(err) = result {
        log::warn!("[Guard] deferred task #{} failed: {}", seq, err);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
