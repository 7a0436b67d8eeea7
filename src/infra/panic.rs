//! # Panic Isolation Module / Panic 隔离模块
//!
//! Test bodies run student code that may panic (division by zero, index out
//! of bounds, explicit `panic!`). This module catches those panics so one test
//! cannot take down the run, extracts their message for the report, and
//! silences the default panic hook so the machine-parsed stdout stays clean.
//!
//! 测试体运行的学生代码可能会 panic（除以零、索引越界、显式 `panic!`）。
//! 此模块捕获这些 panic，使单个测试无法拖垮整个运行，提取其消息用于报告，
//! 并静默默认的 panic 钩子，以保持供机器解析的标准输出干净。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Extracts the human-readable message from a panic payload.
/// 从 panic 负载中提取人类可读的消息。
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}

/// Runs `f`, converting a panic into `Err(message)`.
/// 运行 `f`，将 panic 转换为 `Err(message)`。
pub fn guard<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

/// Replaces the panic hook with a silent one until dropped, then restores
/// the previous hook.
///
/// 在被丢弃之前将 panic 钩子替换为静默钩子，丢弃时恢复之前的钩子。
pub struct QuietPanics {
    previous: Option<PanicHook>,
}

impl QuietPanics {
    pub fn install() -> Self {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|_| {}));
        Self {
            previous: Some(previous),
        }
    }
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        // set_hook itself panics when called from a panicking thread.
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}
