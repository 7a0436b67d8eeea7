//! # Outcome Module / 结果类型模块
//!
//! Test bodies report how they ended through explicit types rather than an
//! exception hierarchy. A body returns [`CaseResult`]; the executor turns that
//! (or a caught panic) into an [`Outcome`] and fires the matching hook.
//!
//! 测试体通过显式类型而非异常层次结构报告其结束方式。
//! 测试体返回 [`CaseResult`]；执行器将其（或捕获到的 panic）转换为
//! [`Outcome`] 并触发相应的钩子。

use thiserror::Error;

/// Why a test body stopped early.
/// 测试体提前结束的原因。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// An assertion did not hold. Reported as `FAILED`.
    /// 断言不成立。报告为 `FAILED`。
    #[error("{0}")]
    Assertion(String),
    /// An unexpected error escaped the body. Reported as `ERROR`.
    /// 意外错误从测试体中逃逸。报告为 `ERROR`。
    #[error("{0}")]
    Error(String),
}

impl Fault {
    pub fn assertion(message: impl Into<String>) -> Self {
        Fault::Assertion(message.into())
    }

    /// Uses the alternate form so an `anyhow` chain keeps its causes.
    pub fn error(error: impl std::fmt::Display) -> Self {
        Fault::Error(format!("{error:#}"))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Fault::Assertion(_))
    }
}

/// Any `anyhow` error bubbling out of a body is an unexpected error, unless it
/// wraps a `Fault` raised by a capture helper, which keeps its category.
impl From<anyhow::Error> for Fault {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<Fault>() {
            Ok(fault) => fault,
            Err(other) => Fault::Error(format!("{other:#}")),
        }
    }
}

/// Result type returned by test bodies and capture helpers.
/// 测试体和捕获辅助方法返回的结果类型。
pub type CaseResult = Result<(), Fault>;

/// Final outcome of one test, as seen by the lifecycle hooks.
/// 生命周期钩子所看到的单个测试的最终结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(String),
    Errored(String),
}

impl Outcome {
    /// Maps a body's return value, or the message of a panic it raised.
    ///
    /// Panics recognised by [`is_assertion_panic`] are plain assertion
    /// failures; every other panic is an unexpected error.
    ///
    /// 映射测试体的返回值，或其引发的 panic 的消息。
    /// 被 [`is_assertion_panic`] 识别的 panic 属于普通断言失败；其他 panic 均为意外错误。
    pub fn from_run(run: Result<CaseResult, String>) -> Self {
        match run {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(Fault::Assertion(message))) => Outcome::Failed(message),
            Ok(Err(Fault::Error(error))) => Outcome::Errored(error),
            Err(panic) if is_assertion_panic(&panic) => Outcome::Failed(panic),
            Err(panic) => Outcome::Errored(panic),
        }
    }
}

/// Recognises the panic messages of the standard assertion macros.
///
/// `assert!(cond)` without a message, and `assert_eq!`/`assert_ne!` with or
/// without one, all panic with a message starting with `assertion`. A custom
/// message given to plain `assert!` replaces that prefix entirely, so such a
/// panic cannot be told apart from any other and counts as an error. Bodies
/// that want a failure with their own wording use [`check!`](crate::check).
///
/// 识别标准断言宏的 panic 消息。带自定义消息的 `assert!` 会完全替换
/// `assertion` 前缀，因此无法与其他 panic 区分，按错误处理。
/// 需要自定义措辞的失败请使用 [`check!`](crate::check)。
pub fn is_assertion_panic(message: &str) -> bool {
    message.starts_with("assertion")
}

/// Fails the current test body with an assertion [`Fault`] unless `cond`
/// holds. Works in capture-style bodies (`CaseResult`) and in wrapped
/// bodies (`anyhow::Result<Value>`).
///
/// ```
/// use capture_runner::check;
/// use capture_runner::core::CaseResult;
///
/// fn body(total: i64) -> CaseResult {
///     check!(total == 5, "total should be 5, got {}", total);
///     Ok(())
/// }
///
/// assert!(body(5).is_ok());
/// assert!(body(4).unwrap_err().is_assertion());
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::core::Fault::assertion(concat!(
                "assertion failed: ",
                stringify!($cond)
            ))
            .into());
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::core::Fault::assertion(format!($($arg)+)).into());
        }
    };
}

/// Equality form of [`check!`](crate::check), worded like `assert_eq!`.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return Err($crate::core::Fault::assertion(format!(
                        "{:?} != {:?}",
                        left, right
                    ))
                    .into());
                }
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left == *right) {
                    return Err($crate::core::Fault::assertion(format!(
                        "{:?} != {:?}: {}",
                        left, right, format!($($arg)+)
                    ))
                    .into());
                }
            }
        }
    };
}
