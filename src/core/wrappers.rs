//! # Declarative Wrappers Module / 声明式包装器模块
//!
//! [`SafeTest`] turns a plain value-producing body into a full assertion with
//! automatic capture. The body only returns the value under test; the wrapper
//! records the input, captures expected/actual, applies the comparison
//! strategy and converts any error the body raises into an assertion failure.
//!
//! [`SafeTest`] 将普通的产值测试体转换为带自动捕获的完整断言。
//! 测试体只需返回被测值；包装器负责记录输入、捕获期望值/实际值、
//! 应用比较策略，并将测试体引发的任何错误转换为断言失败。
//!
//! ```
//! use capture_runner::core::wrappers::SafeTest;
//! use capture_runner::core::suite::TestCollection;
//!
//! let collection = TestCollection::new("MainTests").test(
//!     "test_add_basic",
//!     SafeTest::equals(15)
//!         .message("Should return 15")
//!         .input(vec![10, 5])
//!         .wrap(|_| Ok((10 + 5).into())),
//! );
//! assert_eq!(collection.len(), 1);
//! ```

use std::cmp::Ordering;

use crate::core::case::TestCase;
use crate::core::outcome::{CaseResult, Fault, is_assertion_panic};
use crate::core::value::{Value, ValueKind};
use crate::infra::panic::guard;

/// Comparison strategy applied to the body's return value.
/// 应用于测试体返回值的比较策略。
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    Equals(Value),
    Contains(String),
    GreaterEqual(Value),
    LessEqual(Value),
    Greater(Value),
    Less(Value),
    InstanceOf(ValueKind),
    IsNone,
}

impl Expectation {
    /// How the expected side is shown in reports.
    /// 期望值一侧在报告中的显示方式。
    pub fn render_expected(&self) -> String {
        match self {
            Expectation::Equals(v) => v.to_string(),
            Expectation::Contains(s) => format!("contains '{s}'"),
            Expectation::GreaterEqual(v) => format!(">= {v}"),
            Expectation::LessEqual(v) => format!("<= {v}"),
            Expectation::Greater(v) => format!("> {v}"),
            Expectation::Less(v) => format!("< {v}"),
            Expectation::InstanceOf(kind) => format!("instance of {kind}"),
            Expectation::IsNone => "None".to_string(),
        }
    }

    /// How the observed value is shown in reports.
    pub fn render_actual(&self, actual: &Value) -> String {
        match self {
            Expectation::InstanceOf(_) => actual.type_name().to_string(),
            _ => actual.to_string(),
        }
    }

    /// Compares `actual` against this expectation.
    ///
    /// Returns `Ok(None)` on a match, `Ok(Some(reason))` on a mismatch and
    /// `Err(error)` when the comparison itself is not possible (ordering
    /// values of incompatible types).
    ///
    /// 将 `actual` 与此期望进行比较。
    /// 匹配时返回 `Ok(None)`，不匹配时返回 `Ok(Some(reason))`，
    /// 比较本身无法进行时（对不兼容类型的值排序）返回 `Err(error)`。
    pub fn evaluate(&self, actual: &Value) -> Result<Option<String>, String> {
        let mismatch = |holds: bool, reason: String| if holds { None } else { Some(reason) };

        let verdict = match self {
            Expectation::Equals(expected) => mismatch(
                actual == expected,
                format!("Expected {expected}, but got {actual}"),
            ),
            Expectation::Contains(substring) => mismatch(
                actual.to_string().contains(substring.as_str()),
                format!("Expected '{actual}' to contain '{substring}'"),
            ),
            Expectation::GreaterEqual(min) => mismatch(
                ordering(actual, min, ">=")? != Ordering::Less,
                format!("Expected {actual} to be >= {min}"),
            ),
            Expectation::LessEqual(max) => mismatch(
                ordering(actual, max, "<=")? != Ordering::Greater,
                format!("Expected {actual} to be <= {max}"),
            ),
            Expectation::Greater(min) => mismatch(
                ordering(actual, min, ">")? == Ordering::Greater,
                format!("Expected {actual} to be greater than {min}"),
            ),
            Expectation::Less(max) => mismatch(
                ordering(actual, max, "<")? == Ordering::Less,
                format!("Expected {actual} to be less than {max}"),
            ),
            Expectation::InstanceOf(kind) => mismatch(
                kind.matches(actual),
                format!(
                    "Expected {actual} to be instance of {kind}, got {}",
                    actual.type_name()
                ),
            ),
            Expectation::IsNone => mismatch(
                actual.is_none(),
                format!("Expected None, but got {actual}"),
            ),
        };

        Ok(verdict)
    }
}

fn ordering(actual: &Value, bound: &Value, op: &'static str) -> Result<Ordering, String> {
    actual.try_cmp(bound, op).map_err(|e| e.to_string())
}

/// A value-returning test body.
pub type ValueBody = dyn Fn(&mut TestCase) -> anyhow::Result<Value>;

/// Builder for a declaratively wrapped test.
/// 声明式包装测试的构建器。
#[derive(Debug, Clone)]
pub struct SafeTest {
    expectation: Expectation,
    message: Option<String>,
    input: Option<Value>,
}

impl SafeTest {
    pub fn new(expectation: Expectation) -> Self {
        Self {
            expectation,
            message: None,
            input: None,
        }
    }

    /// Expects the body to return a value equal to `expected`.
    pub fn equals(expected: impl Into<Value>) -> Self {
        Self::new(Expectation::Equals(expected.into()))
    }

    /// Expects the body's string form to contain `substring`.
    pub fn contains(substring: impl Into<String>) -> Self {
        Self::new(Expectation::Contains(substring.into()))
    }

    pub fn greater_equal(min: impl Into<Value>) -> Self {
        Self::new(Expectation::GreaterEqual(min.into()))
    }

    pub fn less_equal(max: impl Into<Value>) -> Self {
        Self::new(Expectation::LessEqual(max.into()))
    }

    pub fn greater(min: impl Into<Value>) -> Self {
        Self::new(Expectation::Greater(min.into()))
    }

    pub fn less(max: impl Into<Value>) -> Self {
        Self::new(Expectation::Less(max.into()))
    }

    pub fn instance_of(kind: ValueKind) -> Self {
        Self::new(Expectation::InstanceOf(kind))
    }

    pub fn none() -> Self {
        Self::new(Expectation::IsNone)
    }

    /// Educational message stored on the record alongside expected/actual.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Input sample recorded before the body runs.
    pub fn input(mut self, input: impl Into<Value>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// Wraps `body` into a runnable test body.
    /// 将 `body` 包装为可运行的测试体。
    pub fn wrap<F>(self, body: F) -> impl Fn(&mut TestCase) -> CaseResult + 'static
    where
        F: Fn(&mut TestCase) -> anyhow::Result<Value> + 'static,
    {
        move |case: &mut TestCase| self.run(case, &body)
    }

    /// Runs `body` against `case` under this wrapper's contract.
    pub fn run(&self, case: &mut TestCase, body: &ValueBody) -> CaseResult {
        if let Some(input) = &self.input {
            case.set_input(input.clone());
        }

        let expected = self.expectation.render_expected();
        let message = self.message.as_deref();

        let error = match guard(|| body(case)) {
            Ok(Ok(actual)) => {
                case.set_expected_actual(&expected, self.expectation.render_actual(&actual), message);
                match self.expectation.evaluate(&actual) {
                    Ok(None) => return Ok(()),
                    Ok(Some(reason)) => return Err(Fault::Assertion(reason)),
                    Err(error) => error,
                }
            }
            Ok(Err(err)) => match Fault::from(err) {
                fault @ Fault::Assertion(_) => return Err(fault),
                Fault::Error(error) => error,
            },
            Err(panic) if is_assertion_panic(&panic) => return Err(Fault::Assertion(panic)),
            Err(panic) => panic,
        };

        case.set_expected_actual(&expected, format!("Error: {error}"), message);
        Err(Fault::Assertion(format!("Test failed with error: {error}")))
    }
}
