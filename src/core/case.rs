//! # Capturing Test Case Module / 捕获式测试用例模块
//!
//! [`TestCase`] is the context handed to every test body. Its helpers write
//! expected/actual values, input samples and messages into the current
//! Result Record *before* delegating to a plain assertion, so a failing test
//! still reports what was expected and what was observed.
//!
//! [`TestCase`] 是传递给每个测试体的上下文。其辅助方法在委托给普通断言*之前*
//! 将期望值/实际值、输入样本和消息写入当前结果记录，
//! 因此失败的测试仍会报告期望的内容和观察到的内容。

use std::fmt::Display;

use crate::core::models::ResultRecord;
use crate::core::outcome::{CaseResult, Fault, is_assertion_panic};
use crate::core::value::{Value, ValueKind, render_input};
use crate::infra::panic::guard;

/// Either a pre-computed value or a deferred computation producing one.
///
/// Tolerant capture helpers accept both, so a test that forgot to defer the
/// call (or whose call already failed) is still reported instead of crashing
/// the harness. Any `T` converts into `Supplied::Value`.
///
/// 预先计算的值，或产生该值的延迟计算。
/// 容错捕获辅助方法两者都接受，因此忘记延迟调用（或调用已失败）的测试
/// 仍会被报告，而不会使测试框架崩溃。任何 `T` 都可转换为 `Supplied::Value`。
pub enum Supplied<'a, T> {
    Value(T),
    Call(Box<dyn FnOnce() -> anyhow::Result<T> + 'a>),
}

impl<'a, T: 'a> Supplied<'a, T> {
    pub fn call(producer: impl FnOnce() -> anyhow::Result<T> + 'a) -> Self {
        Supplied::Call(Box::new(producer))
    }

    /// Wraps the result of a call that already happened.
    pub fn from_result(result: anyhow::Result<T>) -> Self {
        match result {
            Ok(value) => Supplied::Value(value),
            Err(err) => Supplied::Call(Box::new(move || Err(err))),
        }
    }

    fn resolve(self) -> Produced<T> {
        match self {
            Supplied::Value(value) => Produced::Value(value),
            Supplied::Call(producer) => produce(producer),
        }
    }
}

impl<'a, T> From<T> for Supplied<'a, T> {
    fn from(value: T) -> Self {
        Supplied::Value(value)
    }
}

/// What running a producer yielded.
enum Produced<T> {
    Value(T),
    /// An assertion raised inside the producer.
    Assertion(Fault),
    /// Any other error or panic, as text.
    Error(String),
}

fn produce<T>(producer: impl FnOnce() -> anyhow::Result<T>) -> Produced<T> {
    match guard(producer) {
        Ok(Ok(value)) => Produced::Value(value),
        Ok(Err(err)) => match err.downcast::<Fault>() {
            Ok(fault @ Fault::Assertion(_)) => Produced::Assertion(fault),
            Ok(Fault::Error(text)) => Produced::Error(text),
            Err(other) => Produced::Error(format!("{other:#}")),
        },
        Err(panic) if is_assertion_panic(&panic) => Produced::Assertion(Fault::Assertion(panic)),
        Err(panic) => Produced::Error(panic),
    }
}

fn check(holds: bool, message: impl FnOnce() -> String) -> CaseResult {
    if holds {
        Ok(())
    } else {
        Err(Fault::Assertion(message()))
    }
}

/// The per-test capture context.
/// 每个测试的捕获上下文。
#[derive(Debug)]
pub struct TestCase {
    record: ResultRecord,
}

impl TestCase {
    pub fn new(record: ResultRecord) -> Self {
        Self { record }
    }

    /// The record as populated so far.
    pub fn record(&self) -> &ResultRecord {
        &self.record
    }

    pub fn into_record(self) -> ResultRecord {
        self.record
    }

    /// Stores string renderings of `expected` and `actual`. A non-empty
    /// `message` replaces the record's message right away.
    ///
    /// 存储 `expected` 和 `actual` 的字符串形式。非空的 `message`
    /// 会立即替换记录中的消息。
    pub fn set_expected_actual(
        &mut self,
        expected: impl Display,
        actual: impl Display,
        message: Option<&str>,
    ) {
        self.record.expected = Some(expected.to_string());
        self.record.actual = Some(actual.to_string());
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            self.record.message = Some(message.to_string());
        }
    }

    /// Records the data driving this test.
    /// 记录驱动此测试的数据。
    pub fn set_input(&mut self, value: impl Into<Value>) {
        self.record.input = Some(render_input(&value.into()));
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.record.message = Some(message.into());
    }

    pub fn set_description_and_message(
        &mut self,
        description: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.record.description = description.into();
        self.record.message = Some(message.into());
    }

    /// Fails the current test with `message`.
    pub fn fail(&self, message: impl Into<String>) -> CaseResult {
        Err(Fault::assertion(message))
    }

    pub fn assert_equal_and_capture<A, E>(
        &mut self,
        actual: A,
        expected: E,
        message: Option<&str>,
    ) -> CaseResult
    where
        A: PartialEq<E> + Display,
        E: Display,
    {
        self.set_expected_actual(&expected, &actual, message);
        check(actual == expected, || format!("{actual} != {expected}"))
    }

    pub fn assert_in_and_capture<T>(
        &mut self,
        member: &T,
        container: &[T],
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialEq + Display,
    {
        let found = container.contains(member);
        self.set_expected_actual(
            format!("'{member}' in container"),
            Value::Bool(found),
            message,
        );
        check(found, || format!("{member} not found in container"))
    }

    pub fn assert_not_in_and_capture<T>(
        &mut self,
        member: &T,
        container: &[T],
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialEq + Display,
    {
        let absent = !container.contains(member);
        self.set_expected_actual(
            format!("'{member}' not in container"),
            Value::Bool(absent),
            message,
        );
        check(absent, || format!("{member} unexpectedly found in container"))
    }

    pub fn assert_contains_and_capture(
        &mut self,
        text: &str,
        substring: &str,
        message: Option<&str>,
    ) -> CaseResult {
        self.set_expected_actual(
            format!("text containing '{substring}'"),
            format!("'{text}'"),
            message,
        );
        check(text.contains(substring), || {
            format!("'{substring}' not found in '{text}'")
        })
    }

    pub fn assert_greater_and_capture<T>(&mut self, a: T, b: T, message: Option<&str>) -> CaseResult
    where
        T: PartialOrd + Display,
    {
        self.set_expected_actual(format!("value > {b}"), &a, message);
        check(a > b, || format!("{a} not greater than {b}"))
    }

    pub fn assert_less_and_capture<T>(&mut self, a: T, b: T, message: Option<&str>) -> CaseResult
    where
        T: PartialOrd + Display,
    {
        self.set_expected_actual(format!("value < {b}"), &a, message);
        check(a < b, || format!("{a} not less than {b}"))
    }

    pub fn assert_greater_equal_and_capture<T>(
        &mut self,
        a: T,
        b: T,
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialOrd + Display,
    {
        self.set_expected_actual(format!("value >= {b}"), &a, message);
        check(a >= b, || format!("{a} not greater than or equal to {b}"))
    }

    pub fn assert_less_equal_and_capture<T>(
        &mut self,
        a: T,
        b: T,
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialOrd + Display,
    {
        self.set_expected_actual(format!("value <= {b}"), &a, message);
        check(a <= b, || format!("{a} not less than or equal to {b}"))
    }

    pub fn assert_is_instance_and_capture(
        &mut self,
        value: &Value,
        kind: ValueKind,
        message: Option<&str>,
    ) -> CaseResult {
        self.set_expected_actual(format!("instance of {kind}"), value.type_name(), message);
        check(kind.matches(value), || {
            format!("{value} is not an instance of <class '{kind}'>")
        })
    }

    pub fn assert_is_none_and_capture(
        &mut self,
        value: impl Into<Value>,
        message: Option<&str>,
    ) -> CaseResult {
        let value = value.into();
        self.set_expected_actual("None", &value, message);
        check(value.is_none(), || format!("{value} is not None"))
    }

    /// Calls `producer` and compares its result with `expected`.
    ///
    /// An error or panic inside the producer is captured as the actual value
    /// and fails the test; an assertion failure raised by the producer itself
    /// is passed through unchanged.
    ///
    /// 调用 `producer` 并将其结果与 `expected` 比较。
    /// 生产者内部的错误或 panic 会被捕获为实际值并使测试失败；
    /// 生产者自身引发的断言失败则原样传递。
    pub fn assert_call_and_capture<T, F>(
        &mut self,
        producer: F,
        expected: T,
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialEq + Display,
        F: FnOnce() -> anyhow::Result<T>,
    {
        match produce(producer) {
            Produced::Value(actual) => {
                self.set_expected_actual(&expected, &actual, message);
                check(actual == expected, || {
                    format!("Expected {expected}, but got {actual}")
                })
            }
            Produced::Assertion(fault) => Err(fault),
            Produced::Error(error) => {
                self.set_expected_actual(&expected, format!("Error: {error}"), message);
                Err(Fault::Assertion(format!("Function call failed: {error}")))
            }
        }
    }

    /// Tolerant variant of [`assert_call_and_capture`](Self::assert_call_and_capture):
    /// accepts a value or a deferred call and never lets the producer's error
    /// escape. Expected/actual are always recorded before the comparison.
    ///
    /// [`assert_call_and_capture`](Self::assert_call_and_capture) 的容错变体：
    /// 接受值或延迟调用，绝不让生产者的错误逃逸。
    /// 比较之前总会记录期望值/实际值。
    pub fn assert_safe_call_and_capture<'a, T>(
        &mut self,
        value_or_producer: impl Into<Supplied<'a, T>>,
        expected: T,
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialEq + Display + 'a,
    {
        match value_or_producer.into().resolve() {
            Produced::Value(actual) => {
                self.set_expected_actual(&expected, &actual, message);
                check(actual == expected, || {
                    format!("Expected {expected}, but got {actual}")
                })
            }
            Produced::Assertion(fault) => self.runtime_error(&expected, &fault.to_string(), message),
            Produced::Error(error) => self.runtime_error(&expected, &error, message),
        }
    }

    fn runtime_error(&mut self, expected: &dyn Display, error: &str, message: Option<&str>) -> CaseResult {
        let actual = format!("Runtime error: {error}");
        self.set_expected_actual(expected, &actual, message);
        Err(Fault::Assertion(format!("Test execution failed: {actual}")))
    }

    /// Ad-hoc tolerant helper with the same contract as
    /// [`assert_safe_call_and_capture`](Self::assert_safe_call_and_capture).
    pub fn safe_test_wrapper<'a, T>(
        &mut self,
        value_or_producer: impl Into<Supplied<'a, T>>,
        expected: T,
        message: Option<&str>,
    ) -> CaseResult
    where
        T: PartialEq + Display + 'a,
    {
        let error = match value_or_producer.into().resolve() {
            Produced::Value(actual) => {
                self.set_expected_actual(&expected, &actual, message);
                return check(actual == expected, || {
                    format!("Expected {expected}, but got {actual}")
                });
            }
            Produced::Assertion(fault) => fault.to_string(),
            Produced::Error(error) => error,
        };

        self.set_expected_actual(&expected, format!("Error: {error}"), message);
        Err(Fault::Assertion(format!("Test failed with error: {error}")))
    }
}
