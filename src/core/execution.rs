//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! A strictly sequential engine: each test runs to completion before the
//! next one starts. Around every body the engine fires the lifecycle hooks
//! (start, then exactly one of success / failure / error), and panics raised
//! by the body are caught so the record written so far survives.
//!
//! 严格顺序执行的引擎：每个测试运行完毕后才开始下一个。
//! 引擎在每个测试体前后触发生命周期钩子（开始，然后恰好一个成功/失败/错误），
//! 并捕获测试体引发的 panic，使已写入的记录得以保留。
//!
//! There is no timeout: a body that never returns blocks the run.

use crate::core::case::TestCase;
use crate::core::collector::ResultCollector;
use crate::core::description::describe;
use crate::core::models::ResultRecord;
use crate::core::outcome::Outcome;
use crate::core::suite::{Suite, TestMethod};
use crate::infra::panic::guard;

/// Engine callbacks marking test start and completion.
/// 标记测试开始和完成的引擎回调。
pub trait LifecycleHooks {
    /// Creates the record for a test that is about to run.
    fn start_test(&mut self, class_name: &str, method: &TestMethod) -> ResultRecord;

    fn add_success(&mut self, record: ResultRecord);

    /// An unexpected error escaped the test body.
    fn add_error(&mut self, record: ResultRecord, error: &str);

    /// An assertion inside the test body did not hold.
    fn add_failure(&mut self, record: ResultRecord, failure: &str);
}

/// The capturing result object: finalizes records and collects them for the
/// current run.
///
/// 捕获式结果对象：最终确定记录并为当前运行收集它们。
#[derive(Debug, Default)]
pub struct CaptureResult {
    collector: ResultCollector,
}

impl CaptureResult {
    /// Starts a run with an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collector(&self) -> &ResultCollector {
        &self.collector
    }

    pub fn into_collector(self) -> ResultCollector {
        self.collector
    }
}

impl LifecycleHooks for CaptureResult {
    fn start_test(&mut self, class_name: &str, method: &TestMethod) -> ResultRecord {
        let description = method
            .doc
            .as_deref()
            .map(str::trim)
            .filter(|doc| !doc.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| describe(&method.name));
        tracing::debug!(test = %method.name, class = class_name, "test started");
        ResultRecord::start(&method.name, description, class_name)
    }

    fn add_success(&mut self, mut record: ResultRecord) {
        record.finish_passed();
        tracing::debug!(test = %record.name, "test passed");
        self.collector.append(record);
    }

    fn add_error(&mut self, mut record: ResultRecord, error: &str) {
        record.finish_errored(error);
        tracing::debug!(test = %record.name, error, "test errored");
        self.collector.append(record);
    }

    fn add_failure(&mut self, mut record: ResultRecord, failure: &str) {
        record.finish_failed(failure);
        tracing::debug!(test = %record.name, failure, "test failed");
        self.collector.append(record);
    }
}

/// Runs a single test method and reports it through `hooks`.
/// 运行单个测试方法并通过 `hooks` 报告结果。
pub fn run_test(class_name: &str, method: &TestMethod, hooks: &mut dyn LifecycleHooks) -> Outcome {
    let record = hooks.start_test(class_name, method);
    let mut case = TestCase::new(record);

    let outcome = Outcome::from_run(guard(|| (method.body)(&mut case)));
    let record = case.into_record();

    match &outcome {
        Outcome::Passed => hooks.add_success(record),
        Outcome::Failed(failure) => hooks.add_failure(record, failure),
        Outcome::Errored(error) => hooks.add_error(record, error),
    }
    outcome
}

/// Runs every test of `suite` in order.
/// 按顺序运行 `suite` 中的每个测试。
pub fn run_suite(suite: &Suite, hooks: &mut dyn LifecycleHooks) -> Vec<Outcome> {
    suite
        .tests()
        .iter()
        .map(|method| run_test(suite.class_name(), method, hooks))
        .collect()
}
