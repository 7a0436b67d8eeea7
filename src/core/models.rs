//! # Data Models Module / 数据模型模块
//!
//! This module defines the per-test Result Record, its status lifecycle and
//! the default educational messages substituted when a test finishes without
//! an author-supplied message.
//!
//! 此模块定义每个测试的结果记录、其状态生命周期，
//! 以及在测试结束且作者未提供消息时替换使用的默认教学消息。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message attached to a passing test when none was set explicitly.
/// 未显式设置消息时附加到通过测试的消息。
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Great job! This test passed successfully.";

/// Status of a single test. `Running` is the only non-terminal state.
/// 单个测试的状态。`Running` 是唯一的非终止状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    #[default]
    Running,
    Passed,
    Failed,
    Error,
}

impl TestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TestStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Running => "RUNNING",
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
            TestStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured outcome of one executed test.
///
/// Created by the start hook, populated by capture helpers or wrappers while
/// the body runs, and finalized by exactly one of the completion hooks. The
/// serialized field order is part of the JSON report format.
///
/// 单个已执行测试的结构化结果。
/// 由开始钩子创建，在测试体运行期间由捕获辅助方法或包装器填充，
/// 并由恰好一个完成钩子最终确定。序列化字段顺序是 JSON 报告格式的一部分。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Test method name / 测试方法名
    pub name: String,
    /// Human-readable label / 人类可读的标签
    pub description: String,
    /// Owning collection name / 所属测试集合名称
    pub class_name: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
    /// Rendered data driving the test / 驱动测试的数据的渲染形式
    pub input: Option<String>,
    /// Educational note for the student / 给学生的教学说明
    pub message: Option<String>,
    pub status: TestStatus,
}

fn is_unset(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

fn trimmed_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    let text = text.trim();
    if text.is_empty() { fallback } else { text }
}

impl ResultRecord {
    /// Creates a fresh `RUNNING` record with every optional field unset.
    pub fn start(name: &str, description: String, class_name: &str) -> Self {
        Self {
            name: name.to_string(),
            description,
            class_name: class_name.to_string(),
            expected: None,
            actual: None,
            input: None,
            message: None,
            status: TestStatus::Running,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    /// Finalizes the record as `PASSED`, keeping any author-supplied message.
    /// 将记录最终确定为 `PASSED`，保留作者提供的任何消息。
    pub fn finish_passed(&mut self) {
        self.status = TestStatus::Passed;
        if is_unset(&self.message) {
            self.message = Some(DEFAULT_SUCCESS_MESSAGE.to_string());
        }
    }

    /// Finalizes the record as `ERROR`, an unexpected error escaped the body.
    /// 将记录最终确定为 `ERROR`，即测试体中逃逸出了意外错误。
    pub fn finish_errored(&mut self, error: &str) {
        self.status = TestStatus::Error;
        if is_unset(&self.message) {
            let error = trimmed_or(error, "Unknown error");
            self.message = Some(format!(
                "Your code encountered an unexpected error: {error}. Check your syntax and logic."
            ));
        }
    }

    /// Finalizes the record as `FAILED`, an assertion did not hold.
    /// 将记录最终确定为 `FAILED`，即某个断言不成立。
    pub fn finish_failed(&mut self, failure: &str) {
        self.status = TestStatus::Failed;
        if is_unset(&self.message) {
            let failure = trimmed_or(failure, "Test failed");
            self.message = Some(format!(
                "This test didn't pass. {failure}. Review the expected vs actual values to understand what went wrong."
            ));
        }
    }
}
