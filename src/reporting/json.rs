//! # JSON Report Module / JSON 报告模块
//!
//! The structured twin of the text report: a document with the framework
//! identifier, the test count and every record in run order.
//!
//! 文本报告的结构化对应物：包含框架标识、测试数量以及按运行顺序排列的
//! 所有记录的文档。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::models::ResultRecord;
use crate::infra::fs::write_report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub framework: String,
    pub total_tests: usize,
    pub tests: Vec<ResultRecord>,
}

impl JsonReport {
    pub fn new(framework: impl Into<String>, tests: Vec<ResultRecord>) -> Self {
        Self {
            framework: framework.into(),
            total_tests: tests.len(),
            tests,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.tests.iter().filter(|t| t.passed()).count()
    }
}

/// Pretty-prints any report document with a two-space indent.
/// 以两个空格缩进美化输出任意报告文档。
pub fn to_pretty_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string_pretty(document).context("Failed to serialize JSON report")
}

/// Writes a report document to `path`, creating parent directories.
pub fn save_json<T: Serialize>(document: &T, path: &Path) -> Result<()> {
    let json = to_pretty_json(document)?;
    write_report(path, &json)
}
