//! # Result Collector Module / 结果收集器模块
//!
//! An ordered, run-scoped store of finalized Result Records. A new collector
//! is created for every run, so records never leak from one run into the next.
//!
//! 已最终确定的结果记录的有序存储，作用域为单次运行。
//! 每次运行都会创建新的收集器，因此记录不会从一次运行泄漏到下一次。

use crate::core::models::{ResultRecord, TestStatus};

#[derive(Debug, Default, Clone)]
pub struct ResultCollector {
    records: Vec<ResultRecord>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all records.
    pub fn reset(&mut self) {
        self.records.clear();
    }

    /// Appends a finalized record. Records still `RUNNING` are a logic error
    /// in the executor.
    ///
    /// 追加一条已最终确定的记录。仍处于 `RUNNING` 的记录属于执行器的逻辑错误。
    pub fn append(&mut self, record: ResultRecord) {
        debug_assert!(record.status.is_terminal(), "appended a running record");
        self.records.push(record);
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == TestStatus::Passed)
            .count()
    }

    /// Number of records that did not pass (`FAILED` or `ERROR`).
    pub fn failed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, TestStatus::Failed | TestStatus::Error))
            .count()
    }

    pub fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }
}
