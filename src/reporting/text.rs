//! # Detailed Text Report Module / 详细文本报告模块
//!
//! The line-oriented report parsed by the downstream grading tool. Its field
//! order and keywords are fixed; it is never coloured or localized.
//!
//! 由下游评分工具解析的面向行的报告。其字段顺序和关键字是固定的，
//! 从不着色，也不本地化。
//!
//! ```text
//! Starting Tests
//! new
//! Name: test_add Input: 10\n5 Expected: 15 Actual: 15 Message: ... Passed: True Description: Add
//! Ending Tests
//! ```

use std::io::{self, Write};

use crate::core::models::ResultRecord;

pub const REPORT_START: &str = "Starting Tests";
pub const RECORD_SEPARATOR: &str = "new";
pub const REPORT_END: &str = "Ending Tests";

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn title_case_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Formats a single record as one report line (without the `new` separator).
/// 将单条记录格式化为一行报告（不含 `new` 分隔符）。
pub fn format_record(record: &ResultRecord) -> String {
    let mut line = format!("Name: {}", record.name);

    if let Some(input) = non_empty(&record.input) {
        line.push_str(&format!(" Input: {input}"));
    }

    line.push_str(&format!(
        " Expected: {} Actual: {}",
        non_empty(&record.expected).unwrap_or("N/A"),
        non_empty(&record.actual).unwrap_or("N/A"),
    ));

    if let Some(message) = non_empty(&record.message) {
        line.push_str(&format!(" Message: {message}"));
    }

    line.push_str(&format!(
        " Passed: {} Description: {}",
        title_case_bool(record.passed()),
        record.description
    ));
    line
}

/// Writes the full detailed report for `records` to `out`.
/// 将 `records` 的完整详细报告写入 `out`。
pub fn write_detailed(out: &mut dyn Write, records: &[ResultRecord]) -> io::Result<()> {
    writeln!(out, "{REPORT_START}")?;
    for record in records {
        writeln!(out, "{RECORD_SEPARATOR}")?;
        writeln!(out, "{}", format_record(record))?;
    }
    writeln!(out, "{REPORT_END}")
}

/// Renders the detailed report into a string.
pub fn render_detailed(records: &[ResultRecord]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_detailed(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}
