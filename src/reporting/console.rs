//! # Console Reporting Module / 控制台报告模块
//!
//! Human-oriented banners printed around the machine-parsed reports: the
//! pre-run test count, the passed/failed summary and the run-level error
//! notices. These are informational only, coloured and localized.
//!
//! 打印在供机器解析的报告周围、面向人类的横幅：运行前的测试数量、
//! 通过/失败摘要以及运行级错误提示。这些仅供参考，带颜色且已本地化。

use colored::*;
use std::io::{self, Write};

use crate::core::collector::ResultCollector;
use crate::infra::t;

/// Prints the banner shown before the suite runs.
///
/// # Output Format / 输出格式
/// ```text
/// 📊 TEST SUMMARY:
///    Total: 5
/// ```
pub fn print_pre_run_banner(out: &mut dyn Write, total: usize, locale: &str) -> io::Result<()> {
    writeln!(out, "{}", t!("summary.banner", locale = locale).bold())?;
    writeln!(out, "   {}", t!("summary.total", locale = locale, count = total))?;
    writeln!(out)
}

/// Prints the passed/failed/total summary of a finished run.
/// `ERROR` records count as failed.
///
/// 打印已完成运行的通过/失败/总数摘要。`ERROR` 记录计为失败。
///
/// # Output Format / 输出格式
/// ```text
/// 📈 RESULTS SUMMARY:
///    ✅ Passed: 4
///    ❌ Failed: 1
///    📊 Total:  5
/// ```
pub fn print_results_summary(
    out: &mut dyn Write,
    collector: &ResultCollector,
    locale: &str,
) -> io::Result<()> {
    writeln!(out, "{}", t!("results.banner", locale = locale).bold())?;
    writeln!(
        out,
        "   {}",
        t!("results.passed", locale = locale, count = collector.passed_count()).green()
    )?;

    let failed = collector.failed_count();
    let failed_line = t!("results.failed", locale = locale, count = failed);
    if failed > 0 {
        writeln!(out, "   {}", failed_line.red())?;
    } else {
        writeln!(out, "   {}", failed_line)?;
    }

    writeln!(
        out,
        "   {}",
        t!("results.total", locale = locale, count = collector.len())
    )?;
    writeln!(out)
}

/// Prints the header that precedes the JSON document.
pub fn print_json_banner(out: &mut dyn Write, locale: &str) -> io::Result<()> {
    writeln!(out, "{}", t!("json.banner", locale = locale).cyan())?;
    writeln!(out, "{}", "=".repeat(30))
}

/// Prints the notice for a collection name that did not resolve.
/// 打印测试集合名称无法解析时的提示。
pub fn print_collection_not_found(out: &mut dyn Write, name: &str, locale: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        t!("errors.collection_not_found", locale = locale, name = name).red()
    )?;
    writeln!(out, "{}", t!("errors.collection_hint", locale = locale))
}

/// Prints the notice for any other error that aborted the run.
pub fn print_run_error(out: &mut dyn Write, error: &str, locale: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        t!("errors.run_failed", locale = locale, error = error).red()
    )
}
