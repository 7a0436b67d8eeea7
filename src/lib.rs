//! # Capture Runner Library / Capture Runner 库
//!
//! This library provides a result-capturing layer over a small sequential
//! test engine. It runs a named collection of tests, captures per-test
//! expected/actual values, an optional input sample and an educational
//! message, and emits the results as a line-oriented text report and a JSON
//! document for grading tools.
//!
//! 此库在一个小型顺序测试引擎之上提供结果捕获层。
//! 它运行具名的测试集合，捕获每个测试的期望值/实际值、可选的输入样本和
//! 教学消息，并以面向行的文本报告和 JSON 文档形式输出结果，供评分工具使用。
//!
//! ## Modules / 模块
//!
//! - `core` - Result records, capture helpers, wrappers, engine and orchestrator
//! - `infra` - Infrastructure services like panic isolation and file output
//! - `reporting` - Text report, JSON report and console banners
//! - `cli` - Command-line interface
//! - `demo` - Demonstration collections shipped with the binary
//!
//! - `core` - 结果记录、捕获辅助方法、包装器、引擎和编排器
//! - `infra` - 基础设施服务，如 panic 隔离和文件输出
//! - `reporting` - 文本报告、JSON 报告和控制台横幅
//! - `cli` - 命令行接口
//! - `demo` - 随二进制文件提供的演示测试集合

pub mod cli;
pub mod core;
pub mod demo;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::models;
pub use core::config;
pub use core::execution;

/// Picks the locale for console messages.
///
/// An explicitly preferred locale wins; otherwise the system locale is used.
/// The full locale (e.g., "zh-CN") is tried first, then just the language
/// code (e.g., "en" from "en-US"), and finally the default language ("en").
pub fn resolve_locale(preferred: Option<&str>) -> String {
    let locale = preferred
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
