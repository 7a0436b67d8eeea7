//! # Reporting Module / 报告模块
//!
//! This module renders the collected Result Records in the two redundant
//! formats consumed by grading tools, a line-oriented text report and a JSON
//! document, plus the human-oriented console banners around them.
//!
//! 此模块以评分工具使用的两种冗余格式渲染收集到的结果记录：
//! 面向行的文本报告和 JSON 文档，以及围绕它们的面向人类的控制台横幅。

pub mod console;
pub mod json;
pub mod text;

// Re-export common reporting functions
pub use console::{print_json_banner, print_pre_run_banner, print_results_summary};
pub use json::{JsonReport, save_json, to_pretty_json};
pub use text::{format_record, render_detailed, write_detailed};
