//! # Configuration Module / 配置模块
//!
//! Optional TOML configuration for the runner. Every field has a default, so
//! an empty file (or no file at all) yields a working configuration.
//!
//! 运行器的可选 TOML 配置。每个字段都有默认值，
//! 因此空文件（或根本没有文件）也能得到可用的配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Collection run when no name is given on the command line.
pub const DEFAULT_COLLECTION: &str = "MainTests";

/// Identifying string written to the `framework` field of the JSON report.
pub const DEFAULT_FRAMEWORK: &str = "Enhanced Testing Framework for JuiceMind IDE (Rust)";

/// Runner settings, loaded from a TOML file.
/// 从 TOML 文件加载的运行器设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// The language for the runner's console messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器控制台消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Collection to run when none is named on the command line.
    /// 命令行未指定时运行的测试集合。
    #[serde(default = "default_collection")]
    pub default_collection: String,

    /// Value of the JSON report's `framework` field.
    /// JSON 报告中 `framework` 字段的值。
    #[serde(default = "default_framework")]
    pub framework: String,

    /// If set, the JSON document is also written to this path.
    /// 如果设置，JSON 文档也会写入此路径。
    #[serde(default)]
    pub json_output: Option<PathBuf>,

    /// Silence panic messages printed by failing test bodies.
    /// 静默失败测试体打印的 panic 消息。
    #[serde(default = "default_true")]
    pub quiet_panics: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            default_collection: default_collection(),
            framework: default_framework(),
            json_output: None,
            quiet_panics: true,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_framework() -> String {
    DEFAULT_FRAMEWORK.to_string()
}

fn default_true() -> bool {
    true
}

/// Reads and parses a runner configuration file.
/// 读取并解析运行器配置文件。
pub fn load_config(path: &Path) -> Result<RunnerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parses a runner configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RunnerConfig> {
    Ok(toml::from_str(content)?)
}
