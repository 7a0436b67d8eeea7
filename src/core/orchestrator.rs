//! # Run Orchestrator Module / 运行编排模块
//!
//! Runs a test collection by name: resolves it in the registry, loads the
//! suite, executes it against a fresh capturing result and renders the
//! collected records as the text report and the JSON document.
//!
//! 按名称运行测试集合：在注册表中解析它，加载测试套件，
//! 针对新的捕获式结果执行它，并将收集到的记录渲染为文本报告和 JSON 文档。

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::{DEFAULT_FRAMEWORK, RunnerConfig};
use crate::core::execution::{CaptureResult, run_suite};
use crate::core::registry::CollectionRegistry;
use crate::core::suite::{Suite, TestCollection};
use crate::infra::panic::{QuietPanics, guard};
use crate::reporting::{console, json::JsonReport, text};

/// Run-level failures. Either one aborts the run without a test report.
/// 运行级失败。任何一种都会中止运行且不生成测试报告。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The named collection is not registered.
    #[error("Test class '{0}' not found")]
    CollectionNotFound(String),
    /// Anything else that went wrong while loading or executing.
    #[error("{0}")]
    Run(String),
}

impl From<anyhow::Error> for RunError {
    fn from(err: anyhow::Error) -> Self {
        RunError::Run(format!("{err:#}"))
    }
}

impl From<std::io::Error> for RunError {
    fn from(err: std::io::Error) -> Self {
        RunError::Run(err.to_string())
    }
}

/// Error document returned instead of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFailure {
    pub error: String,
}

/// The structured result of a run: the JSON report, or an `error` object.
/// 运行的结构化结果：JSON 报告，或 `error` 对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunOutcome {
    Completed(JsonReport),
    Aborted(RunFailure),
}

impl RunOutcome {
    pub fn report(&self) -> Option<&JsonReport> {
        match self {
            RunOutcome::Completed(report) => Some(report),
            RunOutcome::Aborted(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RunOutcome::Completed(_) => None,
            RunOutcome::Aborted(failure) => Some(&failure.error),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, RunOutcome::Aborted(_))
    }
}

/// Settings that shape a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub framework: String,
    pub locale: String,
    pub quiet_panics: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            framework: DEFAULT_FRAMEWORK.to_string(),
            locale: "en".to_string(),
            quiet_panics: true,
        }
    }
}

impl From<&RunnerConfig> for RunOptions {
    fn from(config: &RunnerConfig) -> Self {
        Self {
            framework: config.framework.clone(),
            locale: config.language.clone(),
            quiet_panics: config.quiet_panics,
        }
    }
}

/// Runs the collection registered under `name`, printing the banners, the
/// detailed report and the JSON document to `out`.
///
/// Never fails: a missing collection or any other run-level error is
/// reported on `out` and returned as [`RunOutcome::Aborted`].
///
/// 运行以 `name` 注册的测试集合，并将横幅、详细报告和 JSON 文档打印到 `out`。
/// 此函数从不失败：缺失的测试集合或任何其他运行级错误都会在 `out` 上报告，
/// 并作为 [`RunOutcome::Aborted`] 返回。
pub fn run_test_class(
    registry: &CollectionRegistry,
    name: &str,
    options: &RunOptions,
    out: &mut dyn Write,
) -> RunOutcome {
    let locale = options.locale.as_str();
    tracing::info!(collection = name, "running test collection");

    match try_run(registry, name, options, out) {
        Ok(report) => RunOutcome::Completed(report),
        Err(err) => {
            tracing::warn!(collection = name, error = %err, "test run aborted");
            // The outcome is returned even when the notice cannot be printed.
            let _ = match &err {
                RunError::CollectionNotFound(_) => console::print_collection_not_found(out, name, locale),
                RunError::Run(error) => console::print_run_error(out, error, locale),
            };
            RunOutcome::Aborted(RunFailure {
                error: err.to_string(),
            })
        }
    }
}

/// Resolves `name` and builds its collection. Panics raised while building
/// are treated as load errors.
pub fn load_collection(registry: &CollectionRegistry, name: &str) -> Result<TestCollection, RunError> {
    let factory = registry
        .resolve(name)
        .ok_or_else(|| RunError::CollectionNotFound(name.to_string()))?;
    let collection = guard(factory).map_err(RunError::Run)??;
    Ok(collection)
}

fn try_run(
    registry: &CollectionRegistry,
    name: &str,
    options: &RunOptions,
    out: &mut dyn Write,
) -> Result<JsonReport, RunError> {
    let locale = options.locale.as_str();
    let suite = Suite::load(load_collection(registry, name)?);

    console::print_pre_run_banner(out, suite.count_test_cases(), locale)?;

    let mut result = CaptureResult::new();
    {
        let _quiet = options.quiet_panics.then(QuietPanics::install);
        run_suite(&suite, &mut result);
    }
    let collector = result.into_collector();

    console::print_results_summary(out, &collector, locale)?;
    text::write_detailed(out, collector.all())?;

    let report = JsonReport::new(options.framework.clone(), collector.into_records());
    console::print_json_banner(out, locale)?;
    writeln!(out, "{}", crate::reporting::to_pretty_json(&report)?)?;

    tracing::info!(
        collection = name,
        total = report.total_tests,
        passed = report.passed_count(),
        "test run finished"
    );
    Ok(report)
}
