//! # Run Command Module / 运行命令模块
//!
//! This module implements the runner's single command: resolve settings from
//! the command line and the optional config file, run the named collection
//! and optionally persist the JSON document.
//!
//! 此模块实现运行器的唯一命令：从命令行和可选配置文件解析设置，
//! 运行具名测试集合，并可选地持久化 JSON 文档。

use anyhow::Result;
use colored::*;
use std::io::Write;

use crate::{
    cli::RunArgs,
    core::{
        CollectionRegistry, RunOutcome,
        config::{self, RunnerConfig},
        orchestrator::{RunOptions, run_test_class},
    },
    infra::t,
    reporting::json::{save_json, to_pretty_json},
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `registry` - Collections available to run by name
/// * `args` - Parsed command-line arguments
/// * `out` - Destination of the banners and reports
///
/// # Returns
/// The structured outcome of the run, or `None` when `--list` only printed
/// the registered collections. Run-level errors are part of the outcome;
/// `Err` is reserved for problems with the invocation itself, such as an
/// unreadable config file.
pub fn execute(
    registry: &CollectionRegistry,
    args: &RunArgs,
    out: &mut dyn Write,
) -> Result<Option<RunOutcome>> {
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => RunnerConfig::default(),
    };

    // --lang wins over the config file; without either, use the system locale.
    let preferred = args
        .lang
        .as_deref()
        .or(args.config.as_ref().map(|_| config.language.as_str()));
    let locale = crate::resolve_locale(preferred);
    rust_i18n::set_locale(&locale);

    if args.list {
        writeln!(out, "{}", t!("cli.registered", locale = &locale).bold())?;
        for name in registry.names() {
            writeln!(out, "  - {name}")?;
        }
        return Ok(None);
    }

    let collection = args
        .collection
        .clone()
        .unwrap_or_else(|| config.default_collection.clone());

    let options = RunOptions {
        locale: locale.clone(),
        ..RunOptions::from(&config)
    };
    let outcome = run_test_class(registry, &collection, &options, out);

    if let RunOutcome::Aborted(failure) = &outcome {
        writeln!(out, "{}", to_pretty_json(failure)?)?;
    }

    if let Some(path) = args.json_out.as_ref().or(config.json_output.as_ref()) {
        let saved = match &outcome {
            RunOutcome::Completed(report) => save_json(report, path),
            RunOutcome::Aborted(failure) => save_json(failure, path),
        };
        match saved {
            Ok(()) => writeln!(
                out,
                "{}",
                t!("json.written", locale = &locale, path = path.display()).green()
            )?,
            Err(e) => eprintln!("{} {:#}", t!("json.write_failed", locale = &locale).red(), e),
        }
    }

    Ok(Some(outcome))
}
