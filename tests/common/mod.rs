// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use capture_runner::core::{
    CaptureResult, CollectionRegistry, ResultRecord, RunOptions, RunOutcome, Suite, TestCollection,
    execution::run_suite, registry::CollectionFactory, run_test_class,
};
use tempfile::TempDir;

/// Builds a registry holding a single collection.
pub fn registry_with(name: &str, factory: CollectionFactory) -> CollectionRegistry {
    let mut registry = CollectionRegistry::new();
    registry
        .register(name, factory)
        .expect("Failed to register collection");
    registry
}

/// Runs `name` from `registry` with plain (uncoloured, English) output and
/// returns the outcome together with everything printed.
///
/// The panic hook is left alone: tests run in parallel and swapping a
/// process-wide hook from several threads would race.
pub fn run_captured(registry: &CollectionRegistry, name: &str) -> (RunOutcome, String) {
    colored::control::set_override(false);
    let options = RunOptions {
        quiet_panics: false,
        ..RunOptions::default()
    };
    let mut out = Vec::new();
    let outcome = run_test_class(registry, name, &options, &mut out);
    (outcome, String::from_utf8(out).expect("Output is not valid UTF-8"))
}

/// Runs a collection directly through the engine and returns its records.
pub fn run_records(collection: TestCollection) -> Vec<ResultRecord> {
    let suite = Suite::load(collection);
    let mut result = CaptureResult::new();
    run_suite(&suite, &mut result);
    result.into_collector().into_records()
}

/// Runs a collection holding a single test and returns its record.
pub fn run_single(collection: TestCollection) -> ResultRecord {
    let mut records = run_records(collection);
    assert_eq!(records.len(), 1, "expected exactly one record");
    records.remove(0)
}

/// Helper function to write a TOML configuration file
pub fn write_config(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("runner.toml");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Helper function to create an invalid TOML configuration
pub fn create_invalid_toml(temp_dir: &TempDir) -> PathBuf {
    write_config(
        temp_dir,
        r#"
language = "en"
# Invalid TOML - missing closing quote
default_collection = "MainTests
"#,
    )
}

/// A collection factory that fails to build.
pub fn broken_collection() -> Result<TestCollection> {
    anyhow::bail!("cannot import test module")
}
