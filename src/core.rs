//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Capture Runner: the Result
//! Record and its collector, the capturing test case and declarative
//! wrappers used to author tests, and the engine and orchestrator that run
//! a collection by name.
//!
//! 此模块包含 Capture Runner 的核心功能：结果记录及其收集器、
//! 用于编写测试的捕获式测试用例和声明式包装器，
//! 以及按名称运行测试集合的引擎和编排器。

pub mod case;
pub mod collector;
pub mod config;
pub mod description;
pub mod execution;
pub mod models;
pub mod orchestrator;
pub mod outcome;
pub mod registry;
pub mod suite;
pub mod value;
pub mod wrappers;

// Re-exports
pub use case::{Supplied, TestCase};
pub use collector::ResultCollector;
pub use config::RunnerConfig;
pub use execution::{CaptureResult, LifecycleHooks};
pub use models::{ResultRecord, TestStatus};
pub use orchestrator::{RunError, RunOptions, RunOutcome, run_test_class};
pub use outcome::{CaseResult, Fault, Outcome};
pub use registry::CollectionRegistry;
pub use suite::{Suite, TestCollection};
pub use value::{Value, ValueKind};
pub use wrappers::{Expectation, SafeTest};
