//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Capture Runner,
//! including panic isolation, report file output and i18n support.
//!
//! 此模块为 Capture Runner 提供基础设施服务，
//! 包括 panic 隔离、报告文件输出和国际化支持。

pub mod fs;
pub mod panic;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
