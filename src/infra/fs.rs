//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for writing report files to disk.
//!
//! 此模块提供将报告文件写入磁盘的实用功能。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes `contents` to `path`, creating any missing parent directories.
///
/// # Arguments
/// * `path` - Destination file path
/// * `contents` - Text to write
///
/// # Returns
/// A `Result` indicating success or failure
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

/// Creates `path` (and its ancestors) if it is not already a directory.
///
/// # Arguments
/// * `path` - Directory to create
pub fn ensure_directory(path: &Path) -> Result<()> {
    if is_directory(path) {
        return Ok(());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
