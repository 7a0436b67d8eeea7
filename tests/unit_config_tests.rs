//! # Config Module Unit Tests / Config 模块单元测试
//!
//! This module contains unit tests for the `config.rs` module, testing the
//! `RunnerConfig` structure and its TOML deserialization.
//!
//! 此模块包含 `config.rs` 模块的单元测试，
//! 测试 `RunnerConfig` 结构体及其 TOML 反序列化。

mod common;

use std::path::PathBuf;

use capture_runner::core::RunOptions;
use capture_runner::core::config::{
    DEFAULT_COLLECTION, DEFAULT_FRAMEWORK, RunnerConfig, load_config, parse_config,
};
use common::{create_invalid_toml, write_config};
use tempfile::tempdir;

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.language, "en");
        assert_eq!(config.default_collection, DEFAULT_COLLECTION);
        assert_eq!(config.framework, DEFAULT_FRAMEWORK);
        assert!(config.json_output.is_none());
        assert!(config.quiet_panics);
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            language = "zh-CN"
            default_collection = "ShowcaseTests"
            framework = "Course Grader"
            json_output = "out/results.json"
            quiet_panics = false
        "#;

        let config = parse_config(toml_str).unwrap();

        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.default_collection, "ShowcaseTests");
        assert_eq!(config.framework, "Course Grader");
        assert_eq!(config.json_output, Some(PathBuf::from("out/results.json")));
        assert!(!config.quiet_panics);
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = parse_config("quiet_panics = \"yes\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = RunnerConfig {
            default_collection: "ShowcaseTests".to_string(),
            ..RunnerConfig::default()
        };

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("default_collection = \"ShowcaseTests\""));
        assert_eq!(parse_config(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_run_options_follow_config() {
        let config = RunnerConfig {
            framework: "Course Grader".to_string(),
            quiet_panics: false,
            ..RunnerConfig::default()
        };

        let options = RunOptions::from(&config);
        assert_eq!(options.framework, "Course Grader");
        assert_eq!(options.locale, "en");
        assert!(!options.quiet_panics);
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = write_config(&temp_dir, "default_collection = \"ShowcaseTests\"\n");

        let config = load_config(&path).unwrap();
        assert_eq!(config.default_collection, "ShowcaseTests");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = tempdir().unwrap();
        let path = create_invalid_toml(&temp_dir);

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempdir().unwrap();
        let err = load_config(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
