//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{input::InputConfig, AppConfig, ConfigLoader, LogConfig, Validate};
use crate::error::config::ConfigError;
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.input.max_word_chars = Some(0);
    assert!(config.validate().is_err());

    config.input.max_word_chars = None;
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [log]
    level = "debug"
    json = true

    [input]
    trim = false
    max_word_chars = 64
    "#;
    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "SUFFIX_INDEX_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(
        config.log,
        LogConfig {
            level: "debug".to_string(),
            json: true,
            ..LogConfig::default()
        }
    );
    assert!(!config.input.trim);
    assert_eq!(config.input.max_word_chars, Some(64));
    assert_eq!(config.input.comment_prefix, InputConfig::default().comment_prefix);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "log": { "level": "warn" } }"#).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "SUFFIX_INDEX_TEST_JSON")
        .load()
        .unwrap();

    assert_eq!(config.log.level, "warn");
    assert_eq!(config.input, InputConfig::default());
}

/// Test that environment variables override file values.
#[test]
fn test_env_overrides_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("env_override.toml");
    fs::write(&config_path, "[log]\nlevel = \"debug\"\n").unwrap();

    std::env::set_var("SUFFIX_INDEX_TEST_ENV__LOG__LEVEL", "error");
    let config = ConfigLoader::new(Some(&config_path), "SUFFIX_INDEX_TEST_ENV").load();
    std::env::remove_var("SUFFIX_INDEX_TEST_ENV__LOG__LEVEL");

    assert_eq!(config.unwrap().log.level, "error");
}

/// Test error cases for the loader.
#[test]
fn test_load_config_errors() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.toml");
    let result = ConfigLoader::new(Some(&missing), "SUFFIX_INDEX_TEST_ERR").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == missing));

    let unsupported = dir.path().join("config.ini");
    fs::write(&unsupported, "level=info").unwrap();
    let result = ConfigLoader::new(Some(&unsupported), "SUFFIX_INDEX_TEST_ERR").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));

    let invalid = dir.path().join("invalid.toml");
    fs::write(&invalid, "[log]\nlevel = \"loud\"\n").unwrap();
    let result = ConfigLoader::new(Some(&invalid), "SUFFIX_INDEX_TEST_ERR").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that the default configuration survives a TOML round trip through the loader.
#[test]
fn test_generated_config_loads() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("generated.toml");
    let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
    fs::write(&config_path, toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "SUFFIX_INDEX_TEST_GEN")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}
