use std::fs;

use cardswap::board::ExchangeMode;
use cardswap::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.catalog.latency_ms, 2000);
    assert_eq!(config.catalog.size, 12);
    assert_eq!(config.catalog.seed, None);
    assert_eq!(config.board.mode, ExchangeMode::Swap);
    assert!(config.board.clear_targets_on_exchange);
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("cardswap/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[catalog]
latency_ms = 500
size = 20
seed = 42

[board]
mode = "reorder"
clear_targets_on_exchange = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.latency_ms, 500);
    assert_eq!(config.catalog.size, 20);
    assert_eq!(config.catalog.seed, Some(42));
    assert_eq!(config.board.mode, ExchangeMode::Reorder);
    assert!(!config.board.clear_targets_on_exchange);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog]\nsize = 14\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.size, 14);
    assert_eq!(config.catalog.latency_ms, 2000);
    assert_eq!(config.board.mode, ExchangeMode::Swap);
}

#[test]
fn test_validation_rejects_catalog_size() {
    let mut config = Config::default();
    config.catalog.size = 23;
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("Catalog size")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_long_latency() {
    let mut config = Config::default();
    config.catalog.latency_ms = 120_000;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_parse_error_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[catalog\nsize = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}
