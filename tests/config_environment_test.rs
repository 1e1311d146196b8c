// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Covers defaults, overrides, invalid ports, and validation failures

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitdash::config::environment::{
    CORS_ALLOWED_ORIGINS_VAR, DATASET_PATH_VAR, ENVIRONMENT_VAR, HTTP_HOST_VAR, HTTP_PORT_VAR,
    LOG_LEVEL_VAR, MODEL_PATH_VAR,
};
use fitdash::config::{Environment, LogLevel, ServerConfig};
use fitdash::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const ALL_VARS: [&str; 7] = [
    DATASET_PATH_VAR,
    MODEL_PATH_VAR,
    HTTP_HOST_VAR,
    HTTP_PORT_VAR,
    ENVIRONMENT_VAR,
    LOG_LEVEL_VAR,
    CORS_ALLOWED_ORIGINS_VAR,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.dataset_path, PathBuf::from("fitbit_processed.csv"));
    assert_eq!(config.model_path, PathBuf::from("calorie_predictor_v2.json"));
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var(DATASET_PATH_VAR, "/data/daily.csv");
    env::set_var(MODEL_PATH_VAR, "/models/per_user.json");
    env::set_var(HTTP_HOST_VAR, "0.0.0.0");
    env::set_var(HTTP_PORT_VAR, "9000");
    env::set_var(ENVIRONMENT_VAR, "production");
    env::set_var(LOG_LEVEL_VAR, "debug");
    env::set_var(CORS_ALLOWED_ORIGINS_VAR, "https://dash.example.com");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.dataset_path, PathBuf::from("/data/daily.csv"));
    assert_eq!(config.model_path, PathBuf::from("/models/per_user.json"));
    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.cors_allowed_origins, "https://dash.example.com");
}

#[test]
#[serial]
fn test_invalid_port() {
    clear_env();
    env::set_var(HTTP_PORT_VAR, "eighty");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("eighty"));
}

#[test]
#[serial]
fn test_zero_port_fails_validation() {
    clear_env();
    env::set_var(HTTP_PORT_VAR, "0");

    let error = ServerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_validate_rejects_empty_values() {
    let empty_host = ServerConfig {
        http_host: "  ".to_owned(),
        ..ServerConfig::default()
    };
    assert!(empty_host.validate().is_err());

    let empty_model = ServerConfig {
        model_path: PathBuf::new(),
        ..ServerConfig::default()
    };
    assert!(empty_model.validate().is_err());

    assert!(ServerConfig::default().validate().is_ok());
}

#[test]
fn test_summary() {
    let summary = ServerConfig::default().summary();

    assert!(summary.starts_with("Fitdash Configuration:"));
    assert!(summary.contains("calorie_predictor_v2.json"));
    assert!(summary.contains("Environment: development"));
    assert!(summary.contains("Log Level: info"));
}
