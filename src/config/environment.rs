// ABOUTME: Environment configuration for the dashboard server and CLI
// ABOUTME: Reads dataset and model paths, bind address, log level, and deployment mode from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming the activity dataset CSV
pub const DATASET_PATH_VAR: &str = "FITDASH_DATASET_PATH";
/// Environment variable naming the model artifact JSON
pub const MODEL_PATH_VAR: &str = "FITDASH_MODEL_PATH";
/// Environment variable for the bind host
pub const HTTP_HOST_VAR: &str = "HTTP_HOST";
/// Environment variable for the bind port
pub const HTTP_PORT_VAR: &str = "HTTP_PORT";
/// Environment variable for the deployment mode
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
/// Environment variable for the application log level
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
/// Environment variable listing allowed CORS origins, comma separated or `*`
pub const CORS_ALLOWED_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.write_str(name)
    }
}

/// Everything the server and CLI need to start
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Activity dataset CSV
    pub dataset_path: PathBuf,
    /// Model artifact JSON
    pub model_path: PathBuf,
    /// Bind host
    pub http_host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment mode
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Allowed CORS origins, comma separated or `*`
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(defaults::DATASET_PATH),
            model_path: PathBuf::from(defaults::MODEL_PATH),
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `HTTP_PORT` is not a port number or the
    /// resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var(HTTP_PORT_VAR) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(format!("Invalid {HTTP_PORT_VAR} value '{raw}': {e}"))
                    .with_source(e)
            })?,
            Err(_) => defaults::HTTP_PORT,
        };

        let config = Self {
            dataset_path: PathBuf::from(env_var_or(DATASET_PATH_VAR, defaults::DATASET_PATH)),
            model_path: PathBuf::from(env_var_or(MODEL_PATH_VAR, defaults::MODEL_PATH)),
            http_host: env_var_or(HTTP_HOST_VAR, defaults::HTTP_HOST),
            http_port,
            environment: Environment::from_str_or_default(&env_var_or(
                ENVIRONMENT_VAR,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(LOG_LEVEL_VAR, "info")),
            cors_allowed_origins: env_var_or(CORS_ALLOWED_ORIGINS_VAR, "*"),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for port 0, an empty host, or an empty path
    pub fn validate(&self) -> AppResult<()> {
        if self.http_port == 0 {
            return Err(AppError::config(format!("{HTTP_PORT_VAR} cannot be 0")));
        }
        if self.http_host.trim().is_empty() {
            return Err(AppError::config(format!("{HTTP_HOST_VAR} cannot be empty")));
        }
        if self.dataset_path.as_os_str().is_empty() {
            return Err(AppError::config(format!("{DATASET_PATH_VAR} cannot be empty")));
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(AppError::config(format!("{MODEL_PATH_VAR} cannot be empty")));
        }
        Ok(())
    }

    /// Address string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitdash Configuration:\n\
             - Dataset: {}\n\
             - Model: {}\n\
             - Listen: {}\n\
             - Environment: {}\n\
             - Log Level: {}",
            self.dataset_path.display(),
            self.model_path.display(),
            self.bind_address(),
            self.environment,
            self.log_level,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
