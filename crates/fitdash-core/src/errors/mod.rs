// ABOUTME: Unified error handling with standard error codes for the insights pipeline
// ABOUTME: Defines AppError, ErrorCode, the JSON error body, and the axum response conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] carried by an [`AppError`] decides how the failure surfaces:
//!
//! - startup-fatal codes (`DataLoadError`, `ModelLoadError`, `ConfigError`)
//!   abort the process before any request is served
//! - `UnknownUser` and `MissingField` are recoverable and become a visible
//!   placeholder or notice for the selected user
//! - `InvalidInput` and `InternalError` map to the usual HTTP semantics

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request payload or parameters are malformed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// An optional field is absent for the selected user
    #[serde(rename = "MISSING_FIELD")]
    MissingField,
    /// The selected user identifier matches no dataset rows
    #[serde(rename = "UNKNOWN_USER")]
    UnknownUser,
    /// Dataset file is missing or malformed
    #[serde(rename = "DATA_LOAD_ERROR")]
    DataLoadError,
    /// Model artifact is missing, malformed, or internally inconsistent
    #[serde(rename = "MODEL_LOAD_ERROR")]
    ModelLoadError,
    /// Environment configuration is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Unexpected failure inside the pipeline
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::UnknownUser => 404,
            Self::MissingField => 422,
            Self::DataLoadError
            | Self::ModelLoadError
            | Self::ConfigError
            | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingField => "A field is missing for the selected user",
            Self::UnknownUser => "The selected user has no recorded activity",
            Self::DataLoadError => "The activity dataset could not be loaded",
            Self::ModelLoadError => "The calorie prediction model could not be loaded",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this error must abort startup rather than be shown to a user
    #[must_use]
    pub const fn is_startup_fatal(self) -> bool {
        matches!(
            self,
            Self::DataLoadError | Self::ModelLoadError | Self::ConfigError
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for tracing, when raised inside an HTTP request
    pub request_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Optional field absent for a user
    pub fn missing_field(field: &str, user: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("No {field} data available for user {user}"),
        )
    }

    /// Selected user has no rows
    pub fn unknown_user(user: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UnknownUser,
            format!("User {user} not found in dataset"),
        )
    }

    /// Dataset load failure
    pub fn data_load(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataLoadError, message)
    }

    /// Model artifact load failure
    pub fn model_load(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelLoadError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload inside [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
            },
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;
    use tracing::{debug, error};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            if status.is_server_error() {
                error!(code = ?self.code, "{}", self.message);
            } else {
                debug!(code = ?self.code, "{}", self.message);
            }
            (status, Json(ErrorResponse::from(self))).into_response()
        }
    }
}
