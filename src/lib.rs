// ABOUTME: Main library entry point for the Fitdash activity, sleep, and calorie dashboard
// ABOUTME: Wires dataset loading, the model artifact, the dashboard pipeline, and the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitdash
//!
//! Per-user activity summaries and a what-if calorie predictor over a
//! processed Fitbit daily-activity export.
//!
//! ## Architecture
//!
//! - **Dataset**: CSV load with one-time schema normalization
//! - **Artifact**: JSON model bundle that selects the predictor variant
//! - **Dashboard**: the per-interaction pipeline over an immutable context
//! - **Routes**: axum JSON API over the pipeline
//! - **Config** and **Logging**: environment-driven startup settings
//!
//! Pure computation (aggregates, features, prediction, advice) lives in the
//! `fitdash-intelligence` crate; shared types live in `fitdash-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitdash::config::ServerConfig;
//! use fitdash::context::DashboardContext;
//! use fitdash::dashboard::DashboardService;
//! use fitdash::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let context = DashboardContext::load(&config)?;
//!     let service = DashboardService::new(&context);
//!     if let Some(user) = service.users().default_user {
//!         let view = service.evaluate(&user, None)?;
//!         println!("{}", view.prediction.advice.message);
//!     }
//!     Ok(())
//! }
//! ```

pub use fitdash_core::{constants, errors, models};

/// Pure per-user computations and calorie predictors
pub use fitdash_intelligence as intelligence;

/// Model artifact loading
pub mod artifact;
/// Environment configuration
pub mod config;
/// Immutable startup context
pub mod context;
/// Per-interaction dashboard pipeline
pub mod dashboard;
/// Activity dataset loading and indexing
pub mod dataset;
/// Structured logging setup
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// HTTP routes
pub mod routes;
