// ABOUTME: Route module organization for the Fitdash HTTP API
// ABOUTME: Merges health and dashboard routes and applies tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Fitdash server
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to [`crate::dashboard::DashboardService`].

/// Dashboard routes
pub mod dashboard;
/// Health check routes
pub mod health;

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;

use crate::config::ServerConfig;
use crate::context::DashboardContext;
use crate::middleware::{request_trace_layer, setup_cors};
use axum::Router;
use std::sync::Arc;

/// Build the complete application router
pub fn build_router(context: Arc<DashboardContext>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&context)))
        .merge(DashboardRoutes::routes(context))
        .layer(setup_cors(config))
        .layer(request_trace_layer())
}
