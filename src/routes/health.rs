// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness reports the process is up; readiness reports what dataset and model were loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! The context is loaded before the listener binds, so a server that answers
//! at all is ready. `/ready` additionally describes what it loaded.

use crate::context::DashboardContext;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(context: Arc<DashboardContext>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(context)
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_ready(State(context): State<Arc<DashboardContext>>) -> Json<Value> {
        let dataset = context.dataset();
        Json(json!({
            "status": "ready",
            "timestamp": Utc::now().to_rfc3339(),
            "dataset": {
                "rows": dataset.len(),
                "users": dataset.user_count(),
                "normalization": dataset.normalization()
            },
            "model": {
                "variant": context.variant()
            }
        }))
    }
}
