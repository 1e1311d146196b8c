// ABOUTME: Dashboard route handlers for user selection, summaries, sliders, and predictions
// ABOUTME: Thin axum handlers that delegate to DashboardService and return JSON or AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard routes
//!
//! All handlers re-run the pipeline for the requested user. An identifier
//! with no rows yields `404` with code `UNKNOWN_USER`.

use crate::context::DashboardContext;
use crate::dashboard::DashboardService;
use crate::errors::AppError;
use crate::models::UserId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fitdash_intelligence::SliderInput;
use std::sync::Arc;

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(context: Arc<DashboardContext>) -> Router {
        Router::new()
            .route("/api/users", get(Self::handle_users))
            .route("/api/users/:id/summary", get(Self::handle_summary))
            .route("/api/users/:id/sliders", get(Self::handle_sliders))
            .route("/api/users/:id/predict", post(Self::handle_predict))
            .route("/api/users/:id/dashboard", get(Self::handle_dashboard))
            .with_state(context)
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_users(State(context): State<Arc<DashboardContext>>) -> Response {
        let users = DashboardService::new(&context).users();
        (StatusCode::OK, Json(users)).into_response()
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_summary(
        State(context): State<Arc<DashboardContext>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let summary = DashboardService::new(&context).summary(&UserId::new(id))?;
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_sliders(
        State(context): State<Arc<DashboardContext>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let settings = DashboardService::new(&context).slider_settings(&UserId::new(id))?;
        Ok((StatusCode::OK, Json(settings)).into_response())
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_predict(
        State(context): State<Arc<DashboardContext>>,
        Path(id): Path<String>,
        body: Result<Json<SliderInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(sliders) = body.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid slider values: {}", rejection.body_text()))
        })?;
        let prediction = DashboardService::new(&context).predict(&UserId::new(id), sliders)?;
        Ok((StatusCode::OK, Json(prediction)).into_response())
    }

    #[allow(clippy::unused_async)] // Axum handler signature
    async fn handle_dashboard(
        State(context): State<Arc<DashboardContext>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let view = DashboardService::new(&context).evaluate(&UserId::new(id), None)?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }
}
