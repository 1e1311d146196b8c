// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Wraps tower-http's TraceLayer with an http_request span carrying method, path, and request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info_span, Level, Span};

/// Header clients may set to correlate their logs with ours
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Span factory used by [`request_trace_layer`]
pub type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Create a tracing span for one HTTP request
#[must_use]
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

/// `TraceLayer` logging each request inside its [`create_request_span`] span
#[must_use]
pub fn request_trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(create_request_span as MakeRequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
