// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides the TraceLayer span factory and CORS layer applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing spans
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::{create_request_span, request_trace_layer, REQUEST_ID_HEADER};
