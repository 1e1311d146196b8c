// ABOUTME: CORS middleware configuration for the dashboard HTTP API
// ABOUTME: Allows the configured browser origins to call the read and predict endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::request_tracing::REQUEST_ID_HEADER;
use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS from `CORS_ALLOWED_ORIGINS`
///
/// `*` or an empty value allows any origin; otherwise the value is a
/// comma-separated origin list. Unparsable entries are skipped, and a list
/// with no usable entry falls back to any origin.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://dashboard.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(&config.cors_allowed_origins))
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn allow_origin(origins: &str) -> AllowOrigin {
    let origins = origins.trim();
    if origins.is_empty() || origins == "*" {
        return AllowOrigin::any();
    }

    let parsed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if parsed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parsed)
    }
}
