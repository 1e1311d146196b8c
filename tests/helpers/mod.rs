// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports the axum request helper and dataset and artifact fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
// Each test binary uses a different subset of the helpers
#![allow(dead_code)]

pub mod axum_test;
pub mod fixtures;
