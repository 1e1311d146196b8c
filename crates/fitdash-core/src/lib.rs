// ABOUTME: Core types and constants for the Fitdash activity insights service
// ABOUTME: Foundation crate with error handling, domain constants, and activity models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitdash Core
//!
//! Foundation crate providing shared types and constants. It changes
//! infrequently, which keeps incremental builds of the other workspace
//! crates cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Column names, slider bounds, advice thresholds, defaults
//! - **models**: `UserId` and `ActivityRecord`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
