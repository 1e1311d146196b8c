// ABOUTME: Configuration module for server and CLI startup settings
// ABOUTME: Environment-only; command-line flags override what it loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Fitdash server and CLI
//!
//! All settings come from environment variables. There are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
