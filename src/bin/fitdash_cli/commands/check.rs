// ABOUTME: Startup artifact check command for fitdash-cli
// ABOUTME: Loads the dataset and model artifact exactly as the server does and reports the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::display_check_report;
use crate::Result;
use fitdash::config::ServerConfig;
use fitdash::context::DashboardContext;
use tracing::info;

/// Load both startup artifacts; any failure is returned as the fatal error
pub fn check(config: &ServerConfig) -> Result<()> {
    info!(
        dataset = %config.dataset_path.display(),
        model = %config.model_path.display(),
        "Checking startup artifacts"
    );
    let context = DashboardContext::load(config)?;
    display_check_report(config, &context);
    Ok(())
}
