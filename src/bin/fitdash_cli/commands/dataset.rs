// ABOUTME: Dataset browsing commands for fitdash-cli
// ABOUTME: Lists users and prints one user's summary without loading the model artifact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{display_summary, display_unknown_user, display_user_list};
use crate::Result;
use fitdash::config::ServerConfig;
use fitdash::dashboard::{UserList, UserSummary};
use fitdash::dataset::Dataset;
use fitdash::errors::ErrorCode;
use fitdash::models::UserId;
use tracing::info;

/// List every user in the dataset
pub fn users(config: &ServerConfig) -> Result<()> {
    let dataset = Dataset::load(&config.dataset_path)?;
    display_user_list(&UserList::from_dataset(&dataset));
    Ok(())
}

/// Print averages, activity levels, and sleep data for one user
pub fn summary(config: &ServerConfig, user: &UserId) -> Result<()> {
    let dataset = Dataset::load(&config.dataset_path)?;
    info!(%user, "Summarizing user");

    match UserSummary::for_user(&dataset, user) {
        Ok(summary) => display_summary(user, &summary),
        Err(e) if e.code == ErrorCode::UnknownUser => display_unknown_user(user),
        Err(e) => return Err(e),
    }
    Ok(())
}
