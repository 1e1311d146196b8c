// ABOUTME: Fitdash CLI - terminal view of the activity dashboard and calorie predictor
// ABOUTME: Lists users, prints summaries, runs what-if predictions, and checks startup artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List users in the dataset
//! fitdash-cli users
//!
//! # Show averages and chart data for one user
//! fitdash-cli summary --user 1503960366
//!
//! # Predict calories for a planned day, starting from the user's averages
//! fitdash-cli predict --user 1503960366 --steps 12000 --very 45
//!
//! # Verify the dataset and model artifact load
//! fitdash-cli --dataset data.csv --model model.json check
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fitdash::config::{LogLevel, ServerConfig};
use fitdash::constants::{service_names, sliders};
use fitdash::errors::AppResult;
use fitdash::logging::{LogFormat, LoggingConfig};
use fitdash::models::UserId;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fitdash-cli",
    about = "Fitdash activity and calorie CLI",
    long_about = "Terminal access to per-user activity summaries and the what-if calorie predictor."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dataset CSV path override
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Model artifact path override
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List users in the dataset
    Users,

    /// Show a user's averages, activity levels, and sleep data
    Summary {
        /// User identifier
        #[arg(long)]
        user: String,
    },

    /// Predict calories for a planned day
    Predict {
        /// User identifier
        #[arg(long)]
        user: String,

        /// Total steps (defaults to the user's average)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(sliders::STEPS_MAX)))]
        steps: Option<u32>,

        /// Very-active minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(sliders::VERY_ACTIVE_MAX)))]
        very: Option<u32>,

        /// Fairly-active minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(sliders::FAIRLY_ACTIVE_MAX)))]
        fairly: Option<u32>,

        /// Lightly-active minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(sliders::LIGHTLY_ACTIVE_MAX)))]
        lightly: Option<u32>,

        /// Sedentary minutes
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(sliders::SEDENTARY_MAX)))]
        sedentary: Option<u32>,
    },

    /// Load the dataset and model artifact and report what was found
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    }
    .with_level(log_level)
    .with_service_name(service_names::FITDASH_CLI)
    .init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(dataset) = cli.dataset {
        config.dataset_path = dataset;
    }
    if let Some(model) = cli.model {
        config.model_path = model;
    }
    config.validate()?;
    debug!("{}", config.summary());

    match cli.command {
        Command::Users => commands::users(&config),
        Command::Summary { user } => commands::summary(&config, &UserId::new(user)),
        Command::Predict {
            user,
            steps,
            very,
            fairly,
            lightly,
            sedentary,
        } => commands::predict(
            &config,
            &UserId::new(user),
            commands::SliderOverrides {
                steps,
                very,
                fairly,
                lightly,
                sedentary,
            },
        ),
        Command::Check => commands::check(&config),
    }
}
