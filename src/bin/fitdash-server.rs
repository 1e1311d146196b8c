// ABOUTME: HTTP server binary for the Fitdash dashboard API
// ABOUTME: Loads the dataset and model once, then serves JSON routes until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitdash Server Binary
//!
//! Startup fails fast when the dataset or model artifact cannot be loaded.

use anyhow::Result;
use clap::Parser;
use fitdash::config::ServerConfig;
use fitdash::constants::service_names;
use fitdash::context::DashboardContext;
use fitdash::logging::LoggingConfig;
use fitdash::routes::build_router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fitdash-server")]
#[command(about = "Fitdash - activity, sleep, and calorie insights API")]
struct Args {
    /// Override the dataset CSV path
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Override the model artifact path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override HTTP host
    #[arg(long)]
    http_host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(dataset) = args.dataset {
        config.dataset_path = dataset;
    }
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(http_host) = args.http_host {
        config.http_host = http_host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    LoggingConfig::for_server(&config)
        .with_service_name(service_names::FITDASH_SERVER)
        .init()?;
    info!("{}", config.summary());

    let context = match DashboardContext::load(&config) {
        Ok(context) => Arc::new(context),
        Err(e) => {
            error!(code = ?e.code, "Startup failed: {e}");
            return Err(e.into());
        }
    };
    info!(?context, "Dashboard context ready");

    let router = build_router(context, &config);
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
