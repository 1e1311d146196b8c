// ABOUTME: Immutable process-wide state holding the loaded dataset and calorie predictor
// ABOUTME: Built once at startup and shared read-only by every request or CLI command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::artifact::load_predictor;
use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::errors::AppResult;
use fitdash_intelligence::{CaloriePredictor, PredictorVariant};
use std::fmt;
use std::path::Path;

/// Dataset and predictor loaded together at startup
///
/// Nothing mutates a context after construction; share it behind an `Arc`.
pub struct DashboardContext {
    dataset: Dataset,
    predictor: Box<dyn CaloriePredictor>,
}

impl DashboardContext {
    /// Assemble a context from already-loaded parts
    #[must_use]
    pub fn new(dataset: Dataset, predictor: Box<dyn CaloriePredictor>) -> Self {
        Self { dataset, predictor }
    }

    /// Load the dataset and model artifact named by `config`
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` or `ModelLoadError`; both are fatal at startup
    pub fn load(config: &ServerConfig) -> AppResult<Self> {
        Self::from_paths(&config.dataset_path, &config.model_path)
    }

    /// Load the dataset and model artifact from explicit paths
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` or `ModelLoadError`
    pub fn from_paths(dataset: impl AsRef<Path>, model: impl AsRef<Path>) -> AppResult<Self> {
        let dataset = Dataset::load(dataset)?;
        let predictor = load_predictor(model)?;
        Ok(Self::new(dataset, predictor))
    }

    /// Loaded dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Loaded predictor
    #[must_use]
    pub fn predictor(&self) -> &dyn CaloriePredictor {
        self.predictor.as_ref()
    }

    /// Which predictor variant was loaded
    #[must_use]
    pub fn variant(&self) -> PredictorVariant {
        self.predictor.variant()
    }
}

impl fmt::Debug for DashboardContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardContext")
            .field("rows", &self.dataset.len())
            .field("users", &self.dataset.user_count())
            .field("variant", &self.predictor.variant())
            .finish()
    }
}
