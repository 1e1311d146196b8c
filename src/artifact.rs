// ABOUTME: Model artifact loader that picks the calorie predictor variant from the bundle contents
// ABOUTME: Reads the JSON bundle once at startup and rejects incompatible or mismatched parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Artifact
//!
//! A bundle holds a regressor and, for the per-user variant, the preprocessor
//! it was fitted on:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "pipeline_id": "calorie_predictor_v2",
//!   "model": { "intercept": 1650.0, "coefficients": [0.05, 4.1, 2.3, 1.2, -0.1, 0.4] },
//!   "preprocessor": { "id_categories": ["1503960366"] }
//! }
//! ```
//!
//! Every load failure is a `ModelLoadError`; the server refuses to start.

use crate::constants::artifact::FORMAT_VERSION;
use crate::errors::{AppError, AppResult};
use fitdash_intelligence::{
    CaloriePredictor, DirectPredictor, LinearModel, PreprocessedPredictor, Preprocessor,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk model bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Bundle format version
    pub format_version: u32,
    /// Tag naming the training run, inherited by parts that carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    /// Regressor weights
    pub model: LinearModel,
    /// Encoding step, present for the per-user variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprocessor: Option<Preprocessor>,
}

impl ModelArtifact {
    /// Parse a bundle from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if the JSON is malformed or the format version
    /// is unsupported
    pub fn from_json(text: &str) -> AppResult<Self> {
        let artifact: Self = serde_json::from_str(text).map_err(|e| {
            AppError::model_load(format!("Malformed model artifact: {e}")).with_source(e)
        })?;
        if artifact.format_version != FORMAT_VERSION {
            return Err(AppError::model_load(format!(
                "Unsupported model artifact format version {} (expected {FORMAT_VERSION})",
                artifact.format_version
            )));
        }
        Ok(artifact)
    }

    /// Build the predictor variant this bundle describes
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if the parts are invalid or do not belong together
    pub fn into_predictor(self) -> AppResult<Box<dyn CaloriePredictor>> {
        let Self {
            pipeline_id,
            mut model,
            preprocessor,
            ..
        } = self;

        if model.pipeline_id.is_none() {
            model.pipeline_id.clone_from(&pipeline_id);
        }

        match preprocessor {
            None => Ok(Box::new(DirectPredictor::new(model)?)),
            Some(mut preprocessor) => {
                if preprocessor.pipeline_id.is_none() {
                    preprocessor.pipeline_id = pipeline_id;
                }
                Ok(Box::new(PreprocessedPredictor::new(preprocessor, model)?))
            }
        }
    }
}

/// Read a bundle from disk and build its predictor
///
/// # Errors
///
/// Returns `ModelLoadError` if the file is missing or unreadable, or for any
/// reason listed on [`ModelArtifact::from_json`] and
/// [`ModelArtifact::into_predictor`]
pub fn load_predictor(path: impl AsRef<Path>) -> AppResult<Box<dyn CaloriePredictor>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        AppError::model_load(format!("Cannot read model artifact {}: {e}", path.display()))
            .with_source(e)
    })?;
    let predictor = ModelArtifact::from_json(&text)?.into_predictor()?;
    info!(
        path = %path.display(),
        variant = ?predictor.variant(),
        "Calorie predictor loaded"
    );
    Ok(predictor)
}
