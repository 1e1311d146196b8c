// ABOUTME: Calorie predictor capability with activity-only and per-user implementations
// ABOUTME: The per-user variant runs its matched preprocessor before the regressor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie Predictors
//!
//! One capability, two variants, selected by which artifact was loaded:
//!
//! - [`DirectPredictor`]: the regressor alone, fed the six activity features
//! - [`PreprocessedPredictor`]: a preprocessor and regressor fitted together,
//!   fed the activity features plus the categorical user id
//!
//! Both constructors validate the artifact parts up front so a mismatched
//! pair never reaches request handling.

mod linear;
mod preprocessor;

pub use linear::LinearModel;
pub use preprocessor::Preprocessor;

use crate::errors::{AppError, AppResult};
use crate::features::PredictionInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which predictor implementation is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorVariant {
    /// Activity features only
    ActivityOnly,
    /// Activity features plus the categorical user id
    PerUser,
}

impl PredictorVariant {
    /// Whether inputs must carry the user id
    #[must_use]
    pub const fn requires_user(self) -> bool {
        matches!(self, Self::PerUser)
    }
}

/// Predicts calories burned for one planned day
pub trait CaloriePredictor: Send + Sync + fmt::Debug {
    /// Implementation variant
    fn variant(&self) -> PredictorVariant;

    /// Predict calories for one input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the input lacks a feature the model needs,
    /// or `InternalError` if the model yields a non-finite value
    fn predict(&self, input: &PredictionInput) -> AppResult<f64>;
}

fn finite(prediction: f64) -> AppResult<f64> {
    if prediction.is_finite() {
        Ok(prediction)
    } else {
        Err(AppError::internal("Model produced a non-finite prediction"))
    }
}

/// Regressor over the six activity features
#[derive(Debug, Clone)]
pub struct DirectPredictor {
    model: LinearModel,
}

impl DirectPredictor {
    /// Wrap a model that takes the six activity features
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if the model is invalid or not six features wide
    pub fn new(model: LinearModel) -> AppResult<Self> {
        model.validate()?;
        let expected = PredictionInput::columns().len();
        if model.n_features() != expected {
            return Err(AppError::model_load(format!(
                "Activity-only model must take {expected} features, artifact has {}",
                model.n_features()
            )));
        }
        Ok(Self { model })
    }
}

impl CaloriePredictor for DirectPredictor {
    fn variant(&self) -> PredictorVariant {
        PredictorVariant::ActivityOnly
    }

    fn predict(&self, input: &PredictionInput) -> AppResult<f64> {
        finite(self.model.predict(&input.values())?)
    }
}

/// Preprocessor and regressor loaded as a matched pair
#[derive(Debug, Clone)]
pub struct PreprocessedPredictor {
    preprocessor: Preprocessor,
    model: LinearModel,
}

impl PreprocessedPredictor {
    /// Pair a preprocessor with the model fitted on its output
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` if either part is invalid, their pipeline
    /// tags disagree, or the model width differs from the preprocessor output
    pub fn new(preprocessor: Preprocessor, model: LinearModel) -> AppResult<Self> {
        preprocessor.validate()?;
        model.validate()?;

        if let (Some(encoder_tag), Some(model_tag)) = (&preprocessor.pipeline_id, &model.pipeline_id)
        {
            if encoder_tag != model_tag {
                return Err(AppError::model_load(format!(
                    "Preprocessor '{encoder_tag}' does not belong to model '{model_tag}'"
                )));
            }
        }

        if preprocessor.output_width() != model.n_features() {
            return Err(AppError::model_load(format!(
                "Preprocessor emits {} features but model expects {}",
                preprocessor.output_width(),
                model.n_features()
            )));
        }

        Ok(Self {
            preprocessor,
            model,
        })
    }
}

impl CaloriePredictor for PreprocessedPredictor {
    fn variant(&self) -> PredictorVariant {
        PredictorVariant::PerUser
    }

    fn predict(&self, input: &PredictionInput) -> AppResult<f64> {
        let row = self.preprocessor.transform(input)?;
        finite(self.model.predict(&row)?)
    }
}
