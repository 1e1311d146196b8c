// ABOUTME: Serialized linear regression weights used as the calorie regressor
// ABOUTME: Validates weights on load and evaluates intercept plus weighted feature sum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Pretrained linear regressor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Bias term (kcal)
    pub intercept: f64,
    /// One weight per input feature, in input order
    pub coefficients: Vec<f64>,
    /// Tag shared with the preprocessor this model was fitted together with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
}

impl LinearModel {
    /// Number of input features the model expects
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Reject empty or non-finite weights
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` describing the first problem found
    pub fn validate(&self) -> AppResult<()> {
        if self.coefficients.is_empty() {
            return Err(AppError::model_load("Model has no coefficients"));
        }
        if !self.intercept.is_finite() {
            return Err(AppError::model_load("Model intercept is not finite"));
        }
        if let Some(index) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(AppError::model_load(format!(
                "Model coefficient {index} is not finite"
            )));
        }
        Ok(())
    }

    /// Evaluate the model on one encoded row
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the row width differs from the model width
    pub fn predict(&self, row: &[f64]) -> AppResult<f64> {
        if row.len() != self.coefficients.len() {
            return Err(AppError::internal(format!(
                "Model expects {} features, got {}",
                self.coefficients.len(),
                row.len()
            )));
        }
        Ok(self
            .coefficients
            .iter()
            .zip(row)
            .fold(self.intercept, |acc, (coefficient, value)| {
                coefficient.mul_add(*value, acc)
            }))
    }
}
