// ABOUTME: Column transformer that encodes the user id and scales activity features
// ABOUTME: One-hot encodes Id against learned categories, then standardizes the six numeric columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::features::PredictionInput;
use crate::models::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const NUMERIC_WIDTH: usize = 6;

/// Learned encoding step for the per-user model
///
/// Output layout is `[one-hot Id..., numeric...]`. An identifier outside the
/// learned categories encodes as all zeros, so the model falls back to its
/// population-level weights for that user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    /// Tag shared with the model this preprocessor was fitted together with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    /// Id categories in one-hot column order
    pub id_categories: Vec<UserId>,
    /// Per-column means for standardization, absent for passthrough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_means: Option<Vec<f64>>,
    /// Per-column scales for standardization, absent for passthrough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_scales: Option<Vec<f64>>,
}

impl Preprocessor {
    /// Width of the encoded row
    #[must_use]
    pub fn output_width(&self) -> usize {
        self.id_categories.len() + NUMERIC_WIDTH
    }

    /// Check the learned parameters are usable
    ///
    /// # Errors
    ///
    /// Returns `ModelLoadError` for duplicate categories, a lone means or
    /// scales vector, wrong vector lengths, non-finite values, or scales that
    /// are not strictly positive
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.id_categories.len());
        if let Some(duplicate) = self.id_categories.iter().find(|id| !seen.insert(*id)) {
            return Err(AppError::model_load(format!(
                "Preprocessor lists Id category {duplicate} more than once"
            )));
        }

        match (&self.numeric_means, &self.numeric_scales) {
            (None, None) => Ok(()),
            (Some(means), Some(scales)) => {
                if means.len() != NUMERIC_WIDTH || scales.len() != NUMERIC_WIDTH {
                    return Err(AppError::model_load(format!(
                        "Preprocessor scaling needs {NUMERIC_WIDTH} means and scales, got {} and {}",
                        means.len(),
                        scales.len()
                    )));
                }
                if means.iter().any(|m| !m.is_finite()) {
                    return Err(AppError::model_load("Preprocessor means must be finite"));
                }
                if scales.iter().any(|s| !s.is_finite() || *s <= 0.0) {
                    return Err(AppError::model_load(
                        "Preprocessor scales must be finite and positive",
                    ));
                }
                Ok(())
            }
            _ => Err(AppError::model_load(
                "Preprocessor needs both numeric_means and numeric_scales, or neither",
            )),
        }
    }

    /// Encode one prediction input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the input has no user identifier
    pub fn transform(&self, input: &PredictionInput) -> AppResult<Vec<f64>> {
        let user = input.user().ok_or_else(|| {
            AppError::invalid_input("Per-user model requires the Id feature")
        })?;

        let mut row = Vec::with_capacity(self.output_width());
        row.extend(
            self.id_categories
                .iter()
                .map(|category| if category == user { 1.0 } else { 0.0 }),
        );

        let values = input.values();
        match (&self.numeric_means, &self.numeric_scales) {
            (Some(means), Some(scales)) => row.extend(
                values
                    .iter()
                    .zip(means.iter().zip(scales))
                    .map(|(value, (mean, scale))| (value - mean) / scale),
            ),
            _ => row.extend(values),
        }
        Ok(row)
    }
}
