// ABOUTME: Feature vector builder turning slider values into the ordered model input
// ABOUTME: Derives total active minutes from the same vector and optionally attaches the user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns;
use crate::models::UserId;
use crate::predictor::PredictorVariant;
use serde::{Deserialize, Serialize};

/// Slider values chosen for the day being planned
///
/// Values are not range-checked here; the UI bounds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderInput {
    /// Total steps
    pub steps: u32,
    /// Very-active minutes
    pub very: u32,
    /// Fairly-active minutes
    pub fairly: u32,
    /// Lightly-active minutes
    pub lightly: u32,
    /// Sedentary minutes
    pub sedentary: u32,
}

impl SliderInput {
    /// Create slider input from the five values, in form order
    #[must_use]
    pub const fn new(steps: u32, very: u32, fairly: u32, lightly: u32, sedentary: u32) -> Self {
        Self {
            steps,
            very,
            fairly,
            lightly,
            sedentary,
        }
    }
}

/// Model input: the ordered activity features, optionally with the user id
///
/// The total-active feature is derived from the three minute features of
/// this same vector and cannot be supplied separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionInput {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    user: Option<UserId>,
    #[serde(rename = "TotalSteps")]
    total_steps: u32,
    #[serde(rename = "VeryActiveMinutes")]
    very_active_minutes: u32,
    #[serde(rename = "FairlyActiveMinutes")]
    fairly_active_minutes: u32,
    #[serde(rename = "LightlyActiveMinutes")]
    lightly_active_minutes: u32,
    #[serde(rename = "SedentaryMinutes")]
    sedentary_minutes: u32,
    #[serde(rename = "TotalActiveMinutes")]
    total_active_minutes: u64,
}

impl PredictionInput {
    /// Categorical user feature, present for per-user models
    #[must_use]
    pub const fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// Derived total active minutes
    #[must_use]
    pub const fn total_active_minutes(&self) -> u64 {
        self.total_active_minutes
    }

    /// Numeric features in [`PredictionInput::columns`] order
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: total is at most 3 * u32::MAX
    pub fn values(&self) -> [f64; 6] {
        [
            f64::from(self.total_steps),
            f64::from(self.very_active_minutes),
            f64::from(self.fairly_active_minutes),
            f64::from(self.lightly_active_minutes),
            f64::from(self.sedentary_minutes),
            self.total_active_minutes as f64,
        ]
    }

    /// Numeric feature column names, in training order
    #[must_use]
    pub const fn columns() -> [&'static str; 6] {
        columns::FEATURES
    }
}

/// Builds [`PredictionInput`] values from slider positions
pub struct FeatureVectorBuilder;

impl FeatureVectorBuilder {
    /// Activity features only
    #[must_use]
    pub fn build(sliders: SliderInput) -> PredictionInput {
        let total_active_minutes = u64::from(sliders.very)
            + u64::from(sliders.fairly)
            + u64::from(sliders.lightly);
        PredictionInput {
            user: None,
            total_steps: sliders.steps,
            very_active_minutes: sliders.very,
            fairly_active_minutes: sliders.fairly,
            lightly_active_minutes: sliders.lightly,
            sedentary_minutes: sliders.sedentary,
            total_active_minutes,
        }
    }

    /// Activity features with the categorical user column prepended
    #[must_use]
    pub fn build_for_user(user: &UserId, sliders: SliderInput) -> PredictionInput {
        PredictionInput {
            user: Some(user.clone()),
            ..Self::build(sliders)
        }
    }

    /// Build the input shape the given predictor variant consumes
    #[must_use]
    pub fn build_for_variant(
        variant: PredictorVariant,
        user: &UserId,
        sliders: SliderInput,
    ) -> PredictionInput {
        if variant.requires_user() {
            Self::build_for_user(user, sliders)
        } else {
            Self::build(sliders)
        }
    }
}
