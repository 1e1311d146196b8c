// ABOUTME: Delta classifier comparing a calorie prediction with the user's historical average
// ABOUTME: Buckets the signed delta into higher-burn, consistent, or lower-burn advice bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation)] // Display values truncate toward zero on purpose

use crate::constants::advice::{HIGHER_BURN_THRESHOLD_KCAL, LOWER_BURN_THRESHOLD_KCAL};
use serde::{Deserialize, Serialize};

/// Qualitative comparison of predicted against historical burn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalorieBand {
    /// Predicted burn exceeds the average by more than 50 kcal
    HigherBurn,
    /// Within 50 kcal of the average, both bounds inclusive
    Consistent,
    /// Predicted burn falls short of the average by more than 50 kcal
    LowerBurn,
}

impl CalorieBand {
    /// Classify a signed delta in kcal
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > HIGHER_BURN_THRESHOLD_KCAL {
            Self::HigherBurn
        } else if delta < LOWER_BURN_THRESHOLD_KCAL {
            Self::LowerBurn
        } else {
            Self::Consistent
        }
    }

    /// Advice shown with the band
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::HigherBurn => "Excellent, higher burn day!",
            Self::Consistent => "Similar to average, consistent progress!",
            Self::LowerBurn => "Lower activity, try boosting intensity!",
        }
    }
}

/// A prediction compared with the user's average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieAdvice {
    /// Raw model prediction (kcal)
    pub prediction: f64,
    /// User's historical mean calories (kcal)
    pub average_calories: f64,
    /// `prediction - average_calories`
    pub delta: f64,
    /// Qualitative band
    pub band: CalorieBand,
    /// Prediction as displayed, truncated toward zero
    pub predicted_calories: i64,
    /// "That's N calories more/less than your average"
    pub caption: String,
    /// Band advice
    pub message: String,
}

/// Compare `prediction` with `avg_calories` and pick the advice band
#[must_use]
pub fn classify_delta(prediction: f64, avg_calories: f64) -> CalorieAdvice {
    let delta = prediction - avg_calories;
    let band = CalorieBand::from_delta(delta);
    let direction = if delta > 0.0 { "more" } else { "less" };
    let magnitude = (delta.trunc() as i64).unsigned_abs();

    CalorieAdvice {
        prediction,
        average_calories: avg_calories,
        delta,
        band,
        predicted_calories: prediction.trunc() as i64,
        caption: format!("That's {magnitude} calories {direction} than your average"),
        message: band.message().to_owned(),
    }
}
