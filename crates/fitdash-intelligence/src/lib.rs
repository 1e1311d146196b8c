// ABOUTME: Activity insights pipeline: derived features, calorie prediction, and advice bands
// ABOUTME: Pure, synchronous building blocks evaluated once per dashboard interaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitdash Intelligence
//!
//! The derived-feature and prediction pipeline:
//!
//! 1. [`aggregates`] keeps the derived total-active-minutes column consistent
//!    and computes per-user means
//! 2. [`features`] turns slider values into the ordered model input
//! 3. [`predictor`] runs one of the two calorie predictor variants
//! 4. [`advice`] buckets the prediction against the user's historical average
//!
//! [`series`] prepares the chart data shown next to the averages.

// Re-export fitdash-core modules so pipeline files can keep `use crate::errors::*` etc.
pub use fitdash_core::constants;
pub use fitdash_core::errors;
pub use fitdash_core::models;

/// Derived feature calculator and per-user aggregates
pub mod aggregates;
/// Delta classification into advice bands
pub mod advice;
/// Feature vector builder
pub mod features;
/// Calorie predictor capability and its two variants
pub mod predictor;
/// Chart-ready per-user series
pub mod series;

pub use advice::{classify_delta, CalorieAdvice, CalorieBand};
pub use aggregates::{ensure_total_active, user_rows, UserAggregate};
pub use features::{FeatureVectorBuilder, PredictionInput, SliderInput};
pub use predictor::{
    CaloriePredictor, DirectPredictor, LinearModel, PreprocessedPredictor, Preprocessor,
    PredictorVariant,
};
pub use series::{ActivityLevelCount, StepsSleepPoint, StepsTrendPoint, UserSeries};
