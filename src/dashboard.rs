// ABOUTME: Per-interaction dashboard pipeline from user selection to prediction and advice
// ABOUTME: Computes summary, slider defaults, and calorie prediction against an immutable context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard Pipeline
//!
//! Every interaction re-runs the pipeline from scratch:
//!
//! 1. Select the user's rows and compute their aggregate and chart series
//! 2. Derive slider defaults from the aggregate
//! 3. Build the feature vector the loaded predictor consumes
//! 4. Predict and classify the result against the user's mean calories
//!
//! Nothing is cached between interactions.

use crate::constants::sliders;
use crate::context::DashboardContext;
use crate::dataset::Dataset;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::UserId;
use fitdash_intelligence::{
    classify_delta, CalorieAdvice, FeatureVectorBuilder, PredictionInput, PredictorVariant,
    SliderInput, UserAggregate, UserSeries,
};
use serde::Serialize;
use tracing::debug;

/// Range and increment of one slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderBound {
    /// Lowest value
    pub min: u32,
    /// Highest value
    pub max: u32,
    /// Increment
    pub step: u32,
}

impl SliderBound {
    const fn up_to(max: u32) -> Self {
        Self {
            min: 0,
            max,
            step: 1,
        }
    }

    /// Truncate a mean toward zero and clamp it into range
    #[must_use]
    pub fn clamp_mean(self, mean: f64) -> u32 {
        if !mean.is_finite() {
            return self.min;
        }
        mean.trunc()
            .clamp(f64::from(self.min), f64::from(self.max)) as u32
    }
}

/// Bounds for the five activity sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderBounds {
    /// Total steps
    pub steps: SliderBound,
    /// Very-active minutes
    pub very: SliderBound,
    /// Fairly-active minutes
    pub fairly: SliderBound,
    /// Lightly-active minutes
    pub lightly: SliderBound,
    /// Sedentary minutes
    pub sedentary: SliderBound,
}

impl SliderBounds {
    /// The fixed dashboard bounds
    pub const STANDARD: Self = Self {
        steps: SliderBound {
            min: 0,
            max: sliders::STEPS_MAX,
            step: sliders::STEPS_STEP,
        },
        very: SliderBound::up_to(sliders::VERY_ACTIVE_MAX),
        fairly: SliderBound::up_to(sliders::FAIRLY_ACTIVE_MAX),
        lightly: SliderBound::up_to(sliders::LIGHTLY_ACTIVE_MAX),
        sedentary: SliderBound::up_to(sliders::SEDENTARY_MAX),
    };
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Slider bounds together with their starting positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderSettings {
    /// Allowed ranges
    pub bounds: SliderBounds,
    /// Starting positions
    pub defaults: SliderInput,
}

impl SliderSettings {
    /// Settings for a user's aggregate, or the placeholder state without one
    #[must_use]
    pub fn from_aggregate(aggregate: Option<&UserAggregate>) -> Self {
        let bounds = SliderBounds::STANDARD;
        let defaults = aggregate.map_or(
            SliderInput::new(
                0,
                0,
                sliders::FAIRLY_ACTIVE_FALLBACK,
                sliders::LIGHTLY_ACTIVE_FALLBACK,
                sliders::SEDENTARY_FALLBACK,
            ),
            |agg| SliderInput {
                steps: bounds.steps.clamp_mean(agg.mean_steps),
                very: bounds.very.clamp_mean(agg.mean_very_active_minutes),
                fairly: bounds.fairly.clamp_mean(agg.mean_fairly_active_minutes),
                lightly: bounds.lightly.clamp_mean(agg.mean_lightly_active_minutes),
                sedentary: bounds.sedentary.clamp_mean(agg.mean_sedentary_minutes),
            },
        );
        Self { bounds, defaults }
    }

    /// Placeholder state shown when no user data exists
    #[must_use]
    pub fn placeholder() -> Self {
        Self::from_aggregate(None)
    }
}

/// A recoverable condition shown beside the results instead of failing them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Condition code
    pub code: ErrorCode,
    /// Display text
    pub message: String,
}

impl From<AppError> for Notice {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

/// Summary metrics and chart series for one user
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    /// Mean statistics
    pub aggregate: UserAggregate,
    /// Chart data
    pub series: UserSeries,
    /// Recoverable conditions, such as missing sleep data
    pub notices: Vec<Notice>,
}

impl UserSummary {
    /// Summarize `user` from the dataset alone; no predictor is involved
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if the dataset has no rows for `user`
    pub fn for_user(dataset: &Dataset, user: &UserId) -> AppResult<Self> {
        let aggregate = dataset.aggregate(user)?;
        let series = dataset.series(user)?;

        let mut notices = Vec::new();
        if !aggregate.has_sleep_data() {
            notices.push(Notice::from(AppError::missing_field("sleep", user)));
        }

        Ok(Self {
            aggregate,
            series,
            notices,
        })
    }
}

/// Outcome of one prediction
#[derive(Debug, Clone, Serialize)]
pub struct PredictionView {
    /// User the prediction was made for
    pub user_id: UserId,
    /// Predictor variant used
    pub variant: PredictorVariant,
    /// Feature vector sent to the predictor
    pub input: PredictionInput,
    /// Prediction compared with the user's average
    pub advice: CalorieAdvice,
}

/// Everything the dashboard shows for one user
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Selected user
    pub user_id: UserId,
    /// Summary metrics and charts
    pub summary: UserSummary,
    /// Slider configuration
    pub sliders: SliderSettings,
    /// Prediction for the evaluated slider positions
    pub prediction: PredictionView,
}

/// User selector contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserList {
    /// Every user, ascending
    pub users: Vec<UserId>,
    /// Preselected user
    pub default_user: Option<UserId>,
}

impl UserList {
    /// Users in `dataset`, with the first as the preselection
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            users: dataset.user_ids().cloned().collect(),
            default_user: dataset.default_user().cloned(),
        }
    }
}

/// Runs the dashboard pipeline against a loaded context
#[derive(Debug, Clone, Copy)]
pub struct DashboardService<'a> {
    context: &'a DashboardContext,
}

impl<'a> DashboardService<'a> {
    /// Create a service over `context`
    #[must_use]
    pub const fn new(context: &'a DashboardContext) -> Self {
        Self { context }
    }

    /// Users available for selection
    #[must_use]
    pub fn users(&self) -> UserList {
        UserList::from_dataset(self.context.dataset())
    }

    /// Aggregate, chart series, and notices for `user`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if the dataset has no rows for `user`
    pub fn summary(&self, user: &UserId) -> AppResult<UserSummary> {
        UserSummary::for_user(self.context.dataset(), user)
    }

    /// Slider bounds and defaults for `user`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if the dataset has no rows for `user`
    pub fn slider_settings(&self, user: &UserId) -> AppResult<SliderSettings> {
        let aggregate = self.context.dataset().aggregate(user)?;
        Ok(SliderSettings::from_aggregate(Some(&aggregate)))
    }

    /// Slider settings for `user`, or the placeholder state when the user has no rows
    #[must_use]
    pub fn slider_settings_or_placeholder(&self, user: &UserId) -> SliderSettings {
        self.slider_settings(user)
            .unwrap_or_else(|_| SliderSettings::placeholder())
    }

    /// Predict calories for `sliders` and compare with the user's average
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if the dataset has no rows for `user`, or the
    /// predictor's error if it rejects the input
    pub fn predict(&self, user: &UserId, sliders: SliderInput) -> AppResult<PredictionView> {
        let aggregate = self.context.dataset().aggregate(user)?;
        self.predict_against(&aggregate, sliders)
    }

    /// Full dashboard for `user`, at `sliders` or the user's defaults
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if the dataset has no rows for `user`, or the
    /// predictor's error if it rejects the input
    pub fn evaluate(&self, user: &UserId, sliders: Option<SliderInput>) -> AppResult<DashboardView> {
        let summary = self.summary(user)?;
        let settings = SliderSettings::from_aggregate(Some(&summary.aggregate));
        let prediction =
            self.predict_against(&summary.aggregate, sliders.unwrap_or(settings.defaults))?;

        Ok(DashboardView {
            user_id: user.clone(),
            summary,
            sliders: settings,
            prediction,
        })
    }

    fn predict_against(
        self,
        aggregate: &UserAggregate,
        sliders: SliderInput,
    ) -> AppResult<PredictionView> {
        let variant = self.context.variant();
        let input = FeatureVectorBuilder::build_for_variant(variant, &aggregate.user_id, sliders);
        let prediction = self.context.predictor().predict(&input)?;
        let advice = classify_delta(prediction, aggregate.mean_calories);

        debug!(
            user = %aggregate.user_id,
            ?variant,
            prediction,
            delta = advice.delta,
            band = ?advice.band,
            "Evaluated calorie prediction"
        );

        Ok(PredictionView {
            user_id: aggregate.user_id.clone(),
            variant,
            input,
            advice,
        })
    }
}
