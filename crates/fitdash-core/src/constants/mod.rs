// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dataset column names, slider bounds, advice thresholds, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Dataset column headers
pub mod columns {
    /// User identifier
    pub const ID: &str = "Id";
    /// Calendar date
    pub const DATE: &str = "Date";
    /// Daily step count
    pub const TOTAL_STEPS: &str = "TotalSteps";
    /// Minutes of vigorous activity
    pub const VERY_ACTIVE_MINUTES: &str = "VeryActiveMinutes";
    /// Minutes of moderate activity
    pub const FAIRLY_ACTIVE_MINUTES: &str = "FairlyActiveMinutes";
    /// Minutes of light activity
    pub const LIGHTLY_ACTIVE_MINUTES: &str = "LightlyActiveMinutes";
    /// Minutes sedentary
    pub const SEDENTARY_MINUTES: &str = "SedentaryMinutes";
    /// Minutes asleep (optional)
    pub const TOTAL_MINUTES_ASLEEP: &str = "TotalMinutesAsleep";
    /// Observed calories burned
    pub const CALORIES: &str = "Calories";
    /// Categorical activity label
    pub const ACTIVITY_LEVEL: &str = "ActivityLevel";
    /// Derived sum of the three active-minute columns
    pub const TOTAL_ACTIVE_MINUTES: &str = "TotalActiveMinutes";

    /// Columns every dataset must provide
    pub const REQUIRED: [&str; 8] = [
        ID,
        DATE,
        TOTAL_STEPS,
        VERY_ACTIVE_MINUTES,
        FAIRLY_ACTIVE_MINUTES,
        LIGHTLY_ACTIVE_MINUTES,
        SEDENTARY_MINUTES,
        CALORIES,
    ];

    /// Model feature columns, in the order the regressor was trained on
    pub const FEATURES: [&str; 6] = [
        TOTAL_STEPS,
        VERY_ACTIVE_MINUTES,
        FAIRLY_ACTIVE_MINUTES,
        LIGHTLY_ACTIVE_MINUTES,
        SEDENTARY_MINUTES,
        TOTAL_ACTIVE_MINUTES,
    ];
}

/// Slider bounds and fallback defaults for the prediction form
pub mod sliders {
    /// Steps upper bound
    pub const STEPS_MAX: u32 = 30_000;
    /// Steps slider increment
    pub const STEPS_STEP: u32 = 500;
    /// Very-active minutes upper bound
    pub const VERY_ACTIVE_MAX: u32 = 180;
    /// Fairly-active minutes upper bound
    pub const FAIRLY_ACTIVE_MAX: u32 = 180;
    /// Lightly-active minutes upper bound
    pub const LIGHTLY_ACTIVE_MAX: u32 = 720;
    /// Sedentary minutes upper bound (one day)
    pub const SEDENTARY_MAX: u32 = 1440;

    /// Fairly-active fallback when no average exists
    pub const FAIRLY_ACTIVE_FALLBACK: u32 = 20;
    /// Lightly-active fallback when no average exists
    pub const LIGHTLY_ACTIVE_FALLBACK: u32 = 200;
    /// Sedentary fallback when no average exists
    pub const SEDENTARY_FALLBACK: u32 = 600;
}

/// Delta classification thresholds
pub mod advice {
    /// Prediction must exceed the average by more than this to be a higher burn day
    pub const HIGHER_BURN_THRESHOLD_KCAL: f64 = 50.0;
    /// Prediction must fall below the average by more than this to be a lower burn day
    pub const LOWER_BURN_THRESHOLD_KCAL: f64 = -50.0;
}

/// Unit conversions
pub mod units {
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Minutes per day, the most any minute column can hold
    pub const MINUTES_PER_DAY: u32 = 1440;
}

/// Model artifact format
pub mod artifact {
    /// Supported artifact format version
    pub const FORMAT_VERSION: u32 = 1;
}

/// Service names for structured logging
pub mod service_names {
    /// HTTP dashboard server
    pub const FITDASH_SERVER: &str = "fitdash-server";
    /// Command-line client
    pub const FITDASH_CLI: &str = "fitdash-cli";
}

/// Default environment values
pub mod defaults {
    /// Dataset location
    pub const DATASET_PATH: &str = "fitbit_processed.csv";
    /// Model artifact location
    pub const MODEL_PATH: &str = "calorie_predictor_v2.json";
    /// Bind address
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
}
