// ABOUTME: Benchmark fixtures generating synthetic daily activity rows and a matching model
// ABOUTME: Deterministic so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for the dashboard pipeline.

use chrono::{Duration, NaiveDate};
use fitdash::intelligence::{LinearModel, Preprocessor};
use fitdash::models::{ActivityRecord, ActivityRecordBuilder, UserId};

/// Predefined dataset sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum DatasetSize {
    /// Two weeks of rows for a handful of users
    Small,
    /// Roughly the public Fitbit export
    Typical,
}

impl DatasetSize {
    #[must_use]
    pub const fn users(self) -> usize {
        match self {
            Self::Small => 5,
            Self::Typical => 33,
        }
    }

    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Small => 14,
            Self::Typical => 31,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Typical => "typical",
        }
    }
}

/// Identifier of the `index`-th synthetic user
#[must_use]
pub fn user_id(index: usize) -> UserId {
    UserId::new(format!("{}", 1_503_960_366 + index * 1_000))
}

/// Generate `size.users() * size.days()` rows
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_records(size: DatasetSize) -> Vec<ActivityRecord> {
    let base_date = NaiveDate::from_ymd_opt(2016, 4, 12).unwrap_or_default();
    let mut records = Vec::with_capacity(size.users() * size.days());
    for user in 0..size.users() {
        for day in 0..size.days() {
            let seed = user * 31 + day;
            let very = (seed * 7 % 90) as u32;
            let fairly = (seed * 5 % 40) as u32;
            let lightly = 120 + (seed * 13 % 200) as u32;
            let asleep = (seed % 3 != 0).then_some(300 + (seed * 11 % 180) as u32);
            records.push(
                ActivityRecordBuilder::new(user_id(user), base_date + Duration::days(day as i64))
                    .total_steps(2_000 + (seed * 379 % 14_000) as u32)
                    .active_minutes(very, fairly, lightly)
                    .sedentary_minutes(600 + (seed * 17 % 500) as u32)
                    .minutes_asleep(asleep)
                    .calories(1_500.0 + (seed * 53 % 1_600) as f64)
                    .activity_level(if very > 45 { "Very Active" } else { "Lightly Active" })
                    .build(),
            );
        }
    }
    records
}

/// Regressor over the six activity features
#[must_use]
pub fn activity_model() -> LinearModel {
    LinearModel {
        intercept: 1_200.0,
        coefficients: vec![0.04, 6.5, 3.1, 1.4, 0.2, 0.8],
        pipeline_id: None,
    }
}

/// Preprocessor and regressor for the per-user variant
#[must_use]
pub fn per_user_pair(size: DatasetSize) -> (Preprocessor, LinearModel) {
    let categories: Vec<UserId> = (0..size.users()).map(user_id).collect();
    let mut coefficients: Vec<f64> = (0..categories.len())
        .map(|i| (i % 7) as f64 * 25.0 - 75.0)
        .collect();
    coefficients.extend([180.0, 60.0, 25.0, 40.0, 10.0, 30.0]);
    (
        Preprocessor {
            pipeline_id: Some("bench".into()),
            id_categories: categories,
            numeric_means: Some(vec![7_600.0, 21.0, 13.0, 190.0, 990.0, 224.0]),
            numeric_scales: Some(vec![5_000.0, 32.0, 20.0, 110.0, 300.0, 120.0]),
        },
        LinearModel {
            intercept: 2_300.0,
            coefficients,
            pipeline_id: Some("bench".into()),
        },
    )
}
