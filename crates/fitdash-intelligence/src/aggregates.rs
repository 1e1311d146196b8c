// ABOUTME: Derived feature calculator for total active minutes and per-user mean statistics
// ABOUTME: Filters a user's rows in dataset order and averages each field over present values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: row counts far below f64 mantissa range

use crate::constants::units::MINUTES_PER_HOUR;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, UserId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Make every record's `total_active_minutes` equal the sum of its inputs
///
/// Returns how many records had to be (re)computed. A second call on the
/// same slice always returns `0` and changes nothing.
pub fn ensure_total_active(records: &mut [ActivityRecord]) -> usize {
    let mut recomputed = 0;
    for record in records.iter_mut().filter(|r| !r.has_consistent_total()) {
        record.total_active_minutes = record.active_minutes_sum();
        recomputed += 1;
    }
    recomputed
}

/// The rows belonging to `user`, in their original order
#[must_use]
pub fn user_rows<'a>(records: &'a [ActivityRecord], user: &UserId) -> Vec<&'a ActivityRecord> {
    records.iter().filter(|r| &r.user_id == user).collect()
}

/// Running mean over present values
#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(value) = value.filter(|v| v.is_finite()) {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Per-user mean statistics across that user's rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAggregate {
    /// User the statistics describe
    pub user_id: UserId,
    /// Number of rows (days) for the user
    pub days: usize,
    /// Mean daily steps
    pub mean_steps: f64,
    /// Mean very-active minutes
    pub mean_very_active_minutes: f64,
    /// Mean fairly-active minutes
    pub mean_fairly_active_minutes: f64,
    /// Mean lightly-active minutes
    pub mean_lightly_active_minutes: f64,
    /// Mean sedentary minutes
    pub mean_sedentary_minutes: f64,
    /// Mean derived total active minutes
    pub mean_total_active_minutes: f64,
    /// Mean observed calories burned
    pub mean_calories: f64,
    /// Mean hours asleep over tracked days, `0.0` when sleep was never tracked
    pub mean_sleep_hours: f64,
    /// Number of days with sleep tracked
    pub sleep_days: usize,
}

impl UserAggregate {
    /// Filter `records` to `user` and compute the means
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if no record belongs to `user`
    pub fn compute(user: &UserId, records: &[ActivityRecord]) -> AppResult<Self> {
        Self::from_rows(user, &user_rows(records, user))
    }

    /// Compute the means over rows already filtered to `user`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if `rows` is empty
    pub fn from_rows(user: &UserId, rows: &[&ActivityRecord]) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::unknown_user(user));
        }

        let mut steps = Mean::default();
        let mut very = Mean::default();
        let mut fairly = Mean::default();
        let mut lightly = Mean::default();
        let mut sedentary = Mean::default();
        let mut total_active = Mean::default();
        let mut calories = Mean::default();
        let mut sleep_minutes = Mean::default();

        for row in rows {
            steps.push(Some(f64::from(row.total_steps)));
            very.push(Some(f64::from(row.very_active_minutes)));
            fairly.push(Some(f64::from(row.fairly_active_minutes)));
            lightly.push(Some(f64::from(row.lightly_active_minutes)));
            sedentary.push(Some(f64::from(row.sedentary_minutes)));
            total_active.push(Some(f64::from(row.total_active_minutes)));
            calories.push(Some(row.calories));
            sleep_minutes.push(row.total_minutes_asleep.map(f64::from));
        }

        let aggregate = Self {
            user_id: user.clone(),
            days: rows.len(),
            mean_steps: steps.value().unwrap_or_default(),
            mean_very_active_minutes: very.value().unwrap_or_default(),
            mean_fairly_active_minutes: fairly.value().unwrap_or_default(),
            mean_lightly_active_minutes: lightly.value().unwrap_or_default(),
            mean_sedentary_minutes: sedentary.value().unwrap_or_default(),
            mean_total_active_minutes: total_active.value().unwrap_or_default(),
            mean_calories: calories.value().unwrap_or_default(),
            mean_sleep_hours: sleep_minutes
                .value()
                .map_or(0.0, |minutes| minutes / MINUTES_PER_HOUR),
            sleep_days: sleep_minutes.count,
        };

        debug!(
            user = %user,
            days = aggregate.days,
            sleep_days = aggregate.sleep_days,
            "computed user aggregate"
        );
        Ok(aggregate)
    }

    /// Whether any of the user's days carried sleep data
    #[must_use]
    pub const fn has_sleep_data(&self) -> bool {
        self.sleep_days > 0
    }
}
