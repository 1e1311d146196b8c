// ABOUTME: Daily activity record model with the derived total-active-minutes column
// ABOUTME: ActivityRecord and ActivityRecordBuilder for one user's day of steps, minutes, sleep, calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserId;
use crate::constants::columns;
use crate::constants::units::MINUTES_PER_DAY;

/// One row per user per day
///
/// `total_active_minutes` is always the sum of the three active-minute
/// columns once a record has gone through dataset normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// User identifier
    #[serde(rename = "Id")]
    pub user_id: UserId,
    /// Calendar date
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Daily step count
    #[serde(rename = "TotalSteps")]
    pub total_steps: u32,
    /// Minutes of vigorous activity
    #[serde(rename = "VeryActiveMinutes")]
    pub very_active_minutes: u32,
    /// Minutes of moderate activity
    #[serde(rename = "FairlyActiveMinutes")]
    pub fairly_active_minutes: u32,
    /// Minutes of light activity
    #[serde(rename = "LightlyActiveMinutes")]
    pub lightly_active_minutes: u32,
    /// Minutes sedentary
    #[serde(rename = "SedentaryMinutes")]
    pub sedentary_minutes: u32,
    /// Minutes asleep, absent on days without sleep tracking
    #[serde(rename = "TotalMinutesAsleep")]
    pub total_minutes_asleep: Option<u32>,
    /// Observed calories burned
    #[serde(rename = "Calories")]
    pub calories: f64,
    /// Categorical activity label
    #[serde(rename = "ActivityLevel")]
    pub activity_level: String,
    /// Derived: very + fairly + lightly active minutes
    #[serde(rename = "TotalActiveMinutes")]
    pub total_active_minutes: u32,
}

impl ActivityRecord {
    /// Sum of the three active-minute columns
    #[must_use]
    pub const fn active_minutes_sum(&self) -> u32 {
        self.very_active_minutes
            .saturating_add(self.fairly_active_minutes)
            .saturating_add(self.lightly_active_minutes)
    }

    /// Whether the stored total agrees with its inputs
    #[must_use]
    pub const fn has_consistent_total(&self) -> bool {
        self.total_active_minutes == self.active_minutes_sum()
    }

    /// The first minute column holding more minutes than a day has
    #[must_use]
    pub fn minutes_out_of_day(&self) -> Option<(&'static str, u32)> {
        [
            (columns::VERY_ACTIVE_MINUTES, self.very_active_minutes),
            (columns::FAIRLY_ACTIVE_MINUTES, self.fairly_active_minutes),
            (columns::LIGHTLY_ACTIVE_MINUTES, self.lightly_active_minutes),
            (columns::SEDENTARY_MINUTES, self.sedentary_minutes),
        ]
        .into_iter()
        .find(|(_, minutes)| *minutes > MINUTES_PER_DAY)
    }
}

/// Builder for [`ActivityRecord`]
///
/// The derived total is computed by [`ActivityRecordBuilder::build`] unless
/// an explicit value was supplied with
/// [`ActivityRecordBuilder::total_active_minutes`].
#[derive(Debug, Clone)]
pub struct ActivityRecordBuilder {
    record: ActivityRecord,
    explicit_total: Option<u32>,
}

impl ActivityRecordBuilder {
    /// Creates a new builder with the required identity fields
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, date: NaiveDate) -> Self {
        Self {
            record: ActivityRecord {
                user_id: user_id.into(),
                date,
                total_steps: 0,
                very_active_minutes: 0,
                fairly_active_minutes: 0,
                lightly_active_minutes: 0,
                sedentary_minutes: 0,
                total_minutes_asleep: None,
                calories: 0.0,
                activity_level: String::new(),
                total_active_minutes: 0,
            },
            explicit_total: None,
        }
    }

    /// Sets the step count
    #[must_use]
    pub fn total_steps(mut self, value: u32) -> Self {
        self.record.total_steps = value;
        self
    }

    /// Sets very, fairly, and lightly active minutes
    #[must_use]
    pub fn active_minutes(mut self, very: u32, fairly: u32, lightly: u32) -> Self {
        self.record.very_active_minutes = very;
        self.record.fairly_active_minutes = fairly;
        self.record.lightly_active_minutes = lightly;
        self
    }

    /// Sets sedentary minutes
    #[must_use]
    pub fn sedentary_minutes(mut self, value: u32) -> Self {
        self.record.sedentary_minutes = value;
        self
    }

    /// Sets minutes asleep
    #[must_use]
    pub fn minutes_asleep(mut self, value: Option<u32>) -> Self {
        self.record.total_minutes_asleep = value;
        self
    }

    /// Sets observed calories
    #[must_use]
    pub fn calories(mut self, value: f64) -> Self {
        self.record.calories = value;
        self
    }

    /// Sets the activity label
    #[must_use]
    pub fn activity_level(mut self, value: impl Into<String>) -> Self {
        self.record.activity_level = value.into();
        self
    }

    /// Sets a precomputed total, as read from a source that already carries it
    #[must_use]
    pub fn total_active_minutes(mut self, value: Option<u32>) -> Self {
        self.explicit_total = value;
        self
    }

    /// Builds the record
    #[must_use]
    pub fn build(self) -> ActivityRecord {
        let mut record = self.record;
        let derived = record.active_minutes_sum();
        record.total_active_minutes = self.explicit_total.unwrap_or(derived);
        record
    }
}
