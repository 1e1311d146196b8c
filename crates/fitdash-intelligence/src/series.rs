// ABOUTME: Chart-ready series for a user's steps trend, activity levels, and steps against sleep
// ABOUTME: Rendering belongs to the client; this module only shapes the rows into plot data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::ActivityRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One point of the daily steps line chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsTrendPoint {
    /// Day
    pub date: NaiveDate,
    /// Steps that day
    pub total_steps: u32,
}

/// One bar of the activity-level distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLevelCount {
    /// Activity label
    pub label: String,
    /// Days carrying the label
    pub days: usize,
}

/// One point of the steps against sleep scatter plot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsSleepPoint {
    /// Day
    pub date: NaiveDate,
    /// Steps that day
    pub total_steps: u32,
    /// Minutes asleep that day
    pub minutes_asleep: u32,
}

/// All chart data for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeries {
    /// Steps per day, in dataset order
    pub steps_trend: Vec<StepsTrendPoint>,
    /// Day counts per activity label, sorted by label; unlabeled days are left out
    pub activity_levels: Vec<ActivityLevelCount>,
    /// Days with sleep tracked
    pub steps_vs_sleep: Vec<StepsSleepPoint>,
}

impl UserSeries {
    /// Shape a user's rows into chart series
    #[must_use]
    pub fn from_rows(rows: &[&ActivityRecord]) -> Self {
        let steps_trend = rows
            .iter()
            .map(|r| StepsTrendPoint {
                date: r.date,
                total_steps: r.total_steps,
            })
            .collect();

        let mut levels: BTreeMap<&str, usize> = BTreeMap::new();
        for row in rows.iter().filter(|r| !r.activity_level.is_empty()) {
            *levels.entry(row.activity_level.as_str()).or_default() += 1;
        }
        let activity_levels = levels
            .into_iter()
            .map(|(label, days)| ActivityLevelCount {
                label: label.to_owned(),
                days,
            })
            .collect();

        let steps_vs_sleep = rows
            .iter()
            .filter_map(|r| {
                r.total_minutes_asleep.map(|minutes_asleep| StepsSleepPoint {
                    date: r.date,
                    total_steps: r.total_steps,
                    minutes_asleep,
                })
            })
            .collect();

        Self {
            steps_trend,
            activity_levels,
            steps_vs_sleep,
        }
    }

    /// Whether the sleep scatter plot has anything to show
    #[must_use]
    pub fn has_sleep_data(&self) -> bool {
        !self.steps_vs_sleep.is_empty()
    }
}
