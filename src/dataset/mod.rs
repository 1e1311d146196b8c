// ABOUTME: In-memory activity dataset loaded once at startup and indexed by user
// ABOUTME: Normalizes the derived total-active column at load so readers never branch on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Dataset
//!
//! [`Dataset`] owns every [`ActivityRecord`] and an index from user to row
//! positions. Loading performs the one-time schema normalization: after it,
//! every record's `total_active_minutes` equals the sum of its three
//! active-minute columns, whether the source carried the column or not.

mod csv_source;

use crate::constants::units::MINUTES_PER_DAY;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, UserId};
use fitdash_intelligence::{ensure_total_active, UserAggregate, UserSeries};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// What schema normalization did while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    /// Rows loaded
    pub rows: usize,
    /// Rows whose total was absent and computed
    pub computed_totals: usize,
    /// Rows whose supplied total disagreed with its inputs and was replaced
    pub corrected_totals: usize,
}

/// Read-only activity dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ActivityRecord>,
    index: BTreeMap<UserId, Vec<usize>>,
    normalization: NormalizationReport,
}

impl Dataset {
    /// Load a CSV export from disk
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if the file is missing, unreadable, lacks a
    /// required column, holds a malformed row, or has no rows
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AppError::data_load(format!("Cannot open dataset {}: {e}", path.display()))
                .with_source(e)
        })?;
        let dataset = Self::from_reader(io::BufReader::new(file))?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            users = dataset.user_count(),
            "Activity dataset loaded"
        );
        Ok(dataset)
    }

    /// Load a CSV export from any reader
    ///
    /// # Errors
    ///
    /// Same conditions as [`Dataset::load`], minus file access
    pub fn from_reader<R: io::Read>(reader: R) -> AppResult<Self> {
        let parsed = csv_source::read_rows(reader)?;
        let mut dataset = Self::from_records(parsed.records)?;
        // Absent totals were filled by the record builder
        dataset.normalization.computed_totals = parsed.computed_totals;
        Ok(dataset)
    }

    /// Normalize and index already-typed records
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError` if `records` is empty or a row has a minute
    /// column above one day
    pub fn from_records(mut records: Vec<ActivityRecord>) -> AppResult<Self> {
        if records.is_empty() {
            return Err(AppError::data_load("Dataset contains no rows"));
        }

        if let Some((line, (column, minutes))) = records
            .iter()
            .enumerate()
            .find_map(|(i, r)| r.minutes_out_of_day().map(|found| (i + 1, found)))
        {
            return Err(AppError::data_load(format!(
                "Data row {line} has {minutes} {column}; a day has {MINUTES_PER_DAY} minutes"
            )));
        }

        let corrected_totals = ensure_total_active(&mut records);
        if corrected_totals > 0 {
            warn!(
                corrected_totals,
                "Replaced TotalActiveMinutes values that disagreed with their activity columns"
            );
        }

        let mut index: BTreeMap<UserId, Vec<usize>> = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            index
                .entry(record.user_id.clone())
                .or_default()
                .push(position);
        }

        let normalization = NormalizationReport {
            rows: records.len(),
            computed_totals: 0,
            corrected_totals,
        };
        Ok(Self {
            records,
            index,
            normalization,
        })
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows (never true for a loaded dataset)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct users
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.index.len()
    }

    /// All rows in source order
    #[must_use]
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Distinct user identifiers, ascending
    pub fn user_ids(&self) -> impl Iterator<Item = &UserId> {
        self.index.keys()
    }

    /// The user selected when none was chosen: the first in ascending order
    #[must_use]
    pub fn default_user(&self) -> Option<&UserId> {
        self.index.keys().next()
    }

    /// Whether any row belongs to `user`
    #[must_use]
    pub fn contains_user(&self, user: &UserId) -> bool {
        self.index.contains_key(user)
    }

    /// A user's rows in source order
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if no row belongs to `user`
    pub fn records_for(&self, user: &UserId) -> AppResult<Vec<&ActivityRecord>> {
        self.index
            .get(user)
            .map(|positions| positions.iter().map(|&i| &self.records[i]).collect())
            .ok_or_else(|| AppError::unknown_user(user))
    }

    /// Mean statistics for `user`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if no row belongs to `user`
    pub fn aggregate(&self, user: &UserId) -> AppResult<UserAggregate> {
        UserAggregate::from_rows(user, &self.records_for(user)?)
    }

    /// Chart series for `user`
    ///
    /// # Errors
    ///
    /// Returns `UnknownUser` if no row belongs to `user`
    pub fn series(&self, user: &UserId) -> AppResult<UserSeries> {
        Ok(UserSeries::from_rows(&self.records_for(user)?))
    }

    /// What normalization did at load time
    #[must_use]
    pub const fn normalization(&self) -> NormalizationReport {
        self.normalization
    }
}
