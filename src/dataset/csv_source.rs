// ABOUTME: CSV reader for the daily activity export with header checks and lenient numeric cells
// ABOUTME: Converts raw rows into ActivityRecords, deriving TotalActiveMinutes when the source lacks it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::columns;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, ActivityRecordBuilder};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io;

/// A CSV row as exported, before schema normalization
///
/// Numeric cells are read as floats because dataframe exports write integer
/// columns that contain blanks as `346.0`.
#[derive(Debug, Deserialize)]
struct RawActivityRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "TotalSteps")]
    total_steps: Option<f64>,
    #[serde(rename = "VeryActiveMinutes")]
    very_active_minutes: Option<f64>,
    #[serde(rename = "FairlyActiveMinutes")]
    fairly_active_minutes: Option<f64>,
    #[serde(rename = "LightlyActiveMinutes")]
    lightly_active_minutes: Option<f64>,
    #[serde(rename = "SedentaryMinutes")]
    sedentary_minutes: Option<f64>,
    #[serde(rename = "TotalMinutesAsleep", default)]
    total_minutes_asleep: Option<f64>,
    #[serde(rename = "Calories")]
    calories: Option<f64>,
    #[serde(rename = "ActivityLevel", default)]
    activity_level: Option<String>,
    #[serde(rename = "TotalActiveMinutes", default)]
    total_active_minutes: Option<f64>,
}

/// Rows read from a source plus how many lacked the derived total
pub(super) struct ParsedRows {
    pub records: Vec<ActivityRecord>,
    pub computed_totals: usize,
}

/// Read every row from a CSV source with a header line
pub(super) fn read_rows<R: io::Read>(reader: R) -> AppResult<ParsedRows> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::data_load(format!("Cannot read CSV header: {e}")).with_source(e))?
        .clone();
    if let Some(missing) = columns::REQUIRED
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(AppError::data_load(format!(
            "Dataset is missing required column '{missing}'"
        )));
    }

    let mut records = Vec::new();
    let mut computed_totals = 0;
    for (index, row) in csv_reader.deserialize::<RawActivityRow>().enumerate() {
        let line = index + 1;
        let row = row.map_err(|e| {
            AppError::data_load(format!("Malformed data row {line}: {e}")).with_source(e)
        })?;
        if row.total_active_minutes.is_none() {
            computed_totals += 1;
        }
        records.push(row_to_record(row, line)?);
    }

    Ok(ParsedRows {
        records,
        computed_totals,
    })
}

fn row_to_record(row: RawActivityRow, line: usize) -> AppResult<ActivityRecord> {
    if row.id.is_empty() {
        return Err(AppError::data_load(format!("Data row {line} has an empty Id")));
    }
    let date = parse_date(&row.date).ok_or_else(|| {
        AppError::data_load(format!(
            "Data row {line} has unparsable Date '{}'. Expected 'YYYY-MM-DD', 'YYYY-MM-DD HH:MM:SS', or 'M/D/YYYY'",
            row.date
        ))
    })?;

    let calories = required(row.calories, columns::CALORIES, line)?;
    if !calories.is_finite() || calories < 0.0 {
        return Err(AppError::data_load(format!(
            "Data row {line} has invalid {} value {calories}",
            columns::CALORIES
        )));
    }

    let total_active = row
        .total_active_minutes
        .map(|value| whole_number(value, columns::TOTAL_ACTIVE_MINUTES, line))
        .transpose()?;
    let minutes_asleep = row
        .total_minutes_asleep
        .map(|value| whole_number(value, columns::TOTAL_MINUTES_ASLEEP, line))
        .transpose()?;

    Ok(ActivityRecordBuilder::new(row.id, date)
        .total_steps(whole_number(
            required(row.total_steps, columns::TOTAL_STEPS, line)?,
            columns::TOTAL_STEPS,
            line,
        )?)
        .active_minutes(
            whole_number(
                required(row.very_active_minutes, columns::VERY_ACTIVE_MINUTES, line)?,
                columns::VERY_ACTIVE_MINUTES,
                line,
            )?,
            whole_number(
                required(row.fairly_active_minutes, columns::FAIRLY_ACTIVE_MINUTES, line)?,
                columns::FAIRLY_ACTIVE_MINUTES,
                line,
            )?,
            whole_number(
                required(row.lightly_active_minutes, columns::LIGHTLY_ACTIVE_MINUTES, line)?,
                columns::LIGHTLY_ACTIVE_MINUTES,
                line,
            )?,
        )
        .sedentary_minutes(whole_number(
            required(row.sedentary_minutes, columns::SEDENTARY_MINUTES, line)?,
            columns::SEDENTARY_MINUTES,
            line,
        )?)
        .minutes_asleep(minutes_asleep)
        .calories(calories)
        .activity_level(row.activity_level.unwrap_or_default())
        .total_active_minutes(total_active)
        .build())
}

fn required(value: Option<f64>, column: &str, line: usize) -> AppResult<f64> {
    value.ok_or_else(|| AppError::data_load(format!("Data row {line} has no {column} value")))
}

/// Accept non-negative integers, including float spellings like `346.0`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: range and fraction checked first
fn whole_number(value: f64, column: &str, line: usize) -> AppResult<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(AppError::data_load(format!(
            "Data row {line} has invalid {column} value {value}; expected a non-negative integer"
        )))
    }
}

/// Parse the date spellings produced by dataframe exports and the raw tracker export
pub(super) fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2016, 4, 12);
        assert_eq!(parse_date("2016-04-12"), expected);
        assert_eq!(parse_date("2016-04-12 00:00:00"), expected);
        assert_eq!(parse_date("2016-04-12T00:00:00"), expected);
        assert_eq!(parse_date("4/12/2016"), expected);
        assert_eq!(parse_date("12.04.2016"), None);
    }

    #[test]
    fn test_whole_number_accepts_float_spelling() {
        assert!(matches!(whole_number(346.0, "TotalMinutesAsleep", 1), Ok(346)));
        assert!(whole_number(12.5, "TotalSteps", 1).is_err());
        assert!(whole_number(-1.0, "TotalSteps", 1).is_err());
        assert!(whole_number(f64::NAN, "TotalSteps", 1).is_err());
    }
}
