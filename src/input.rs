// ABOUTME: JSON input loaders for samples, laps, stress maps, workouts, and activities
// ABOUTME: Parse failures surface as InvalidFormat errors naming the offending file
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tracing::debug;
use trainlog_core::errors::{AnalyticsError, AppError, AppResult};
use trainlog_core::models::{
    CalendarItem, CompletedActivity, ItemBody, Lap, Pair, PlannedWorkout, Sample, SessionTotals,
};
use trainlog_intelligence::{DailyStressMap, SessionInput};

/// Parse a `YYYY-MM-DD` date key
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidDate` for anything else
pub fn parse_date_key(raw: &str) -> Result<NaiveDate, AnalyticsError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AnalyticsError::InvalidDate(raw.to_owned()))
}

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read, or `InvalidFormat`
/// if it is not valid JSON for `T`
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    let value = serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_format(format!("Invalid JSON in {}: {e}", path.display()))
            .with_source(e)
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Loaded JSON input");
    Ok(value)
}

/// Session input from a sample file, an optional lap file, and optional totals
///
/// # Errors
///
/// Returns an error if any file cannot be read or parsed
pub async fn load_session_input(
    samples: &Path,
    laps: Option<&Path>,
    totals: Option<&Path>,
) -> AppResult<SessionInput> {
    let samples: Vec<Sample> = read_json(samples).await?;
    let laps: Vec<Lap> = match laps {
        Some(path) => read_json(path).await?,
        None => Vec::new(),
    };
    let totals: SessionTotals = match totals {
        Some(path) => read_json(path).await?,
        None => SessionTotals::default(),
    };
    Ok(SessionInput {
        samples,
        laps,
        totals,
    })
}

/// Daily stress map from a `{"YYYY-MM-DD": tss}` object
///
/// # Errors
///
/// Returns `InvalidFormat` for unparseable JSON or date keys
pub async fn load_stress_map(path: &Path) -> AppResult<DailyStressMap> {
    let raw: BTreeMap<String, f64> = read_json(path).await?;
    stress_map_from_keys(raw)
}

/// Convert string date keys, summing keys that name the same day
///
/// # Errors
///
/// Returns `InvalidFormat` for the first key that is not a date
pub fn stress_map_from_keys(raw: BTreeMap<String, f64>) -> AppResult<DailyStressMap> {
    let mut map = DailyStressMap::new();
    for (key, tss) in raw {
        let date = parse_date_key(&key)?;
        if tss.is_finite() {
            *map.entry(date).or_default() += tss;
        }
    }
    Ok(map)
}

/// Planned workout with the stored-item clamps applied
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_planned_workout(path: &Path) -> AppResult<PlannedWorkout> {
    let mut workout: PlannedWorkout = read_json(path).await?;
    workout.details = workout.details.normalized();
    Ok(workout)
}

/// Completed activity
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_completed_activity(path: &Path) -> AppResult<CompletedActivity> {
    read_json(path).await
}

/// Completed activity list
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_activities(path: &Path) -> AppResult<Vec<CompletedActivity>> {
    read_json(path).await
}

/// Calendar items with workout clamps applied
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub async fn load_calendar(path: &Path) -> AppResult<Vec<CalendarItem>> {
    let mut items: Vec<CalendarItem> = read_json(path).await?;
    for item in &mut items {
        if let ItemBody::Workout(details) = &item.body {
            item.body = ItemBody::Workout(details.clone().normalized());
        }
    }
    Ok(items)
}

/// Stored pairs; a missing file means no pairs yet
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or parsed
pub async fn load_pairs(path: &Path) -> AppResult<Vec<Pair>> {
    let exists = fs::try_exists(path).await.map_err(|e| {
        AppError::storage(format!("Failed to check {}: {e}", path.display())).with_source(e)
    })?;
    if exists {
        read_json(path).await
    } else {
        debug!(path = %path.display(), "No pairs file, starting empty");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_key() {
        assert_eq!(
            parse_date_key(" 2025-02-28 "),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())
        );
        assert_eq!(
            parse_date_key("2025-02-30"),
            Err(AnalyticsError::InvalidDate("2025-02-30".into()))
        );
    }

    #[test]
    fn test_stress_map_rejects_bad_keys() {
        let mut raw = BTreeMap::new();
        raw.insert("2025-03-01".to_owned(), 40.0);
        raw.insert("yesterday".to_owned(), 10.0);
        assert!(stress_map_from_keys(raw).is_err());
    }
}
