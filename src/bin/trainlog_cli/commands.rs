// ABOUTME: Command implementations for trainlog-cli
// ABOUTME: Each command loads its JSON inputs, runs the analytics engine, and returns a JSON report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use tokio::fs;
use tracing::info;
use trainlog::analytics::AnalyticsEngine;
use trainlog::errors::{AppError, AppResult};
use trainlog::input::{
    load_activities, load_calendar, load_completed_activity, load_pairs, load_planned_workout,
    load_session_input, load_stress_map,
};
use trainlog::pairing::{InMemoryPairRepository, PairRepository};
use trainlog_core::models::{CalendarItem, CompletedRecord, PlannedWorkout, SportKey};
use trainlog_intelligence::{AnalyticsConfig, FtpSettings, TrainingLoadCalculator};

use crate::FtpArgs;

/// Apply command-line FTP overrides on top of the configured settings
fn with_overrides(mut settings: FtpSettings, args: &FtpArgs) -> FtpSettings {
    let overrides = [
        (SportKey::Ride, args.ftp_ride),
        (SportKey::Run, args.ftp_run),
        (SportKey::Swim, args.ftp_swim),
        (SportKey::Row, args.ftp_row),
        (SportKey::Strength, args.ftp_strength),
        (SportKey::Other, args.ftp_other),
    ];
    for (key, watts) in overrides {
        if watts.is_some() {
            settings.set(key, watts);
        }
    }
    settings
}

const DAYS_PER_WEEK: usize = 7;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub async fn summarize(
    mut config: AnalyticsConfig,
    samples: &Path,
    laps: Option<&Path>,
    totals: Option<&Path>,
    sport: Option<String>,
    ftp: &FtpArgs,
) -> AppResult<Value> {
    config.ftp = with_overrides(config.ftp, ftp);
    let mut input = load_session_input(samples, laps, totals).await?;
    if sport.is_some() {
        input.totals.sport = sport;
    }

    let summary = AnalyticsEngine::new(config).summarize(&input)?;
    info!(
        sport = %summary.sport,
        duration_s = summary.duration_s,
        tss = ?summary.tss,
        "Summarized session"
    );
    Ok(serde_json::to_value(summary)?)
}

pub async fn load(
    config: AnalyticsConfig,
    stress: &Path,
    date: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> AppResult<Value> {
    let stress = load_stress_map(stress).await?;
    let today = today.unwrap_or_else(local_today);
    let date = date.unwrap_or(today);

    let snapshot = AnalyticsEngine::new(config).load_snapshot(&stress, date, today);
    let status = TrainingLoadCalculator::interpret_tsb(snapshot.tsb as f64);
    Ok(json!({
        "date": date,
        "today": today,
        "ctl": snapshot.ctl,
        "atl": snapshot.atl,
        "tsb": snapshot.tsb,
        "status": status,
        "series": {
            "ctl": snapshot.ctl_series,
            "atl": snapshot.atl_series,
            "tsb": snapshot.tsb_series,
        },
    }))
}

pub async fn classify(
    mut config: AnalyticsConfig,
    planned: &Path,
    completed: Option<&Path>,
    date: Option<NaiveDate>,
    today: Option<NaiveDate>,
    ftp: &FtpArgs,
) -> AppResult<Value> {
    config.ftp = with_overrides(config.ftp, ftp);
    let planned = load_planned_workout(planned).await?;
    let completed = match completed {
        Some(path) => Some(CompletedRecord::from(&load_completed_activity(path).await?)),
        None => None,
    };
    let date = date.unwrap_or(planned.date);
    let today = today.unwrap_or_else(local_today);

    let engine = AnalyticsEngine::new(config);
    let result = engine.classify(Some(&planned), completed.as_ref(), date, today);
    let comparison = engine.compare(&planned, completed.as_ref());
    Ok(json!({
        "planned_id": planned.id,
        "date": date,
        "compliance": result,
        "comparison": comparison,
    }))
}

pub async fn pair(pairs_path: &Path, planned: &str, completed: &str) -> AppResult<Value> {
    let repository = InMemoryPairRepository::with_pairs(load_pairs(pairs_path).await?);
    let change = repository.create(planned, completed).await?;

    let contents = serde_json::to_string_pretty(&repository.list().await?)?;
    fs::write(pairs_path, contents).await.map_err(|e| {
        AppError::storage(format!("Failed to write {}: {e}", pairs_path.display())).with_source(e)
    })?;

    Ok(serde_json::to_value(change)?)
}

pub async fn week(
    mut config: AnalyticsConfig,
    calendar: &Path,
    activities: &Path,
    pairs: Option<&Path>,
    start: NaiveDate,
    today: Option<NaiveDate>,
    ftp: &FtpArgs,
) -> AppResult<Value> {
    config.ftp = with_overrides(config.ftp, ftp);
    let items = load_calendar(calendar).await?;
    let activities = load_activities(activities).await?;
    let pairs = match pairs {
        Some(path) => load_pairs(path).await?,
        None => Vec::new(),
    };
    let today = today.unwrap_or_else(local_today);

    let workouts: Vec<PlannedWorkout> = items
        .iter()
        .filter_map(CalendarItem::as_planned_workout)
        .collect();
    let engine = AnalyticsEngine::new(config);
    let totals = engine.daily_totals(&activities, &workouts, &pairs);
    let days: Vec<NaiveDate> = start.iter_days().take(DAYS_PER_WEEK).collect();
    let rollup = engine.weekly_rollup(&days, &totals, today);

    let per_day: Vec<Value> = days
        .iter()
        .map(|day| {
            let day_totals = totals.get(*day).unwrap_or_default();
            json!({
                "date": day,
                "duration_min": day_totals.duration_min,
                "tss": day_totals.tss,
            })
        })
        .collect();

    let compliance: Vec<Value> = workouts
        .iter()
        .filter(|workout| days.contains(&workout.date))
        .map(|workout| {
            let completed = pairs
                .iter()
                .find(|pair| pair.planned_id == workout.id)
                .and_then(|pair| {
                    activities
                        .iter()
                        .find(|a| a.id == pair.completed_id && !a.hidden)
                })
                .map(CompletedRecord::from);
            json!({
                "planned_id": workout.id,
                "date": workout.date,
                "compliance": engine.classify(
                    Some(workout),
                    completed.as_ref(),
                    workout.date,
                    today,
                ),
                "comparison": engine.compare(workout, completed.as_ref()),
            })
        })
        .collect();

    info!(
        %start,
        workouts = compliance.len(),
        tss = rollup.tss,
        "Rolled up week"
    );
    Ok(json!({
        "start": start,
        "today": today,
        "duration": rollup.duration_label(),
        "rollup": rollup,
        "days": per_day,
        "compliance": compliance,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_sports() {
        let base = FtpSettings::default()
            .with(SportKey::Ride, 240.0)
            .with(SportKey::Strength, 100.0);
        let args = FtpArgs {
            ftp_strength: Some(2000.0),
            ..FtpArgs::default()
        };

        let merged = with_overrides(base, &args);
        assert_eq!(merged.get(SportKey::Ride), Some(240.0));
        assert_eq!(merged.get(SportKey::Strength), Some(600.0));
        assert_eq!(merged.get(SportKey::Run), None);
    }
}
