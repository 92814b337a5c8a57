// ABOUTME: Integration tests for the JSON input loaders
// ABOUTME: Reads sessions, stress maps, workouts, and activities from temporary files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;
use trainlog::errors::ErrorCode;
use trainlog::input::{
    load_calendar, load_completed_activity, load_pairs, load_planned_workout, load_session_input,
    load_stress_map,
};
use trainlog_core::models::{ItemBody, Pair};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_session_input_with_optional_files() {
    let dir = TempDir::new().unwrap();
    let samples = write(
        &dir,
        "samples.json",
        r#"[
            {"timestamp": "2025-05-04T06:30:00Z", "power": 210.0, "heart_rate": 128.0},
            {"timestamp": "2025-05-04T06:30:30Z", "power": 230.0},
            {"power": 999.0}
        ]"#,
    );
    let totals = write(&dir, "totals.json", r#"{"sport": "VirtualRide", "timer_s": 30.0}"#);

    let input = load_session_input(&samples, None, Some(&totals)).await.unwrap();
    assert_eq!(input.samples.len(), 3);
    assert!(input.laps.is_empty());
    assert_eq!(input.totals.sport.as_deref(), Some("VirtualRide"));
    assert_eq!(input.totals.timer_s, Some(30.0));
}

#[tokio::test]
async fn test_stress_map_sums_duplicate_days() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "stress.json",
        r#"{"2025-03-01": 40.0, " 2025-03-01": 15.0, "2025-03-02": 80.5}"#,
    );

    let stress = load_stress_map(&path).await.unwrap();
    let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let second = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
    assert_eq!(stress.len(), 2);
    assert!((stress[&first] - 55.0).abs() < f64::EPSILON);
    assert!((stress[&second] - 80.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_stress_map_rejects_bad_date_keys() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "stress.json", r#"{"03/01/2025": 40.0}"#);
    let error = load_stress_map(&path).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_planned_workout_is_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "plan.json",
        r#"{
            "id": "plan-1",
            "date": "2025-04-08",
            "workout_type": "  ",
            "duration_min": -10,
            "intensity": 14,
            "completed_duration_min": 42.5,
            "rpe": 12
        }"#,
    );

    let workout = load_planned_workout(&path).await.unwrap();
    assert_eq!(workout.id, "plan-1");
    assert_eq!(workout.date, NaiveDate::from_ymd_opt(2025, 4, 8).unwrap());
    assert_eq!(workout.details.workout_type, "Other");
    assert!(workout.details.duration_min.abs() < f64::EPSILON);
    assert!((workout.details.intensity - 10.0).abs() < f64::EPSILON);
    assert_eq!(workout.details.rpe, 10);
    assert!((workout.details.completed.duration_min - 42.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_completed_activity_fields() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "activity.json",
        r#"{
            "id": "ride-9",
            "start": "2025-04-08T23:30:00",
            "type": "Ride",
            "moving_time_s": 3600,
            "avg_power": 200
        }"#,
    );

    let activity = load_completed_activity(&path).await.unwrap();
    assert_eq!(activity.id, "ride-9");
    assert_eq!(activity.date(), NaiveDate::from_ymd_opt(2025, 4, 8).unwrap());
    assert_eq!(activity.avg_power, Some(200.0));
    assert!(!activity.hidden);
}

#[tokio::test]
async fn test_missing_and_malformed_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let error = load_completed_activity(&missing).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);

    let broken = write(&dir, "broken.json", "{ not json");
    let error = load_planned_workout(&broken).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("broken.json"));
}

#[tokio::test]
async fn test_calendar_items_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "calendar.json",
        r#"[
            {
                "id": "w1",
                "date": "2025-03-03",
                "title": "Tempo",
                "created_at": "2025-03-01T08:00:00Z",
                "kind": "workout",
                "workout_type": "Run",
                "duration_min": 45,
                "feel": 9
            },
            {
                "id": "e1",
                "date": "2025-03-09",
                "created_at": "2025-03-01T08:00:00Z",
                "kind": "event",
                "event_type": "Half Marathon"
            }
        ]"#,
    );

    let items = load_calendar(&path).await.unwrap();
    assert_eq!(items.len(), 2);
    let workout = items[0].as_planned_workout().unwrap();
    assert_eq!(workout.details.feel, 5);
    assert!((workout.details.duration_min - 45.0).abs() < f64::EPSILON);
    assert!(items[1].as_planned_workout().is_none());
    assert_eq!(items[1].body.kind(), "event");
    assert!(matches!(
        &items[1].body,
        ItemBody::Event { event_type } if event_type == "Half Marathon"
    ));
}

#[tokio::test]
async fn test_pairs_file_is_optional() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("pairs.json");
    assert!(load_pairs(&missing).await.unwrap().is_empty());

    let stored = vec![Pair::new("plan-1", "ride-1")];
    let path = write(&dir, "pairs.json", &serde_json::to_string(&stored).unwrap());
    assert_eq!(load_pairs(&path).await.unwrap(), stored);
}

#[tokio::test]
async fn test_pairs_path_that_cannot_be_checked_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "calendar.json", "[]");
    let nested = file.join("pairs.json");

    let error = load_pairs(&nested).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.message.contains("pairs.json"));
}
