// ABOUTME: Integration tests for daily totals, the derived stress map, and weekly rollups
// ABOUTME: Covers hidden activities, paired versus unpaired manual entries, and duration labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use trainlog::stress_map::{build_stress_map, DailyTotals};
use trainlog::weekly::{weekly_rollup, WeeklyRollup};
use trainlog_core::models::{CompletedActivity, Pair, PlannedWorkout};
use trainlog_intelligence::{FtpSettings, TrainingLoadCalculator};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
}

fn activity(id: &str, day: u32, minutes: f64, tss: f64) -> CompletedActivity {
    let start = date(day).and_hms_opt(7, 0, 0).unwrap();
    let mut activity = CompletedActivity::new(id, start, "Run", minutes * 60.0);
    activity.tss_override = Some(tss);
    activity
}

fn workout_with_manual(id: &str, day: u32, minutes: f64, tss: f64) -> PlannedWorkout {
    let mut workout = PlannedWorkout::new(id, date(day), "Run");
    workout.details.duration_min = minutes;
    workout.details.completed.duration_min = minutes;
    workout.details.completed.tss = tss;
    workout
}

#[test]
fn test_hidden_activities_are_excluded() {
    let mut hidden = activity("run-2", 1, 30.0, 40.0);
    hidden.hidden = true;
    let activities = vec![activity("run-1", 1, 45.0, 50.0), hidden];

    let totals = DailyTotals::build(&activities, &[], &[], &FtpSettings::default());
    let day = totals.get(date(1)).unwrap();
    assert!((day.duration_min - 45.0).abs() < 1e-9);
    assert!((day.tss - 50.0).abs() < 1e-9);
    assert_eq!(totals.len(), 1);
}

#[test]
fn test_manual_completion_only_counts_when_unpaired() {
    let activities = vec![activity("run-1", 2, 60.0, 70.0)];
    let workouts = vec![
        workout_with_manual("plan-paired", 2, 60.0, 65.0),
        workout_with_manual("plan-solo", 3, 40.0, 30.0),
    ];
    let pairs = vec![Pair::new("plan-paired", "run-1")];

    let stress = build_stress_map(&activities, &workouts, &pairs, &FtpSettings::default());
    assert_eq!(stress.len(), 2);
    assert!((stress[&date(2)] - 70.0).abs() < 1e-9);
    assert!((stress[&date(3)] - 30.0).abs() < 1e-9);
}

#[test]
fn test_same_day_work_is_summed() {
    let activities = vec![
        activity("am", 4, 30.0, 25.0),
        activity("pm", 4, 50.0, 45.0),
    ];
    let workouts = vec![workout_with_manual("plan-extra", 4, 20.0, 10.0)];

    let totals = DailyTotals::build(&activities, &workouts, &[], &FtpSettings::default());
    let day = totals.get(date(4)).unwrap();
    assert!((day.duration_min - 100.0).abs() < 1e-9);
    assert!((day.tss - 80.0).abs() < 1e-9);
}

#[test]
fn test_empty_manual_completion_adds_nothing() {
    let workouts = vec![PlannedWorkout::new("plan-empty", date(5), "Ride")];
    let totals = DailyTotals::build(&[], &workouts, &[], &FtpSettings::default());
    assert!(totals.is_empty());
    assert!(totals.stress_map().is_empty());
}

#[test]
fn test_weekly_rollup_sums_the_row() {
    let activities: Vec<CompletedActivity> = (1..=7)
        .map(|day| activity(&format!("run-{day}"), day, 45.0, 60.0))
        .collect();
    let totals = DailyTotals::build(&activities, &[], &[], &FtpSettings::default());
    let days: Vec<NaiveDate> = (1..=7).map(date).collect();
    let calculator = TrainingLoadCalculator::new();

    let rollup = weekly_rollup(&days, &totals, &calculator, date(30));
    assert!((rollup.duration_min - 315.0).abs() < 1e-9);
    assert_eq!(rollup.tss, 420);
    assert_eq!(rollup.duration_label(), "5:15");

    let load = calculator.calculate(&totals.stress_map(), date(7), date(30));
    assert_eq!((rollup.ctl, rollup.atl, rollup.tsb), (load.ctl, load.atl, load.tsb));
    assert!(rollup.atl > rollup.ctl);
}

#[test]
fn test_weekly_rollup_without_days() {
    let totals = DailyTotals::build(
        &[activity("run-1", 1, 30.0, 20.0)],
        &[],
        &[],
        &FtpSettings::default(),
    );
    let rollup = weekly_rollup(&[], &totals, &TrainingLoadCalculator::new(), date(30));
    assert_eq!(rollup, WeeklyRollup::default());
    assert_eq!(rollup.duration_label(), "0:00");
}
