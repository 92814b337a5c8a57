// ABOUTME: Builds per-day duration and stress totals from completed activities and manual entries
// ABOUTME: Produces the daily stress map the training load model consumes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Daily totals
//!
//! A day's stress is the effective stress of every visible completed
//! activity that started on that local date, plus the manually entered
//! completion of any planned workout on that date that has no pair. Paired
//! workouts are skipped because their activity is already counted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use trainlog_core::constants::units::SECONDS_PER_MINUTE;
use trainlog_core::models::{CompletedActivity, CompletedRecord, Pair, PlannedWorkout};
use trainlog_intelligence::estimation::completed_stress;
use trainlog_intelligence::{DailyStressMap, FtpSettings};

/// Totals for one calendar day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Completed minutes
    pub duration_min: f64,
    /// Effective stress
    pub tss: f64,
}

impl DayTotals {
    fn add(&mut self, record: &CompletedRecord, ftp: &FtpSettings) {
        self.duration_min += record.moving_time_s.max(0.0) / SECONDS_PER_MINUTE;
        self.tss += completed_stress(record, ftp);
    }
}

/// Per-day totals keyed by local date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    days: BTreeMap<NaiveDate, DayTotals>,
}

impl DailyTotals {
    /// Aggregate activities and unpaired manual completions
    #[must_use]
    pub fn build(
        activities: &[CompletedActivity],
        workouts: &[PlannedWorkout],
        pairs: &[Pair],
        ftp: &FtpSettings,
    ) -> Self {
        let mut days: BTreeMap<NaiveDate, DayTotals> = BTreeMap::new();

        let visible = activities.iter().filter(|a| !a.hidden);
        for activity in visible {
            days.entry(activity.date())
                .or_default()
                .add(&CompletedRecord::from(activity), ftp);
        }

        let paired: HashSet<&str> = pairs.iter().map(|p| p.planned_id.as_str()).collect();
        for workout in workouts.iter().filter(|w| !paired.contains(w.id.as_str())) {
            if let Some(record) = workout.manual_completion_record() {
                days.entry(workout.date).or_default().add(&record, ftp);
            }
        }

        debug!(days = days.len(), "Built daily totals");
        Self { days }
    }

    /// Totals for one date
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<DayTotals> {
        self.days.get(&date).copied()
    }

    /// Date → stress map for the load model
    #[must_use]
    pub fn stress_map(&self) -> DailyStressMap {
        self.days.iter().map(|(date, totals)| (*date, totals.tss)).collect()
    }

    /// Number of days with any completed work
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when nothing was completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Daily stress map straight from the collections
#[must_use]
pub fn build_stress_map(
    activities: &[CompletedActivity],
    workouts: &[PlannedWorkout],
    pairs: &[Pair],
    ftp: &FtpSettings,
) -> DailyStressMap {
    DailyTotals::build(activities, workouts, pairs, ftp).stress_map()
}
