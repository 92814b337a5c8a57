// ABOUTME: Weekly rollup of completed minutes, stress, and end-of-week training load
// ABOUTME: Works on any run of date keys, typically the seven days of a calendar row
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trainlog_intelligence::training_load::round_load;
use trainlog_intelligence::TrainingLoadCalculator;

use crate::stress_map::DailyTotals;

/// Summary of a run of days
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRollup {
    /// Completed minutes
    pub duration_min: f64,
    /// Total stress, rounded
    pub tss: i64,
    /// CTL at the last day
    pub ctl: i64,
    /// ATL at the last day
    pub atl: i64,
    /// TSB at the last day
    pub tsb: i64,
}

impl WeeklyRollup {
    /// Total duration as `H:MM`
    #[must_use]
    pub fn duration_label(&self) -> String {
        let total = self.duration_min.max(0.0).round() as i64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

/// Roll up `days`; load figures come from the last day
///
/// With no days the load figures are zero.
#[must_use]
pub fn weekly_rollup(
    days: &[NaiveDate],
    totals: &DailyTotals,
    calculator: &TrainingLoadCalculator,
    today: NaiveDate,
) -> WeeklyRollup {
    let (duration_min, tss) = days
        .iter()
        .filter_map(|day| totals.get(*day))
        .fold((0.0, 0.0), |(minutes, stress), day| {
            (minutes + day.duration_min, stress + day.tss)
        });

    let Some(week_end) = days.last() else {
        return WeeklyRollup {
            duration_min,
            tss: round_load(tss),
            ..WeeklyRollup::default()
        };
    };

    let load = calculator.calculate(&totals.stress_map(), *week_end, today);
    WeeklyRollup {
        duration_min,
        tss: round_load(tss),
        ctl: load.ctl,
        atl: load.atl,
        tsb: load.tsb,
    }
}
