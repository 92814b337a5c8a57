// ABOUTME: Training load model producing CTL, ATL, and TSB series from daily stress totals
// ABOUTME: Evaluates a fixed trailing window ending at any query date, zeroing days past the cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::constants::load::{ATL_TAU_DAYS, CTL_TAU_DAYS, WINDOW_DAYS};

use crate::config::LoadModelConfig;

/// Total stress per local calendar date
pub type DailyStressMap = BTreeMap<NaiveDate, f64>;

/// Load state at a query date plus the series leading up to it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadSnapshot {
    /// Chronic Training Load ("fitness") on the query date, rounded
    pub ctl: i64,
    /// Acute Training Load ("fatigue") on the query date, rounded
    pub atl: i64,
    /// Training Stress Balance ("form") on the query date, rounded
    pub tsb: i64,
    /// CTL for every day of the window, oldest first
    pub ctl_series: Vec<f64>,
    /// ATL for every day of the window, oldest first
    pub atl_series: Vec<f64>,
    /// TSB for every day of the window, oldest first
    pub tsb_series: Vec<f64>,
}

/// Calculator for the performance-management model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingLoadCalculator {
    ctl_window_days: u32,
    atl_window_days: u32,
    window_days: u32,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLoadCalculator {
    /// Create a new training load calculator with standard windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ctl_window_days: CTL_TAU_DAYS,
            atl_window_days: ATL_TAU_DAYS,
            window_days: WINDOW_DAYS,
        }
    }

    /// Create a training load calculator with custom time constants
    #[must_use]
    pub const fn with_windows(ctl_days: u32, atl_days: u32) -> Self {
        Self {
            ctl_window_days: ctl_days,
            atl_window_days: atl_days,
            window_days: WINDOW_DAYS,
        }
    }

    /// Create a calculator from validated configuration
    #[must_use]
    pub const fn from_config(config: &LoadModelConfig) -> Self {
        Self {
            ctl_window_days: config.ctl_days,
            atl_window_days: config.atl_days,
            window_days: config.window_days,
        }
    }

    /// Number of days each snapshot covers
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Load state for `query_date`
    ///
    /// The window ends at `query_date` inclusive. Days strictly after `cutoff`
    /// count as zero stress whatever the map holds, so scheduled workouts do
    /// not raise projected load.
    ///
    /// Per day, form is taken from the previous day before updating:
    ///
    /// ```text
    /// tsb[i] = ctl[i-1] - atl[i-1]
    /// ctl[i] = ctl[i-1] + (tss[i] - ctl[i-1]) / ctl_days
    /// atl[i] = atl[i-1] + (tss[i] - atl[i-1]) / atl_days
    /// ```
    #[must_use]
    pub fn calculate(
        &self,
        stress: &DailyStressMap,
        query_date: NaiveDate,
        cutoff: NaiveDate,
    ) -> LoadSnapshot {
        let span = u64::from(self.window_days.saturating_sub(1));
        let first_day = query_date
            .checked_sub_days(Days::new(span))
            .unwrap_or(NaiveDate::MIN);
        let ctl_days = f64::from(self.ctl_window_days.max(1));
        let atl_days = f64::from(self.atl_window_days.max(1));

        let capacity = self.window_days as usize;
        let mut ctl_series = Vec::with_capacity(capacity);
        let mut atl_series = Vec::with_capacity(capacity);
        let mut tsb_series = Vec::with_capacity(capacity);
        let mut ctl = 0.0;
        let mut atl = 0.0;

        for day in first_day.iter_days().take_while(|d| *d <= query_date) {
            let tss = if day > cutoff {
                0.0
            } else {
                stress.get(&day).copied().unwrap_or(0.0)
            };
            let tsb = ctl - atl;
            ctl += (tss - ctl) / ctl_days;
            atl += (tss - atl) / atl_days;

            ctl_series.push(ctl);
            atl_series.push(atl);
            tsb_series.push(tsb);
        }

        let snapshot = LoadSnapshot {
            ctl: round_load(ctl),
            atl: round_load(atl),
            tsb: round_load(tsb_series.last().copied().unwrap_or_default()),
            ctl_series,
            atl_series,
            tsb_series,
        };
        debug!(
            %query_date,
            %cutoff,
            ctl = snapshot.ctl,
            atl = snapshot.atl,
            tsb = snapshot.tsb,
            "Calculated training load"
        );
        snapshot
    }

    /// Interpret TSB value and provide status
    #[must_use]
    pub fn interpret_tsb(tsb: f64) -> TrainingStatus {
        if tsb < -10.0 {
            TrainingStatus::Overreaching
        } else if tsb < 0.0 {
            TrainingStatus::Productive
        } else if tsb <= 10.0 {
            TrainingStatus::Fresh
        } else {
            TrainingStatus::Detraining
        }
    }
}

/// Training status based on TSB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    /// TSB < -10: Overreaching, high fatigue
    Overreaching,
    /// TSB -10 to 0: Productive training zone
    Productive,
    /// TSB 0 to +10: Fresh, ready to perform
    Fresh,
    /// TSB > +10: Risk of detraining
    Detraining,
}

/// Round to the nearest integer with halves going up, so `-2.5` becomes `-2`
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_load(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
