// ABOUTME: Plan-versus-actual compliance classification for calendar workouts
// ABOUTME: Picks the duration, distance, or stress basis closest to plan and bands its percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use trainlog_core::constants::compliance::{
    MODERATE_HIGH, MODERATE_LOW, ON_TARGET_HIGH, ON_TARGET_LOW,
};
use trainlog_core::constants::units::{
    METERS_PER_KILOMETER, PERCENTAGE_MULTIPLIER, SECONDS_PER_MINUTE,
};
use trainlog_core::models::{CompletedRecord, PlannedWorkout};

use crate::config::FtpSettings;
use crate::estimation::{completed_stress, planned_stress};

/// How a day's workout compares to its plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceBand {
    /// Selected basis within 80-120% of plan
    OnTarget,
    /// Selected basis within 50-150% of plan but outside the on-target band
    ModerateDeviation,
    /// Selected basis below 50% or above 150% of plan
    LargeDeviation,
    /// Completed without a usable plan
    Unplanned,
    /// Planned for a past date and not completed
    Missed,
    /// Planned for today or later and not yet completed
    Pending,
}

impl ComplianceBand {
    /// Snake-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnTarget => "on_target",
            Self::ModerateDeviation => "moderate_deviation",
            Self::LargeDeviation => "large_deviation",
            Self::Unplanned => "unplanned",
            Self::Missed => "missed",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for ComplianceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a deviation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrow {
    /// More than planned
    Over,
    /// Less than planned
    Under,
    /// On target or not applicable
    #[default]
    None,
}

/// Metric a compliance percentage was computed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// Minutes
    Duration,
    /// Kilometers
    Distance,
    /// Training stress
    Stress,
}

/// Classification output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Band
    pub band: ComplianceBand,
    /// Deviation direction
    pub arrow: Arrow,
    /// Basis the band was derived from, when both sides were present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis: Option<Basis>,
    /// Completed as a percentage of planned on `basis`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
}

impl ComplianceResult {
    const fn status(band: ComplianceBand) -> Self {
        Self {
            band,
            arrow: Arrow::None,
            basis: None,
            pct: None,
        }
    }

    /// Band a percentage of plan measured on `basis`
    #[must_use]
    pub fn from_pct(basis: Basis, pct: f64) -> Self {
        let band = if (ON_TARGET_LOW..=ON_TARGET_HIGH).contains(&pct) {
            ComplianceBand::OnTarget
        } else if (MODERATE_LOW..=MODERATE_HIGH).contains(&pct) {
            ComplianceBand::ModerateDeviation
        } else {
            ComplianceBand::LargeDeviation
        };
        let arrow = if pct > ON_TARGET_HIGH {
            Arrow::Over
        } else if pct < ON_TARGET_LOW {
            Arrow::Under
        } else {
            Arrow::None
        };
        Self {
            band,
            arrow,
            basis: Some(basis),
            pct: Some(pct),
        }
    }
}

/// Classify one calendar day's plan against what was done
///
/// `date` is the planned date; `today` separates missed from pending
/// workouts. The stress basis compares effective stresses, so workouts with
/// no explicit stress are compared on their estimates. Returns `None` when
/// there is neither a plan nor a completion.
#[must_use]
pub fn classify(
    planned: Option<&PlannedWorkout>,
    completed: Option<&CompletedRecord>,
    date: NaiveDate,
    today: NaiveDate,
    ftp: &FtpSettings,
) -> Option<ComplianceResult> {
    let result = match (planned, completed) {
        (None, None) => return None,
        (None, Some(_)) => ComplianceResult::status(ComplianceBand::Unplanned),
        (Some(_), None) if date < today => ComplianceResult::status(ComplianceBand::Missed),
        (Some(_), None) => ComplianceResult::status(ComplianceBand::Pending),
        (Some(plan), Some(done)) => compare(plan, done, ftp),
    };
    debug!(
        %date,
        band = %result.band,
        basis = ?result.basis,
        pct = ?result.pct,
        "Classified compliance"
    );
    Some(result)
}

fn compare(plan: &PlannedWorkout, done: &CompletedRecord, ftp: &FtpSettings) -> ComplianceResult {
    let details = &plan.details;
    let bases = [
        (
            Basis::Duration,
            details.duration_min,
            done.moving_time_s / SECONDS_PER_MINUTE,
        ),
        (
            Basis::Distance,
            details.distance_km,
            done.distance_m / METERS_PER_KILOMETER,
        ),
        (
            Basis::Stress,
            planned_stress(plan),
            completed_stress(done, ftp),
        ),
    ];

    let mut best: Option<(Basis, f64)> = None;
    for (basis, planned_value, completed_value) in bases {
        if !(planned_value.is_finite() && planned_value > 0.0) {
            continue;
        }
        let pct = completed_value / planned_value * PERCENTAGE_MULTIPLIER;
        let closer = match best {
            None => true,
            Some((_, current)) => {
                (pct - PERCENTAGE_MULTIPLIER).abs() < (current - PERCENTAGE_MULTIPLIER).abs()
            }
        };
        if closer {
            best = Some((basis, pct));
        }
    }

    best.map_or_else(
        || ComplianceResult::status(ComplianceBand::Unplanned),
        |(basis, pct)| ComplianceResult::from_pct(basis, pct),
    )
}
