// ABOUTME: Training Stress Score algorithm selection for session stress calculation
// ABOUTME: Normalized power (time-windowed) is the default; average power is kept for legacy data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use trainlog_core::constants::power::NP_WINDOW_SECONDS;
use trainlog_core::errors::AppError;

/// TSS calculation algorithm selection
///
/// - `NormalizedPower`: rolling time-window NP, the reference formula
/// - `AvgPower`: `duration_hours x (avg_power/FTP)² x 100`, matches summaries
///   produced before NP was available
///
/// # Scientific References
///
/// - Coggan, A. & Allen, H. (2010). "Training and Racing with a Power Meter." `VeloPress`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TssAlgorithm {
    /// Normalized Power based TSS
    ///
    /// `TSS = duration_s x NP x IF / (FTP x 3600) x 100`, `IF = NP / FTP`
    NormalizedPower {
        /// Rolling window size in seconds (standard: 30)
        window_seconds: u32,
    },

    /// Average power based TSS
    ///
    /// Underestimates variable efforts; kept so historical values can be
    /// reproduced.
    AvgPower,
}

impl Default for TssAlgorithm {
    fn default() -> Self {
        Self::NormalizedPower {
            window_seconds: NP_WINDOW_SECONDS,
        }
    }
}

impl TssAlgorithm {
    /// Power figure the intensity factor is derived from
    ///
    /// Returns `None` when the figure this algorithm needs is absent or not
    /// positive.
    #[must_use]
    pub fn reference_power(
        &self,
        normalized_power: Option<f64>,
        avg_power: Option<f64>,
    ) -> Option<f64> {
        let power = match self {
            Self::NormalizedPower { .. } => normalized_power,
            Self::AvgPower => avg_power,
        };
        power.filter(|watts| *watts > 0.0)
    }

    /// Rolling window used for normalized power
    #[must_use]
    pub const fn window_seconds(&self) -> u32 {
        match self {
            Self::NormalizedPower { window_seconds } => *window_seconds,
            Self::AvgPower => NP_WINDOW_SECONDS,
        }
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NormalizedPower { .. } => "normalized_power",
            Self::AvgPower => "avg_power",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NormalizedPower { .. } => {
                "Normalized Power based TSS (time-windowed rolling average)"
            }
            Self::AvgPower => "Average power based TSS (legacy summaries)",
        }
    }
}

impl FromStr for TssAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normalized_power" | "np" => Ok(Self::default()),
            "avg_power" | "average_power" => Ok(Self::AvgPower),
            other => Err(AppError::invalid_input(format!(
                "Unknown TSS algorithm: '{other}'. Valid options: normalized_power, avg_power"
            ))),
        }
    }
}
