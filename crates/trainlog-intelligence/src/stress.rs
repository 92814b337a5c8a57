// ABOUTME: Normalized power, intensity factor, and training stress score from a power stream
// ABOUTME: Absent or non-positive inputs propagate as absent outputs rather than errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stress Calculator
//!
//! Normalized power uses a trailing window measured in elapsed seconds, so
//! recordings with gaps or irregular sample rates are averaged over the same
//! span of time as 1 Hz recordings.
//!
//! ```text
//! rolling_i = mean(power_j for t_i - window < t_j <= t_i, power_j > 0)
//! NP        = (mean(rolling_i^4))^(1/4)
//! IF        = NP / FTP
//! TSS       = duration_s x NP x IF / (FTP x 3600) x 100
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::constants::power::TSS_PER_THRESHOLD_HOUR;
use trainlog_core::constants::units::SECONDS_PER_HOUR;
use trainlog_core::models::Sample;

use crate::algorithms::TssAlgorithm;

/// Streaming normalized-power accumulator over a time-based window
#[derive(Debug, Clone)]
pub struct NormalizedPowerCalculator {
    window_seconds: f64,
    /// (elapsed seconds, watts) currently inside the window
    window: VecDeque<(f64, f64)>,
    window_sum: f64,
    /// Sum of rolling-average^4 values
    sum_power4: f64,
    count: u64,
}

impl NormalizedPowerCalculator {
    /// Calculator with the given trailing window
    #[must_use]
    pub fn new(window_seconds: u32) -> Self {
        Self {
            window_seconds: f64::from(window_seconds),
            window: VecDeque::new(),
            window_sum: 0.0,
            sum_power4: 0.0,
            count: 0,
        }
    }

    /// Feed one power reading at `elapsed_s` seconds into the session
    ///
    /// Non-positive or non-finite readings are ignored entirely.
    pub fn push(&mut self, elapsed_s: f64, watts: f64) {
        if !watts.is_finite() || watts <= 0.0 {
            return;
        }

        self.window.push_back((elapsed_s, watts));
        self.window_sum += watts;

        let cutoff = elapsed_s - self.window_seconds;
        while let Some(&(t, p)) = self.window.front() {
            if t > cutoff {
                break;
            }
            self.window.pop_front();
            self.window_sum -= p;
        }

        #[allow(clippy::cast_precision_loss)]
        let rolling = self.window_sum / self.window.len() as f64;
        self.sum_power4 += rolling.powi(4);
        self.count += 1;
    }

    /// Normalized power so far, `None` before any positive reading
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normalized_power(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        let mean_power4 = self.sum_power4 / self.count as f64;
        Some(mean_power4.powf(0.25))
    }
}

/// Seconds between two timestamps, with millisecond resolution
#[allow(clippy::cast_precision_loss)]
pub(crate) fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

/// Normalized power of a timestamped sample stream
///
/// Samples without a timestamp or without positive power are skipped.
#[must_use]
pub fn normalized_power(samples: &[Sample], window_seconds: u32) -> Option<f64> {
    let mut calculator = NormalizedPowerCalculator::new(window_seconds);
    let mut origin = None;

    for sample in samples {
        let (Some(timestamp), Some(watts)) = (sample.timestamp, sample.power) else {
            continue;
        };
        let start = *origin.get_or_insert(timestamp);
        calculator.push(elapsed_seconds(start, timestamp), watts);
    }

    calculator.normalized_power()
}

/// `power / ftp` when both are positive
#[must_use]
pub fn intensity_factor(power: Option<f64>, ftp: Option<f64>) -> Option<f64> {
    match (power, ftp) {
        (Some(p), Some(f)) if p > 0.0 && f > 0.0 => Some(p / f),
        _ => None,
    }
}

/// `duration_s x power x IF / (FTP x 3600) x 100` when every input is positive
#[must_use]
pub fn training_stress_score(
    duration_s: f64,
    power: Option<f64>,
    intensity: Option<f64>,
    ftp: Option<f64>,
) -> Option<f64> {
    match (power, intensity, ftp) {
        (Some(p), Some(i), Some(f)) if duration_s > 0.0 && p > 0.0 && i > 0.0 && f > 0.0 => {
            Some(duration_s * p * i / (f * SECONDS_PER_HOUR) * TSS_PER_THRESHOLD_HOUR)
        }
        _ => None,
    }
}

/// Stress figures for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StressMetrics {
    /// Normalized power
    pub normalized_power: Option<f64>,
    /// Intensity factor
    #[serde(rename = "if")]
    pub intensity_factor: Option<f64>,
    /// Training stress score
    pub tss: Option<f64>,
}

/// Computes [`StressMetrics`] with a configured TSS algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct StressCalculator {
    algorithm: TssAlgorithm,
}

impl StressCalculator {
    /// Calculator using `algorithm`
    #[must_use]
    pub const fn new(algorithm: TssAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Configured algorithm
    #[must_use]
    pub const fn algorithm(&self) -> TssAlgorithm {
        self.algorithm
    }

    /// Stress for a session
    ///
    /// `avg_power` is only consulted by [`TssAlgorithm::AvgPower`]. Normalized
    /// power is always reported when the stream has positive power.
    #[must_use]
    pub fn calculate(
        &self,
        samples: &[Sample],
        duration_s: f64,
        avg_power: Option<f64>,
        ftp: Option<f64>,
    ) -> StressMetrics {
        let np = normalized_power(samples, self.algorithm.window_seconds());
        let reference = self.algorithm.reference_power(np, avg_power);
        let intensity = intensity_factor(reference, ftp);
        let tss = training_stress_score(duration_s, reference, intensity, ftp);

        debug!(
            algorithm = self.algorithm.name(),
            normalized_power = ?np,
            ftp = ?ftp,
            intensity_factor = ?intensity,
            tss = ?tss,
            "Calculated session stress"
        );

        StressMetrics {
            normalized_power: np,
            intensity_factor: intensity,
            tss,
        }
    }
}
