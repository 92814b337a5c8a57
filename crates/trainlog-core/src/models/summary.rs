// ABOUTME: Session summary value object and the device-reported session totals that feed it
// ABOUTME: Summaries are derived wholesale from samples and never patched in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::sample::Lap;
use super::sport::SportKey;

/// Session-level totals reported by the device alongside the sample stream
///
/// Positive values take precedence over figures recomputed from samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTotals {
    /// Sport label as recorded by the device
    #[serde(default)]
    pub sport: Option<String>,
    /// Timer time in seconds (falls back to elapsed time upstream)
    #[serde(default)]
    pub timer_s: Option<f64>,
    /// Total distance in meters
    #[serde(default)]
    pub distance_m: Option<f64>,
    /// Total ascent in meters
    #[serde(default)]
    pub ascent_m: Option<f64>,
    /// Average heart rate
    #[serde(default)]
    pub avg_hr: Option<f64>,
    /// Maximum heart rate
    #[serde(default)]
    pub max_hr: Option<f64>,
    /// Average speed in m/s
    #[serde(default)]
    pub avg_speed: Option<f64>,
    /// Maximum speed in m/s
    #[serde(default)]
    pub max_speed: Option<f64>,
    /// Average power in watts
    #[serde(default)]
    pub avg_power: Option<f64>,
    /// Maximum power in watts
    #[serde(default)]
    pub max_power: Option<f64>,
    /// Average cadence
    #[serde(default)]
    pub avg_cadence: Option<f64>,
    /// Maximum cadence
    #[serde(default)]
    pub max_cadence: Option<f64>,
}

/// Per-session statistics derived from a sample stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// First sample time
    pub start: DateTime<Utc>,
    /// Last sample time
    pub end: DateTime<Utc>,
    /// Duration in seconds (at least 1)
    pub duration_s: f64,
    /// Distance in meters (never negative)
    pub distance_m: f64,
    /// Average heart rate
    pub avg_hr: Option<f64>,
    /// Minimum heart rate
    pub min_hr: Option<f64>,
    /// Maximum heart rate
    pub max_hr: Option<f64>,
    /// Average power
    pub avg_power: Option<f64>,
    /// Minimum power
    pub min_power: Option<f64>,
    /// Maximum power
    pub max_power: Option<f64>,
    /// Average cadence
    pub avg_cadence: Option<f64>,
    /// Minimum cadence
    pub min_cadence: Option<f64>,
    /// Maximum cadence
    pub max_cadence: Option<f64>,
    /// Average speed
    pub avg_speed: Option<f64>,
    /// Maximum speed
    pub max_speed: Option<f64>,
    /// Average altitude
    pub avg_altitude: Option<f64>,
    /// Minimum altitude
    pub min_altitude: Option<f64>,
    /// Maximum altitude
    pub max_altitude: Option<f64>,
    /// Total climbing in meters
    pub elevation_gain_m: Option<f64>,
    /// Sport label
    pub sport: String,
    /// FTP class resolved from the sport label
    pub sport_key: SportKey,
    /// Sanitized FTP used for stress, if one was configured for `sport_key`
    pub ftp: Option<f64>,
    /// Normalized power
    pub normalized_power: Option<f64>,
    /// Intensity factor
    #[serde(rename = "if")]
    pub intensity_factor: Option<f64>,
    /// Training stress score
    pub tss: Option<f64>,
    /// Supplied laps, or one synthesized lap covering the session
    pub laps: Vec<Lap>,
}

impl SessionSummary {
    /// Calendar date of the session start, in UTC
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}
