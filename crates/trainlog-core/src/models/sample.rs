// ABOUTME: Raw time-series samples and lap markers produced by a device-file decoder
// ABOUTME: Every channel is optional; only the timestamp is required for a sample to count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of the decoded sample stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Record time; samples without one are dropped before processing
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Heart rate in beats per minute
    #[serde(default)]
    pub heart_rate: Option<f64>,
    /// Power in watts
    #[serde(default)]
    pub power: Option<f64>,
    /// Cadence in rpm (or spm)
    #[serde(default)]
    pub cadence: Option<f64>,
    /// Speed in meters per second
    #[serde(default)]
    pub speed: Option<f64>,
    /// Cumulative distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Altitude in meters
    #[serde(default)]
    pub altitude: Option<f64>,
}

impl Sample {
    /// Sample with only a timestamp set
    #[must_use]
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Self::default()
        }
    }

    /// Set the power channel
    #[must_use]
    pub const fn with_power(mut self, watts: f64) -> Self {
        self.power = Some(watts);
        self
    }

    /// Set the heart-rate channel
    #[must_use]
    pub const fn with_heart_rate(mut self, bpm: f64) -> Self {
        self.heart_rate = Some(bpm);
        self
    }

    /// Set the cadence channel
    #[must_use]
    pub const fn with_cadence(mut self, rpm: f64) -> Self {
        self.cadence = Some(rpm);
        self
    }

    /// Set the speed channel
    #[must_use]
    pub const fn with_speed(mut self, mps: f64) -> Self {
        self.speed = Some(mps);
        self
    }

    /// Set the cumulative distance channel
    #[must_use]
    pub const fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Some(meters);
        self
    }

    /// Set the altitude channel
    #[must_use]
    pub const fn with_altitude(mut self, meters: f64) -> Self {
        self.altitude = Some(meters);
        self
    }
}

/// A lap within a session, either device-recorded or synthesized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    /// Display name ("Lap 1", "Lap 2", ...)
    pub name: String,
    /// Lap start
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Lap end
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Timer duration in seconds
    #[serde(default)]
    pub duration_s: Option<f64>,
    /// Lap distance in meters
    #[serde(default)]
    pub distance_m: Option<f64>,
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
