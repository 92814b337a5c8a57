// ABOUTME: Completed activity model from imports or an external feed, plus the compact
// ABOUTME: completed-record view the stress and compliance calculations consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::sport::SportKey;

/// An activity the athlete actually did
///
/// `id` and `start` identify the activity and never change; the remaining
/// fields are display values that may be overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedActivity {
    /// Provider or import id
    pub id: String,
    /// Local wall-clock start time
    pub start: NaiveDateTime,
    /// Sport label ("Ride", "Run", "VirtualRide", ...)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Display title
    #[serde(default)]
    pub name: String,
    /// Distance in meters
    #[serde(default)]
    pub distance_m: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time_s: f64,
    /// Average heart rate
    #[serde(default)]
    pub avg_hr: Option<f64>,
    /// Minimum heart rate
    #[serde(default)]
    pub min_hr: Option<f64>,
    /// Maximum heart rate
    #[serde(default)]
    pub max_hr: Option<f64>,
    /// Average power
    #[serde(default)]
    pub avg_power: Option<f64>,
    /// Minimum power
    #[serde(default)]
    pub min_power: Option<f64>,
    /// Maximum power
    #[serde(default)]
    pub max_power: Option<f64>,
    /// Stress value that replaces any computed one
    #[serde(default)]
    pub tss_override: Option<f64>,
    /// Intensity factor supplied by the feed or a recomputed summary
    #[serde(default)]
    pub if_value: Option<f64>,
    /// Hidden activities are excluded from load and compliance
    #[serde(default)]
    pub hidden: bool,
}

impl CompletedActivity {
    /// Visible activity with no metrics beyond its moving time
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        start: NaiveDateTime,
        activity_type: impl Into<String>,
        moving_time_s: f64,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            activity_type: activity_type.into(),
            name: String::new(),
            distance_m: 0.0,
            moving_time_s,
            avg_hr: None,
            min_hr: None,
            max_hr: None,
            avg_power: None,
            min_power: None,
            max_power: None,
            tss_override: None,
            if_value: None,
            hidden: false,
        }
    }

    /// Local calendar date the activity counts towards
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// FTP class of the activity
    #[must_use]
    pub fn sport_key(&self) -> SportKey {
        SportKey::from_label(&self.activity_type)
    }
}

/// The completed-side figures the compliance and stress logic needs
///
/// Built from a [`CompletedActivity`] or from a planned workout's manual
/// completion fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletedRecord {
    /// Sport or workout type label
    pub activity_type: String,
    /// Moving time in seconds
    pub moving_time_s: f64,
    /// Distance in meters
    pub distance_m: f64,
    /// Explicit stress value
    pub tss_override: Option<f64>,
    /// Explicit intensity factor
    pub if_value: Option<f64>,
    /// Average power, used with an FTP when no intensity factor is known
    pub avg_power: Option<f64>,
}

impl CompletedRecord {
    /// FTP class of the record
    #[must_use]
    pub fn sport_key(&self) -> SportKey {
        SportKey::from_label(&self.activity_type)
    }
}

impl From<&CompletedActivity> for CompletedRecord {
    fn from(activity: &CompletedActivity) -> Self {
        Self {
            activity_type: activity.activity_type.clone(),
            moving_time_s: activity.moving_time_s,
            distance_m: activity.distance_m,
            tss_override: activity.tss_override,
            if_value: activity.if_value,
            avg_power: activity.avg_power,
        }
    }
}
