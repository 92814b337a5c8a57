// ABOUTME: Planned workout model with targets and manually entered completion values
// ABOUTME: Includes normalization clamps applied whenever a workout is created or edited
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::CompletedRecord;
use crate::constants::{units, workout};

/// Completion values typed in by the athlete instead of (or before) pairing a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualCompletion {
    /// Completed duration in minutes
    #[serde(rename = "completed_duration_min", default)]
    pub duration_min: f64,
    /// Completed distance in kilometers
    #[serde(rename = "completed_distance_km", default)]
    pub distance_km: f64,
    /// Completed climbing in meters
    #[serde(rename = "completed_elevation_m", default)]
    pub elevation_m: f64,
    /// Completed training stress
    #[serde(rename = "completed_tss", default)]
    pub tss: f64,
    /// Completed intensity factor
    #[serde(rename = "completed_if", default)]
    pub if_value: f64,
}

impl ManualCompletion {
    /// True when nothing positive has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duration_min <= 0.0
            && self.distance_km <= 0.0
            && self.tss <= 0.0
            && self.if_value <= 0.0
    }

    /// Clamp every value to be non-negative
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            duration_min: non_negative(self.duration_min),
            distance_km: non_negative(self.distance_km),
            elevation_m: non_negative(self.elevation_m),
            tss: non_negative(self.tss),
            if_value: non_negative(self.if_value),
        }
    }
}

/// Targets and notes of a workout-kind calendar item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetails {
    /// Workout type label ("Run", "Bike", "Strength", ...)
    #[serde(default = "default_workout_type")]
    pub workout_type: String,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration_min: f64,
    /// Planned distance in kilometers
    #[serde(default)]
    pub distance_km: f64,
    /// Planned climbing in meters
    #[serde(default)]
    pub elevation_m: f64,
    /// Athlete-rated intensity, 1-10
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Planned training stress (0 when not set)
    #[serde(default)]
    pub planned_tss: f64,
    /// Planned intensity factor (0 when not set)
    #[serde(default)]
    pub planned_if: f64,
    /// Manually entered completion values
    #[serde(flatten)]
    pub completed: ManualCompletion,
    /// Post-session feel, 0-5
    #[serde(default)]
    pub feel: u8,
    /// Rate of perceived exertion, 0-10
    #[serde(default)]
    pub rpe: u8,
    /// Free-form comments
    #[serde(default)]
    pub comments: String,
}

impl Default for WorkoutDetails {
    fn default() -> Self {
        Self {
            workout_type: default_workout_type(),
            duration_min: 0.0,
            distance_km: 0.0,
            elevation_m: 0.0,
            intensity: workout::INTENSITY_DEFAULT,
            planned_tss: 0.0,
            planned_if: 0.0,
            completed: ManualCompletion::default(),
            feel: 0,
            rpe: 0,
            comments: String::new(),
        }
    }
}

impl WorkoutDetails {
    /// Apply the clamps every stored workout satisfies
    ///
    /// Metrics become non-negative, intensity lands in 1-10 (a missing or zero
    /// rating becomes the default), feel in 0-5, rpe in 0-10, and a blank type
    /// becomes "Other".
    #[must_use]
    pub fn normalized(self) -> Self {
        let workout_type = match self.workout_type.trim() {
            "" => default_workout_type(),
            trimmed => trimmed.to_owned(),
        };
        let intensity = if self.intensity.is_finite() && self.intensity != 0.0 {
            self.intensity
        } else {
            workout::INTENSITY_DEFAULT
        };

        Self {
            workout_type,
            duration_min: non_negative(self.duration_min),
            distance_km: non_negative(self.distance_km),
            elevation_m: non_negative(self.elevation_m),
            intensity: intensity.clamp(workout::INTENSITY_MIN, workout::INTENSITY_MAX),
            planned_tss: non_negative(self.planned_tss),
            planned_if: non_negative(self.planned_if),
            completed: self.completed.normalized(),
            feel: self.feel.min(workout::FEEL_MAX),
            rpe: self.rpe.min(workout::RPE_MAX),
            comments: self.comments.trim().to_owned(),
        }
    }
}

/// A workout the athlete intends to do on a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    /// Calendar item id
    pub id: String,
    /// Scheduled date
    pub date: NaiveDate,
    /// Targets, notes, and manual completion values
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl PlannedWorkout {
    /// Create a planned workout with default targets
    pub fn new(id: impl Into<String>, date: NaiveDate, workout_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            details: WorkoutDetails {
                workout_type: workout_type.into(),
                ..WorkoutDetails::default()
            },
        }
    }

    /// Completed record built from the manual completion fields
    ///
    /// Returns `None` when the athlete has not entered anything positive.
    #[must_use]
    pub fn manual_completion_record(&self) -> Option<CompletedRecord> {
        let completed = &self.details.completed;
        if completed.is_empty() {
            return None;
        }
        Some(CompletedRecord {
            activity_type: self.details.workout_type.clone(),
            moving_time_s: completed.duration_min * units::SECONDS_PER_MINUTE,
            distance_m: completed.distance_km * units::METERS_PER_KILOMETER,
            tss_override: positive(completed.tss),
            if_value: positive(completed.if_value),
            avg_power: None,
        })
    }
}

fn default_workout_type() -> String {
    "Other".to_owned()
}

const fn default_intensity() -> f64 {
    workout::INTENSITY_DEFAULT
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}
