// ABOUTME: Typical intensity factor per workout type for stress estimation
// ABOUTME: Used when a session carries neither a stress override nor power data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intensity assumed for workout types missing from [`TYPICAL_INTENSITY`]
pub const DEFAULT_INTENSITY: f64 = 0.7;

/// Lowest intensity fed into a stress estimate
pub const MIN_ESTIMATE_INTENSITY: f64 = 0.2;

/// Base intensity added to the user's 1-10 rating (rating / 10 on top)
pub const RATING_INTENSITY_BASE: f64 = 0.4;

/// Workout type label → typical intensity factor
pub const TYPICAL_INTENSITY: &[(&str, f64)] = &[
    ("Run", 0.85),
    ("Bike", 0.82),
    ("Swim", 0.8),
    ("Brick", 0.9),
    ("Crosstrain", 0.7),
    ("Day Off", 0.2),
    ("Mtn Bike", 0.86),
    ("Strength", 0.75),
    ("Custom", 0.72),
    ("XC-Ski", 0.88),
    ("Rowing", 0.84),
    ("Walk", 0.55),
    ("Other", 0.65),
    ("Ride", 0.82),
    ("Workout", 0.8),
];

/// Look up the typical intensity for an exact workout type label
#[must_use]
pub fn typical_intensity(workout_type: &str) -> f64 {
    TYPICAL_INTENSITY
        .iter()
        .find(|(label, _)| *label == workout_type)
        .map_or(DEFAULT_INTENSITY, |(_, intensity)| *intensity)
}
