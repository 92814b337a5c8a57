// ABOUTME: Effective stress and intensity factor for planned workouts and completed records
// ABOUTME: Falls back from explicit values to power-derived values to a type-based estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stress Estimation
//!
//! Not every session carries a power stream. The functions here give every
//! planned and completed item a stress figure so it can feed the daily stress
//! map and the stress basis of the compliance classifier.
//!
//! Resolution order for a completed record:
//! 1. an explicit stress override
//! 2. `hours x IF² x 100`, with IF explicit or `avg_power / FTP`
//! 3. `hours x typical_intensity(type)² x 100`

use trainlog_core::constants::intensity::{
    typical_intensity, MIN_ESTIMATE_INTENSITY, RATING_INTENSITY_BASE,
};
use trainlog_core::constants::power::TSS_PER_THRESHOLD_HOUR;
use trainlog_core::constants::units::{MINUTES_PER_HOUR, SECONDS_PER_HOUR};
use trainlog_core::constants::workout::INTENSITY_MAX;
use trainlog_core::models::{CompletedRecord, PlannedWorkout};

use crate::config::FtpSettings;
use crate::stress::intensity_factor;

/// Rough stress for `duration_min` minutes at `intensity`, rounded to a whole number
#[must_use]
pub fn estimate_tss(duration_min: f64, intensity: f64) -> f64 {
    let hours = duration_min.max(0.0) / MINUTES_PER_HOUR;
    let intensity = intensity.max(MIN_ESTIMATE_INTENSITY);
    (hours * intensity.powi(2) * TSS_PER_THRESHOLD_HOUR).round()
}

/// Stress a completed record contributes to its day
#[must_use]
pub fn completed_stress(record: &CompletedRecord, ftp: &FtpSettings) -> f64 {
    if let Some(tss) = positive(record.tss_override) {
        return tss;
    }

    let hours = record.moving_time_s.max(0.0) / SECONDS_PER_HOUR;
    let measured_if = positive(record.if_value)
        .or_else(|| intensity_factor(record.avg_power, ftp.get(record.sport_key())));
    if let Some(if_value) = measured_if {
        if hours > 0.0 {
            return hours * if_value.powi(2) * TSS_PER_THRESHOLD_HOUR;
        }
    }

    estimate_tss(
        hours * MINUTES_PER_HOUR,
        typical_intensity(&record.activity_type),
    )
}

/// Stress a planned workout is expected to produce
#[must_use]
pub fn planned_stress(workout: &PlannedWorkout) -> f64 {
    let details = &workout.details;
    if details.planned_tss > 0.0 {
        return details.planned_tss;
    }
    let intensity = if details.intensity > 0.0 {
        RATING_INTENSITY_BASE + details.intensity.min(INTENSITY_MAX) / INTENSITY_MAX
    } else {
        typical_intensity(&details.workout_type)
    };
    estimate_tss(details.duration_min, intensity)
}

/// Planned intensity factor, explicit or implied by planned stress and duration
#[must_use]
pub fn planned_if(workout: &PlannedWorkout) -> Option<f64> {
    let details = &workout.details;
    if details.planned_if > 0.0 {
        return Some(details.planned_if);
    }
    implied_if(details.planned_tss, details.duration_min / MINUTES_PER_HOUR)
}

/// Completed intensity factor
///
/// Explicit IF first, then the IF implied by a stress override over the
/// moving time, then average power over the sport's FTP.
#[must_use]
pub fn completed_if(record: &CompletedRecord, ftp: &FtpSettings) -> Option<f64> {
    positive(record.if_value)
        .or_else(|| {
            implied_if(
                record.tss_override.unwrap_or_default(),
                record.moving_time_s / SECONDS_PER_HOUR,
            )
        })
        .or_else(|| intensity_factor(record.avg_power, ftp.get(record.sport_key())))
}

/// `sqrt(tss / (hours x 100))` when both are positive
fn implied_if(tss: f64, hours: f64) -> Option<f64> {
    (tss > 0.0 && hours > 0.0).then(|| (tss / (hours * TSS_PER_THRESHOLD_HOUR)).sqrt())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trainlog_core::models::SportKey;

    fn record(activity_type: &str, moving_time_s: f64) -> CompletedRecord {
        CompletedRecord {
            activity_type: activity_type.into(),
            moving_time_s,
            ..CompletedRecord::default()
        }
    }

    fn planned(workout_type: &str, duration_min: f64) -> PlannedWorkout {
        let mut workout = PlannedWorkout::new(
            "w1",
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            workout_type,
        );
        workout.details.duration_min = duration_min;
        workout
    }

    #[test]
    fn test_estimate_tss() {
        // One hour at 0.85 -> 72.25 -> 72
        assert!((estimate_tss(60.0, 0.85) - 72.0).abs() < f64::EPSILON);
        // Intensity floor
        assert!((estimate_tss(60.0, 0.0) - 4.0).abs() < f64::EPSILON);
        assert!(estimate_tss(-30.0, 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completed_override_wins() {
        let mut activity = record("Run", 3600.0);
        activity.tss_override = Some(88.0);
        activity.if_value = Some(1.2);
        assert!((completed_stress(&activity, &FtpSettings::default()) - 88.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completed_from_power() {
        let mut ride = record("Ride", 7200.0);
        ride.avg_power = Some(200.0);
        let ftp = FtpSettings::default().with(SportKey::Ride, 250.0);
        // 2h x 0.8² x 100
        assert!((completed_stress(&ride, &ftp) - 128.0).abs() < 1e-9);

        // Without an FTP the type estimate applies: 2h x 0.82² x 100 = 134.48
        assert!((completed_stress(&ride, &FtpSettings::default()) - 134.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completed_if_zero_duration_falls_back() {
        let mut activity = record("Run", 0.0);
        activity.if_value = Some(0.9);
        assert!(completed_stress(&activity, &FtpSettings::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_planned_stress_uses_rating() {
        let workout = planned("Run", 60.0);
        // Default rating 6 -> 0.4 + 0.6 = 1.0
        assert!((planned_stress(&workout) - 100.0).abs() < f64::EPSILON);

        let mut explicit = planned("Run", 60.0);
        explicit.details.planned_tss = 55.0;
        assert!((planned_stress(&explicit) - 55.0).abs() < f64::EPSILON);

        let mut unrated = planned("Walk", 60.0);
        unrated.details.intensity = 0.0;
        // 0.55² x 100 = 30.25
        assert!((planned_stress(&unrated) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_planned_if() {
        let mut workout = planned("Bike", 90.0);
        assert!(planned_if(&workout).is_none());

        workout.details.planned_tss = 96.0;
        // sqrt(96 / 150)
        assert!((planned_if(&workout).unwrap() - 0.8).abs() < 1e-9);

        workout.details.planned_if = 0.75;
        assert_eq!(planned_if(&workout), Some(0.75));
    }

    #[test]
    fn test_completed_if_resolution() {
        let ftp = FtpSettings::default().with(SportKey::Ride, 250.0);

        let mut activity = record("Ride", 3600.0);
        activity.avg_power = Some(225.0);
        assert!((completed_if(&activity, &ftp).unwrap() - 0.9).abs() < 1e-9);

        activity.tss_override = Some(64.0);
        assert!((completed_if(&activity, &ftp).unwrap() - 0.8).abs() < 1e-9);

        activity.if_value = Some(0.7);
        assert_eq!(completed_if(&activity, &ftp), Some(0.7));

        assert!(completed_if(&record("Swim", 1800.0), &ftp).is_none());
    }
}
