// ABOUTME: Session summarizer turning a decoded sample stream and lap markers into a summary
// ABOUTME: Computes duration, distance, channel aggregates, climbing, sport class, and stress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Summarizer
//!
//! A summary is always derived wholesale from its inputs. Re-deriving (for
//! example after the athlete changes an FTP) means calling
//! [`SessionSummarizer::summarize`] again with the same samples.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trainlog_core::errors::AnalyticsError;
use trainlog_core::models::{Lap, Sample, SessionSummary, SessionTotals, SportKey};

use crate::config::{AnalyticsConfig, FtpSettings};
use crate::stress::{elapsed_seconds, StressCalculator};

/// Sport label assumed when the device did not record one
const DEFAULT_SPORT: &str = "Ride";

/// Mean/min/max of one sample channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Mean of non-null values
    pub avg: Option<f64>,
    /// Minimum of non-null values
    pub min: Option<f64>,
    /// Maximum of non-null values
    pub max: Option<f64>,
}

impl ChannelStats {
    /// Aggregate the finite values of a channel; an empty channel stays absent
    pub fn collect(values: impl Iterator<Item = f64>) -> Self {
        let mut sum = 0.0;
        let mut count = 0_u32;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in values.filter(|v| v.is_finite()) {
            sum += value;
            count += 1;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Self::default();
        }
        Self {
            avg: Some(sum / f64::from(count)),
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Everything needed to summarize one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    /// Decoded samples in time order
    pub samples: Vec<Sample>,
    /// Device laps, possibly empty
    #[serde(default)]
    pub laps: Vec<Lap>,
    /// Device session totals
    #[serde(default)]
    pub totals: SessionTotals,
}

/// Builds [`SessionSummary`] values from sample streams
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSummarizer {
    ftp: FtpSettings,
    stress: StressCalculator,
}

impl SessionSummarizer {
    /// Summarizer with the given FTP table and default stress algorithm
    #[must_use]
    pub fn new(ftp: FtpSettings) -> Self {
        Self {
            ftp,
            stress: StressCalculator::default(),
        }
    }

    /// Summarizer configured from [`AnalyticsConfig`]
    #[must_use]
    pub const fn from_config(config: &AnalyticsConfig) -> Self {
        Self {
            ftp: config.ftp,
            stress: StressCalculator::new(config.tss_algorithm),
        }
    }

    /// Summarize one session
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::NoSamples` if no sample carries a timestamp
    pub fn summarize(
        &self,
        samples: &[Sample],
        laps: &[Lap],
        totals: &SessionTotals,
    ) -> Result<SessionSummary, AnalyticsError> {
        let timed: Vec<&Sample> = samples.iter().filter(|s| s.timestamp.is_some()).collect();
        let (Some(start), Some(end)) = (
            timed.first().and_then(|s| s.timestamp),
            timed.last().and_then(|s| s.timestamp),
        ) else {
            return Err(AnalyticsError::NoSamples);
        };
        if timed.len() < samples.len() {
            warn!(
                dropped = samples.len() - timed.len(),
                "Dropping samples without timestamps"
            );
        }

        let duration_s = positive(totals.timer_s)
            .unwrap_or_else(|| elapsed_seconds(start, end).max(1.0));
        let distance_m = positive(totals.distance_m).unwrap_or_else(|| channel_distance(&timed));

        let hr = ChannelStats::collect(timed.iter().filter_map(|s| s.heart_rate));
        let power = ChannelStats::collect(timed.iter().filter_map(|s| s.power));
        let cadence = ChannelStats::collect(timed.iter().filter_map(|s| s.cadence));
        let speed = ChannelStats::collect(timed.iter().filter_map(|s| s.speed));
        let altitude = ChannelStats::collect(timed.iter().filter_map(|s| s.altitude));

        let laps = if laps.is_empty() {
            vec![Lap {
                name: "Lap 1".into(),
                start: Some(start),
                end: Some(end),
                duration_s: Some(duration_s),
                distance_m: Some(distance_m),
                avg_hr: hr.avg,
                max_hr: hr.max,
                avg_speed: speed.avg,
                max_speed: speed.max,
                avg_power: power.avg,
                max_power: power.max,
                avg_cadence: cadence.avg,
                max_cadence: cadence.max,
            }]
        } else {
            laps.to_vec()
        };

        let sport = totals
            .sport
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SPORT)
            .to_owned();
        let sport_key = SportKey::from_label(&sport);
        let ftp = self.ftp.get(sport_key);

        let avg_power = prefer_device(totals.avg_power, power.avg);
        let stress = self.stress.calculate(samples, duration_s, avg_power, ftp);

        let elevation_gain_m = totals
            .ascent_m
            .filter(|m| m.is_finite() && *m >= 0.0)
            .or_else(|| climbing(&timed));

        debug!(
            samples = timed.len(),
            duration_s,
            distance_m,
            sport = %sport,
            sport_key = %sport_key,
            "Summarized session"
        );

        Ok(SessionSummary {
            start,
            end,
            duration_s,
            distance_m,
            avg_hr: prefer_device(totals.avg_hr, hr.avg),
            min_hr: hr.min,
            max_hr: prefer_device(totals.max_hr, hr.max),
            avg_power,
            min_power: power.min,
            max_power: prefer_device(totals.max_power, power.max),
            avg_cadence: prefer_device(totals.avg_cadence, cadence.avg),
            min_cadence: cadence.min,
            max_cadence: prefer_device(totals.max_cadence, cadence.max),
            avg_speed: prefer_device(totals.avg_speed, speed.avg),
            max_speed: prefer_device(totals.max_speed, speed.max),
            avg_altitude: altitude.avg,
            min_altitude: altitude.min,
            max_altitude: altitude.max,
            elevation_gain_m,
            sport,
            sport_key,
            ftp,
            normalized_power: stress.normalized_power,
            intensity_factor: stress.intensity_factor,
            tss: stress.tss,
            laps,
        })
    }

    /// Summarize one [`SessionInput`]
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::NoSamples` if no sample carries a timestamp
    pub fn summarize_input(&self, input: &SessionInput) -> Result<SessionSummary, AnalyticsError> {
        self.summarize(&input.samples, &input.laps, &input.totals)
    }

    /// Summarize many sessions in parallel
    ///
    /// Sessions share no state, so results come back in input order with one
    /// entry per session.
    #[must_use]
    pub fn summarize_batch(
        &self,
        inputs: &[SessionInput],
    ) -> Vec<Result<SessionSummary, AnalyticsError>> {
        inputs
            .par_iter()
            .map(|input| self.summarize_input(input))
            .collect()
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// A positive device-reported figure wins over the recomputed one
fn prefer_device(device: Option<f64>, computed: Option<f64>) -> Option<f64> {
    positive(device).or(computed)
}

/// Distance covered according to the cumulative distance channel
fn channel_distance(samples: &[&Sample]) -> f64 {
    let mut values = samples
        .iter()
        .filter_map(|s| s.distance)
        .filter(|d| d.is_finite());
    let Some(first) = values.next() else {
        return 0.0;
    };
    values.last().map_or(first, |last| last - first).max(0.0)
}

/// Sum of positive altitude steps, absent without an altitude channel
fn climbing(samples: &[&Sample]) -> Option<f64> {
    let mut altitudes = samples
        .iter()
        .filter_map(|s| s.altitude)
        .filter(|a| a.is_finite());
    let mut previous = altitudes.next()?;
    let mut gain = 0.0;
    for altitude in altitudes {
        if altitude > previous {
            gain += altitude - previous;
        }
        previous = altitude;
    }
    Some(gain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use trainlog_core::models::SportKey;

    fn origin() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 4, 6, 30, 0).unwrap()
    }

    fn at(seconds: i64) -> Sample {
        Sample::at(origin() + Duration::seconds(seconds))
    }

    #[test]
    fn test_no_samples_is_an_error() {
        let summarizer = SessionSummarizer::default();
        let untimed = vec![Sample::default().with_power(200.0)];
        assert_eq!(
            summarizer.summarize(&untimed, &[], &SessionTotals::default()),
            Err(AnalyticsError::NoSamples)
        );
        assert_eq!(
            summarizer.summarize(&[], &[], &SessionTotals::default()),
            Err(AnalyticsError::NoSamples)
        );
    }

    #[test]
    fn test_duration_floor_and_timer_override() {
        let summarizer = SessionSummarizer::default();
        let single = vec![at(0).with_heart_rate(120.0)];
        let summary = summarizer.summarize(&single, &[], &SessionTotals::default()).unwrap();
        assert!((summary.duration_s - 1.0).abs() < f64::EPSILON);

        let totals = SessionTotals {
            timer_s: Some(1800.0),
            ..SessionTotals::default()
        };
        let two = vec![at(0), at(2000)];
        let summary = summarizer.summarize(&two, &[], &totals).unwrap();
        assert!((summary.duration_s - 1800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_rules() {
        let summarizer = SessionSummarizer::default();
        let samples = vec![
            at(0).with_distance(1000.0),
            at(1),
            at(2).with_distance(1500.0),
        ];
        let summary = summarizer.summarize(&samples, &[], &SessionTotals::default()).unwrap();
        assert!((summary.distance_m - 500.0).abs() < f64::EPSILON);

        let one = vec![at(0).with_distance(42.0), at(5)];
        let summary = summarizer.summarize(&one, &[], &SessionTotals::default()).unwrap();
        assert!((summary.distance_m - 42.0).abs() < f64::EPSILON);

        let reset = vec![at(0).with_distance(900.0), at(5).with_distance(100.0)];
        let summary = summarizer.summarize(&reset, &[], &SessionTotals::default()).unwrap();
        assert!(summary.distance_m.abs() < f64::EPSILON);

        let totals = SessionTotals {
            distance_m: Some(10_000.0),
            ..SessionTotals::default()
        };
        let summary = summarizer.summarize(&samples, &[], &totals).unwrap();
        assert!((summary.distance_m - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_channels_stay_absent() {
        let summarizer = SessionSummarizer::default();
        let samples = vec![at(0).with_heart_rate(140.0), at(1).with_heart_rate(150.0)];
        let summary = summarizer.summarize(&samples, &[], &SessionTotals::default()).unwrap();

        assert!((summary.avg_hr.unwrap() - 145.0).abs() < f64::EPSILON);
        assert!((summary.min_hr.unwrap() - 140.0).abs() < f64::EPSILON);
        assert!(summary.avg_power.is_none());
        assert!(summary.max_cadence.is_none());
        assert!(summary.elevation_gain_m.is_none());
        assert!(summary.normalized_power.is_none());
    }

    #[test]
    fn test_synthesized_lap_spans_session() {
        let summarizer = SessionSummarizer::default();
        let samples = vec![
            at(0).with_power(180.0).with_distance(0.0),
            at(60).with_power(220.0).with_distance(500.0),
        ];
        let summary = summarizer.summarize(&samples, &[], &SessionTotals::default()).unwrap();

        assert_eq!(summary.laps.len(), 1);
        let lap = &summary.laps[0];
        assert_eq!(lap.name, "Lap 1");
        assert_eq!(lap.start, Some(origin()));
        assert_eq!(lap.end, Some(origin() + Duration::seconds(60)));
        assert!((lap.avg_power.unwrap() - 200.0).abs() < f64::EPSILON);
        assert!((lap.distance_m.unwrap() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_supplied_laps_are_kept() {
        let summarizer = SessionSummarizer::default();
        let laps = vec![
            Lap {
                name: "Lap 1".into(),
                ..Lap::default()
            },
            Lap {
                name: "Lap 2".into(),
                ..Lap::default()
            },
        ];
        let summary = summarizer
            .summarize(&[at(0), at(10)], &laps, &SessionTotals::default())
            .unwrap();
        assert_eq!(summary.laps, laps);
    }

    #[test]
    fn test_climbing_from_altitude_or_device() {
        let summarizer = SessionSummarizer::default();
        let samples = vec![
            at(0).with_altitude(100.0),
            at(1).with_altitude(110.0),
            at(2).with_altitude(105.0),
            at(3).with_altitude(120.0),
        ];
        let summary = summarizer.summarize(&samples, &[], &SessionTotals::default()).unwrap();
        assert!((summary.elevation_gain_m.unwrap() - 25.0).abs() < f64::EPSILON);

        let totals = SessionTotals {
            ascent_m: Some(31.0),
            ..SessionTotals::default()
        };
        let summary = summarizer.summarize(&samples, &[], &totals).unwrap();
        assert!((summary.elevation_gain_m.unwrap() - 31.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sport_key_selects_ftp() {
        let ftp = FtpSettings::default()
            .with(SportKey::Ride, 250.0)
            .with(SportKey::Run, 300.0);
        let summarizer = SessionSummarizer::new(ftp);
        let samples = vec![
            at(0).with_power(200.0),
            at(30).with_power(200.0),
            at(60).with_power(200.0),
        ];

        let ride = summarizer.summarize(&samples, &[], &SessionTotals::default()).unwrap();
        assert_eq!(ride.sport, "Ride");
        assert_eq!(ride.sport_key, SportKey::Ride);
        assert_eq!(ride.ftp, Some(250.0));
        assert!((ride.tss.unwrap() - 1.066_666_666).abs() < 1e-6);

        let swim_totals = SessionTotals {
            sport: Some("Pool Swim".into()),
            ..SessionTotals::default()
        };
        let swim = summarizer.summarize(&samples, &[], &swim_totals).unwrap();
        assert_eq!(swim.sport_key, SportKey::Swim);
        assert!(swim.ftp.is_none());
        assert!(swim.intensity_factor.is_none());
        assert!(swim.tss.is_none());
    }

    #[test]
    fn test_batch_preserves_order() {
        let summarizer = SessionSummarizer::default();
        let inputs = vec![
            SessionInput {
                samples: vec![at(0), at(100)],
                ..SessionInput::default()
            },
            SessionInput::default(),
            SessionInput {
                samples: vec![at(0), at(5)],
                ..SessionInput::default()
            },
        ];
        let results = summarizer.summarize_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert!((results[0].as_ref().unwrap().duration_s - 100.0).abs() < f64::EPSILON);
        assert_eq!(results[1], Err(AnalyticsError::NoSamples));
        assert!((results[2].as_ref().unwrap().duration_s - 5.0).abs() < f64::EPSILON);
    }
}
