// ABOUTME: Core data models for samples, sessions, workouts, activities, pairs, and calendar items
// ABOUTME: Plain serde value types shared by the analytics crate and the root package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! All units are SI unless a field name says otherwise: seconds, meters,
//! watts, beats per minute. Planned targets keep the athlete-facing units
//! (minutes, kilometers).

/// Completed activities and the completed-record view
pub mod activity;
/// Calendar item sum type
pub mod calendar;
/// Plan/activity pairs
pub mod pair;
/// Raw samples and laps
pub mod sample;
/// FTP classes
pub mod sport;
/// Session summaries and device session totals
pub mod summary;
/// Planned workouts
pub mod workout;

pub use activity::{CompletedActivity, CompletedRecord};
pub use calendar::{CalendarItem, ItemBody};
pub use pair::Pair;
pub use sample::{Lap, Sample};
pub use sport::SportKey;
pub use summary::{SessionSummary, SessionTotals};
pub use workout::{ManualCompletion, PlannedWorkout, WorkoutDetails};
