// ABOUTME: Calendar item sum type covering workouts, events, goals, notes, metrics, availability
// ABOUTME: Shared envelope fields plus one schema per kind; only workouts feed the analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::workout::{PlannedWorkout, WorkoutDetails};

/// Kind-specific body of a calendar item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemBody {
    /// A planned (and possibly manually completed) workout
    Workout(WorkoutDetails),
    /// A race or other dated event
    Event {
        /// Event category
        #[serde(default = "default_event_type")]
        event_type: String,
    },
    /// A training goal
    Goal,
    /// A free-form note
    Note,
    /// Daily body metrics
    Metrics,
    /// Availability marker
    Availability {
        /// Availability status
        #[serde(default = "default_availability")]
        availability: String,
    },
}

impl ItemBody {
    /// Title used when the user leaves it blank
    #[must_use]
    pub const fn default_title(&self) -> &'static str {
        match self {
            Self::Workout(_) => "Untitled Workout",
            Self::Event { .. } => "Untitled Event",
            Self::Goal => "Untitled Goal",
            Self::Note => "Untitled Note",
            Self::Metrics => "Daily Metrics",
            Self::Availability { .. } => "Availability",
        }
    }

    /// Kind tag as serialized
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Workout(_) => "workout",
            Self::Event { .. } => "event",
            Self::Goal => "goal",
            Self::Note => "note",
            Self::Metrics => "metrics",
            Self::Availability { .. } => "availability",
        }
    }
}

/// One entry on the training calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    /// Item id
    pub id: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Kind and kind-specific fields
    #[serde(flatten)]
    pub body: ItemBody,
}

impl CalendarItem {
    /// Create a normalized item with a fresh id
    ///
    /// Blank titles get the kind's default, text is trimmed, and workout
    /// values are clamped into range.
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        description: impl Into<String>,
        body: ItemBody,
    ) -> Self {
        let title = title.into();
        let title = match title.trim() {
            "" => body.default_title().to_owned(),
            trimmed => trimmed.to_owned(),
        };
        let body = match body {
            ItemBody::Workout(details) => ItemBody::Workout(details.normalized()),
            ItemBody::Event { event_type } => ItemBody::Event {
                event_type: non_blank_or(event_type, default_event_type),
            },
            ItemBody::Availability { availability } => ItemBody::Availability {
                availability: non_blank_or(availability, default_availability),
            },
            other => other,
        };

        Self {
            id: Uuid::new_v4().to_string(),
            date,
            title,
            description: description.into().trim().to_owned(),
            created_at: Utc::now(),
            body,
        }
    }

    /// Planned-workout view of this item, if it is a workout
    #[must_use]
    pub fn as_planned_workout(&self) -> Option<PlannedWorkout> {
        match &self.body {
            ItemBody::Workout(details) => Some(PlannedWorkout {
                id: self.id.clone(),
                date: self.date,
                details: details.clone(),
            }),
            _ => None,
        }
    }
}

fn default_event_type() -> String {
    "Race".to_owned()
}

fn default_availability() -> String {
    "Unavailable".to_owned()
}

fn non_blank_or(value: String, fallback: fn() -> String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        trimmed.to_owned()
    }
}
