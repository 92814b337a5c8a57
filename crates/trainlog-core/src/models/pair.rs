// ABOUTME: Exclusive association between a planned workout and a completed activity
// ABOUTME: At most one pair may reference any planned id and any completed id at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Link between one planned workout and one completed activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Pair id
    pub id: Uuid,
    /// Planned workout id
    pub planned_id: String,
    /// Completed activity id
    pub completed_id: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Pair {
    /// New pair with a fresh id, stamped now
    pub fn new(planned_id: impl Into<String>, completed_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            planned_id: planned_id.into(),
            completed_id: completed_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether this pair would violate exclusivity with a new `(planned, completed)` link
    #[must_use]
    pub fn conflicts_with(&self, planned_id: &str, completed_id: &str) -> bool {
        self.planned_id == planned_id || self.completed_id == completed_id
    }
}
