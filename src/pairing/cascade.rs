// ABOUTME: Cascade reports for deleting paired planned workouts or completed activities
// ABOUTME: Removes the affected pairs and tells the caller which activities to hide
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::PairRepository;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::errors::AppResult;
use trainlog_core::models::Pair;

/// Effects of deleting a planned workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDeletion {
    /// Deleted planned workout id
    pub planned_id: String,
    /// Pairs that referenced it
    pub removed_pairs: Vec<Pair>,
    /// Completed activities that were linked to it and should now be hidden
    pub hide_completed_ids: Vec<String>,
}

/// Effects of deleting a completed activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDeletion {
    /// Deleted completed activity id
    pub completed_id: String,
    /// Pairs that referenced it
    pub removed_pairs: Vec<Pair>,
}

/// Remove the pairs of a deleted planned workout
///
/// Only workouts hide their linked activities; deleting an event or note
/// that somehow had a pair just drops the pair. Hiding is left to the caller,
/// and the two steps are not atomic.
///
/// # Errors
///
/// Returns the repository's error if the pairs cannot be removed
pub async fn delete_planned<R: PairRepository + ?Sized>(
    repository: &R,
    planned_id: &str,
    is_workout: bool,
) -> AppResult<PlannedDeletion> {
    let removed_pairs = repository.delete_by_planned(planned_id).await?;
    let hide_completed_ids = if is_workout {
        removed_pairs
            .iter()
            .map(|pair| pair.completed_id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    } else {
        Vec::new()
    };
    debug!(
        planned_id,
        removed = removed_pairs.len(),
        hidden = hide_completed_ids.len(),
        "Cascaded planned deletion"
    );
    Ok(PlannedDeletion {
        planned_id: planned_id.to_owned(),
        removed_pairs,
        hide_completed_ids,
    })
}

/// Remove the pairs of a deleted completed activity
///
/// # Errors
///
/// Returns the repository's error if the pairs cannot be removed
pub async fn delete_completed<R: PairRepository + ?Sized>(
    repository: &R,
    completed_id: &str,
) -> AppResult<CompletedDeletion> {
    let removed_pairs = repository.delete_by_completed(completed_id).await?;
    debug!(
        completed_id,
        removed = removed_pairs.len(),
        "Cascaded completed deletion"
    );
    Ok(CompletedDeletion {
        completed_id: completed_id.to_owned(),
        removed_pairs,
    })
}
