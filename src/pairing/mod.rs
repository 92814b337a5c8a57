// ABOUTME: Pairing registry linking planned workouts to completed activities one-to-one
// ABOUTME: Defines the repository trait, the change report type, and cascade helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Pairing Registry
//!
//! At most one pair exists per planned id and per completed id. Creating a
//! pair silently removes any pair that already uses either id ("latest
//! wins"), and every mutation reports the pairs it removed so the caller can
//! apply cascades to its own collections.
//!
//! ```rust,no_run
//! # use trainlog::pairing::{InMemoryPairRepository, PairRepository};
//! # async fn example() -> Result<(), trainlog::errors::AppError> {
//! let registry = InMemoryPairRepository::new();
//! registry.create("plan-1", "ride-9").await?;
//! let change = registry.create("plan-1", "ride-10").await?;
//! assert_eq!(change.removed.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Cascades applied when a paired item is deleted
pub mod cascade;
/// In-memory repository behind a single coarse lock
pub mod memory;

pub use cascade::{delete_completed, delete_planned, CompletedDeletion, PlannedDeletion};
pub use memory::InMemoryPairRepository;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use trainlog_core::errors::AppResult;
use trainlog_core::models::Pair;
use uuid::Uuid;

/// Outcome of creating a pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairChange {
    /// The pair that now exists
    pub created: Pair,
    /// Pairs displaced because they shared the planned or completed id
    pub removed: Vec<Pair>,
}

/// Storage for pairs
///
/// Implementations perform each operation as one read-modify-write of the
/// whole collection. Lookups return at most one pair because creation keeps
/// both ids unique.
#[async_trait]
pub trait PairRepository: Send + Sync {
    /// Link `planned_id` to `completed_id`, displacing existing links of either
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either id is blank, or a storage error
    async fn create(&self, planned_id: &str, completed_id: &str) -> AppResult<PairChange>;

    /// Remove a pair by id; an unknown id removes nothing
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be updated
    async fn delete(&self, pair_id: Uuid) -> AppResult<Vec<Pair>>;

    /// Remove every pair of a planned workout
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be updated
    async fn delete_by_planned(&self, planned_id: &str) -> AppResult<Vec<Pair>>;

    /// Remove every pair of a completed activity
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be updated
    async fn delete_by_completed(&self, completed_id: &str) -> AppResult<Vec<Pair>>;

    /// Pair of a planned workout
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be read
    async fn lookup_by_planned(&self, planned_id: &str) -> AppResult<Option<Pair>>;

    /// Pair of a completed activity
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be read
    async fn lookup_by_completed(&self, completed_id: &str) -> AppResult<Option<Pair>>;

    /// Every pair, oldest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be read
    async fn list(&self) -> AppResult<Vec<Pair>>;
}
