// ABOUTME: In-memory pair repository guarding the whole collection with one async mutex
// ABOUTME: Every operation is a single read-modify-write; clones share the same collection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{PairChange, PairRepository};
use crate::logging::AnalyticsLogger;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::Pair;
use uuid::Uuid;

/// Pair repository held in memory
///
/// Uses `Arc<Mutex<Vec<Pair>>>` so clones handed to different tasks observe
/// the same pairs. The lock covers the whole collection; there is no
/// per-record locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPairRepository {
    pairs: Arc<Mutex<Vec<Pair>>>,
}

impl InMemoryPairRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with previously stored pairs
    ///
    /// Seeds that break exclusivity are reduced to the most recent pair per
    /// id, the same outcome as replaying them through `create`.
    #[must_use]
    pub fn with_pairs(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_by_key(|pair| pair.created_at);
        let mut kept: Vec<Pair> = Vec::with_capacity(pairs.len());
        for pair in pairs {
            kept.retain(|existing| !existing.conflicts_with(&pair.planned_id, &pair.completed_id));
            kept.push(pair);
        }
        Self {
            pairs: Arc::new(Mutex::new(kept)),
        }
    }

    async fn remove_where(&self, predicate: impl Fn(&Pair) -> bool + Send) -> Vec<Pair> {
        let mut pairs = self.pairs.lock().await;
        let (removed, kept): (Vec<Pair>, Vec<Pair>) = pairs.drain(..).partition(&predicate);
        *pairs = kept;
        drop(pairs);
        removed
    }
}

#[async_trait]
impl PairRepository for InMemoryPairRepository {
    async fn create(&self, planned_id: &str, completed_id: &str) -> AppResult<PairChange> {
        let planned_id = planned_id.trim();
        let completed_id = completed_id.trim();
        if planned_id.is_empty() || completed_id.is_empty() {
            return Err(AppError::invalid_input(
                "planned_id and completed_id are required",
            ));
        }

        let created = Pair::new(planned_id, completed_id);
        let mut pairs = self.pairs.lock().await;
        let (removed, mut kept): (Vec<Pair>, Vec<Pair>) = pairs
            .drain(..)
            .partition(|p| p.conflicts_with(planned_id, completed_id));
        kept.push(created.clone());
        *pairs = kept;
        drop(pairs);

        AnalyticsLogger::log_pair_created(created.id, planned_id, completed_id, removed.len());
        Ok(PairChange { created, removed })
    }

    async fn delete(&self, pair_id: Uuid) -> AppResult<Vec<Pair>> {
        let removed = self.remove_where(|p| p.id == pair_id).await;
        AnalyticsLogger::log_pairs_removed("pair_id", &pair_id.to_string(), removed.len());
        Ok(removed)
    }

    async fn delete_by_planned(&self, planned_id: &str) -> AppResult<Vec<Pair>> {
        let planned_id = planned_id.trim();
        let removed = self.remove_where(|p| p.planned_id == planned_id).await;
        AnalyticsLogger::log_pairs_removed("planned_id", planned_id, removed.len());
        Ok(removed)
    }

    async fn delete_by_completed(&self, completed_id: &str) -> AppResult<Vec<Pair>> {
        let completed_id = completed_id.trim();
        let removed = self.remove_where(|p| p.completed_id == completed_id).await;
        AnalyticsLogger::log_pairs_removed("completed_id", completed_id, removed.len());
        Ok(removed)
    }

    async fn lookup_by_planned(&self, planned_id: &str) -> AppResult<Option<Pair>> {
        let planned_id = planned_id.trim();
        let pairs = self.pairs.lock().await;
        Ok(pairs.iter().find(|p| p.planned_id == planned_id).cloned())
    }

    async fn lookup_by_completed(&self, completed_id: &str) -> AppResult<Option<Pair>> {
        let completed_id = completed_id.trim();
        let pairs = self.pairs.lock().await;
        Ok(pairs.iter().find(|p| p.completed_id == completed_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Pair>> {
        Ok(self.pairs.lock().await.clone())
    }
}
