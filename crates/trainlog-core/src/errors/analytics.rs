// ABOUTME: Domain error variants for the analytics computations
// ABOUTME: Only conditions that abort a computation live here; absent inputs are not errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failures that abort an analytics computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The session has zero valid timestamped samples
    #[error("session has no timestamped samples")]
    NoSamples,

    /// A date key could not be parsed as `YYYY-MM-DD`
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
