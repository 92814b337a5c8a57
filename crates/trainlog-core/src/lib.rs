// ABOUTME: Core types and constants for the trainlog training-load analytics engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Core
//!
//! Foundation crate providing shared types and constants for the trainlog
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AnalyticsError`
//! - **constants**: Load-model, power, and compliance constants
//! - **models**: Samples, laps, session summaries, workouts, activities, pairs, calendar items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Sample, SessionSummary, PlannedWorkout, Pair, etc.)
pub mod models;
