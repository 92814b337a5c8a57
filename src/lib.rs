// ABOUTME: Main library entry point for the trainlog training-load analytics tools
// ABOUTME: Wires configuration, logging, pairing, daily totals, and the analytics facade together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog
//!
//! Training-load and compliance analytics for a personal endurance log.
//!
//! ## Features
//!
//! - **Session summaries**: duration, distance, channel aggregates, and stress from a sample stream
//! - **Training load**: CTL/ATL/TSB for any query date
//! - **Compliance**: plan-versus-actual bands for calendar workouts
//! - **Pairing**: exclusive links between planned workouts and completed activities
//!
//! ## Architecture
//!
//! - **`trainlog-core`**: models, errors, constants
//! - **`trainlog-intelligence`**: the pure computations
//! - this crate: environment configuration, logging, the pair repository,
//!   daily totals, and the `trainlog-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use trainlog::analytics::AnalyticsEngine;
//! use trainlog::config::TrainlogConfig;
//! use trainlog::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = TrainlogConfig::from_env()?;
//!     let engine = AnalyticsEngine::new(config.analytics);
//!     println!("load window: {} days", engine.config().load.window_days);
//!     Ok(())
//! }
//! ```

/// Analytics facade
pub mod analytics;

/// Environment configuration
pub mod config;

/// Unified error handling re-exported from `trainlog-core`
pub mod errors;

/// JSON input loaders
pub mod input;

/// Logging configuration and structured log events
pub mod logging;

/// Planned/completed pairing registry
pub mod pairing;

/// Daily duration and stress totals
pub mod stress_map;

/// Weekly rollups
pub mod weekly;
