// ABOUTME: Training-load analytics crate: summaries, stress, load model, and compliance
// ABOUTME: Pure computations over in-memory inputs with no storage or network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Intelligence
//!
//! Every computation here is synchronous and free of shared mutable state.
//! Sessions can be processed on any thread in any order.
//!
//! ## Modules
//!
//! - **summarizer**: Sample stream → `SessionSummary`
//! - **stress**: Normalized power, intensity factor, TSS
//! - **estimation**: Effective stress for items without a power stream
//! - **`training_load`**: CTL/ATL/TSB over a trailing window
//! - **compliance**: Plan-versus-actual bands
//! - **config**: FTP settings, load constants, algorithm selection

/// Algorithm selection types
pub mod algorithms;

/// Compliance classification
pub mod compliance;

/// Analytics configuration
pub mod config;

/// Stress estimation fallbacks
pub mod estimation;

/// Session stress calculation
pub mod stress;

/// Session summarization
pub mod summarizer;

/// Performance-management load model
pub mod training_load;

pub use algorithms::TssAlgorithm;
pub use compliance::{classify, Arrow, Basis, ComplianceBand, ComplianceResult};
pub use config::{AnalyticsConfig, ConfigError, FtpSettings, LoadModelConfig};
pub use stress::{StressCalculator, StressMetrics};
pub use summarizer::{SessionInput, SessionSummarizer};
pub use training_load::{DailyStressMap, LoadSnapshot, TrainingLoadCalculator};
