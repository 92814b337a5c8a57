// ABOUTME: Configuration module for the trainlog tools
// ABOUTME: Environment-driven analytics, logging, and deployment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: `TrainlogConfig` loaded from environment variables

/// Environment configuration
pub mod environment;

pub use environment::{Environment, LogLevel, TrainlogConfig};
