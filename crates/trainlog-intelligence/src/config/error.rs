// ABOUTME: Configuration error types for analytics settings validation
// ABOUTME: Defines error variants for parse failures and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analytics settings validation.

use thiserror::Error;
use trainlog_core::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
            ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string())
    }
}
