// ABOUTME: Error codes and the contextual AppError every fallible trainlog operation returns
// ABOUTME: Analytics, config, IO, and serde failures converge on AppError through From impls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Library code returns [`AppResult`]. Each failure carries an [`ErrorCode`]
//! naming its category, a message for the operator, and the underlying error
//! when there is one.

/// Domain errors raised by the analytics computations
pub mod analytics;

pub use analytics::AnalyticsError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Argument rejected before any work was done
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input document could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// A session contained no usable timestamped samples
    #[serde(rename = "NO_SAMPLES")]
    NoSamples,
    /// Configuration value outside its valid range
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Configuration value could not be parsed
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Reading or writing a file failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Encoding an output document failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
}

impl ErrorCode {
    /// Short description used as the display prefix
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::NoSamples => "The session contains no usable samples",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed input document
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<AnalyticsError> for AppError {
    fn from(error: AnalyticsError) -> Self {
        let code = match error {
            AnalyticsError::NoSamples => ErrorCode::NoSamples,
            AnalyticsError::InvalidDate(_) => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string())
    }
}

// Input parsing maps its failures to InvalidFormat itself, so a bare `?` on
// serde_json only happens when encoding output.
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
