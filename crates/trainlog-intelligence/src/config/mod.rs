// ABOUTME: Configuration module for the analytics crate
// ABOUTME: FTP settings, load-model constants, and TSS algorithm selection with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics configuration
//!
//! Types here are plain data with `Default` impls; loading them from the
//! environment happens in the root package.

/// Configuration error types
pub mod error;
/// Per-sport FTP settings and sanitization
pub mod ftp;

pub use error::ConfigError;
pub use ftp::{sanitize_ftp, sanitize_ftp_text, FtpSettings};

use serde::{Deserialize, Serialize};
use trainlog_core::constants::load;

use crate::algorithms::TssAlgorithm;

/// Performance-management model constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadModelConfig {
    /// CTL time constant in days
    pub ctl_days: u32,
    /// ATL time constant in days
    pub atl_days: u32,
    /// Number of days evaluated per query
    pub window_days: u32,
}

impl Default for LoadModelConfig {
    fn default() -> Self {
        Self {
            ctl_days: load::CTL_TAU_DAYS,
            atl_days: load::ATL_TAU_DAYS,
            window_days: load::WINDOW_DAYS,
        }
    }
}

impl LoadModelConfig {
    /// Validate the time constants
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when any constant is zero
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.ctl_days == 0 {
            return Err(ConfigError::ValueOutOfRange("ctl_days must be positive"));
        }
        if self.atl_days == 0 {
            return Err(ConfigError::ValueOutOfRange("atl_days must be positive"));
        }
        if self.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange("window_days must be positive"));
        }
        Ok(())
    }
}

/// Everything the analytics computations can be tuned with
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Threshold power per sport class
    #[serde(default)]
    pub ftp: FtpSettings,
    /// Load model constants
    #[serde(default)]
    pub load: LoadModelConfig,
    /// TSS formula
    #[serde(default)]
    pub tss_algorithm: TssAlgorithm,
}

impl AnalyticsConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the load model or the NP window is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.load.validate()?;
        if self.tss_algorithm.window_seconds() == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "normalized power window must be positive",
            ));
        }
        Ok(())
    }
}
