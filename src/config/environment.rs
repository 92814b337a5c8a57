// ABOUTME: Environment configuration for the trainlog tools
// ABOUTME: Reads per-sport FTP, load-model constants, TSS algorithm, log level, and deployment mode
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration
//!
//! Unset variables fall back to defaults. FTP values that cannot be used are
//! treated as unset rather than rejected; malformed integers and unknown
//! algorithm names are configuration errors.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, Level};
use trainlog_core::constants::env_config;
use trainlog_core::errors::AppResult;
use trainlog_core::models::SportKey;
use trainlog_intelligence::config::{sanitize_ftp_text, ConfigError};
use trainlog_intelligence::{AnalyticsConfig, FtpSettings, LoadModelConfig, TssAlgorithm};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output including per-computation figures
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse a bare level name; directive lists such as `warn,hyper=debug` yield `None`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainlogConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Analytics tuning
    pub analytics: AnalyticsConfig,
}

impl TrainlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a load constant is not a positive
    /// integer or the TSS algorithm name is unknown
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let log_level = LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info"));
        let environment =
            Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let defaults = LoadModelConfig::default();
        let load = LoadModelConfig {
            ctl_days: env_u32(env_config::CTL_DAYS, defaults.ctl_days)?,
            atl_days: env_u32(env_config::ATL_DAYS, defaults.atl_days)?,
            window_days: env_u32(env_config::LOAD_WINDOW_DAYS, defaults.window_days)?,
        };

        let tss_algorithm = match env::var(env_config::TSS_ALGORITHM) {
            Ok(name) => name.parse::<TssAlgorithm>()?,
            Err(_) => TssAlgorithm::default(),
        };

        let config = Self {
            log_level,
            environment,
            analytics: AnalyticsConfig {
                ftp: ftp_from_env(),
                load,
                tss_algorithm,
            },
        };
        config.analytics.validate()?;

        info!("{}", config.summary());
        Ok(config)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let ftp = SportKey::ALL
            .iter()
            .map(|key| {
                self.analytics
                    .ftp
                    .get(*key)
                    .map_or_else(|| format!("{key}=unset"), |watts| format!("{key}={watts}"))
            })
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "environment={} log_level={} ctl_days={} atl_days={} window_days={} tss={} ftp=[{ftp}]",
            self.environment,
            self.log_level,
            self.analytics.load.ctl_days,
            self.analytics.load.atl_days,
            self.analytics.load.window_days,
            self.analytics.tss_algorithm.name(),
        )
    }
}

/// Environment variable holding the FTP for `key`
#[must_use]
pub const fn ftp_env_var(key: SportKey) -> &'static str {
    match key {
        SportKey::Ride => env_config::FTP_RIDE,
        SportKey::Run => env_config::FTP_RUN,
        SportKey::Swim => env_config::FTP_SWIM,
        SportKey::Row => env_config::FTP_ROW,
        SportKey::Strength => env_config::FTP_STRENGTH,
        SportKey::Other => env_config::FTP_OTHER,
    }
}

fn ftp_from_env() -> FtpSettings {
    let mut ftp = FtpSettings::default();
    for key in SportKey::ALL {
        if let Ok(raw) = env::var(ftp_env_var(key)) {
            ftp.set(key, sanitize_ftp_text(&raw));
        }
    }
    ftp
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_u32(key: &str, default: u32) -> Result<u32, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::Parse(format!("{key}='{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
