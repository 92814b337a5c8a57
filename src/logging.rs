// ABOUTME: Logging configuration and structured logging setup for the trainlog tools
// ABOUTME: Configures log level, output format, and the tracing subscriber writing to stderr
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::Result;
use serde_json::json;
use std::env;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use trainlog_core::constants::service_names;
use uuid::Uuid;

use crate::config::{Environment, LogLevel};

/// Targets that follow the configured level even when `RUST_LOG` sets a quieter default
const CRATE_TARGETS: [&str; 3] = ["trainlog", "trainlog_core", "trainlog_intelligence"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminal use
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::TRAINLOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(LogFormat::Compact);

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        // In production, use more detailed logging
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::TRAINLOG.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Replace the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter: `RUST_LOG` when set, otherwise the configured level
    ///
    /// A bare level name also pins the trainlog crates to that level, so
    /// `--verbose` still raises them under a quieter `RUST_LOG`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let Some(level) = LogLevel::parse(&self.level) else {
            return filter;
        };
        let level = level.to_tracing_level();
        CRATE_TARGETS.iter().fold(filter, |filter, target| {
            match format!("{target}={level}").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = subscriber_fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = subscriber_fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = subscriber_fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "trainlog starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": self.format.to_string(),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        debug!("Configuration loaded: {}", config_summary);
    }
}

/// Structured log events for pairing and cascade operations
pub struct AnalyticsLogger;

impl AnalyticsLogger {
    /// Log a pair creation, including any pairs it displaced
    pub fn log_pair_created(pair_id: Uuid, planned_id: &str, completed_id: &str, displaced: usize) {
        info!(
            pair.id = %pair_id,
            pair.planned_id = %planned_id,
            pair.completed_id = %completed_id,
            pair.displaced = displaced,
            "Pair created"
        );
    }

    /// Log a pair removal
    pub fn log_pairs_removed(reason: &str, key: &str, removed: usize) {
        if removed == 0 {
            return;
        }
        info!(
            pair.removal_reason = %reason,
            pair.key = %key,
            pair.removed = removed,
            "Pairs removed"
        );
    }
}
