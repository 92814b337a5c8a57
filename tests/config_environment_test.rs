// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates FTP sanitizing, load constant overrides, algorithm selection, and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use trainlog::config::environment::ftp_env_var;
use trainlog::config::{Environment, LogLevel, TrainlogConfig};
use trainlog::errors::ErrorCode;
use trainlog::logging::{LogFormat, LoggingConfig};
use trainlog_core::constants::env_config;
use trainlog_core::models::SportKey;
use trainlog_intelligence::TssAlgorithm;

const MANAGED_VARS: &[&str] = &[
    env_config::FTP_RIDE,
    env_config::FTP_RUN,
    env_config::FTP_SWIM,
    env_config::FTP_ROW,
    env_config::FTP_STRENGTH,
    env_config::FTP_OTHER,
    env_config::CTL_DAYS,
    env_config::ATL_DAYS,
    env_config::LOAD_WINDOW_DAYS,
    env_config::TSS_ALGORITHM,
    "ENVIRONMENT",
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = TrainlogConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.analytics.load.ctl_days, 42);
    assert_eq!(config.analytics.load.atl_days, 7);
    assert_eq!(config.analytics.load.window_days, 120);
    assert_eq!(config.analytics.tss_algorithm, TssAlgorithm::default());
    for key in SportKey::ALL {
        assert!(config.analytics.ftp.get(key).is_none());
    }
}

#[test]
#[serial]
fn test_ftp_values_are_sanitized() {
    clear_env();
    env::set_var(ftp_env_var(SportKey::Ride), "265");
    env::set_var(ftp_env_var(SportKey::Run), "9000");
    env::set_var(ftp_env_var(SportKey::Swim), "-5");
    env::set_var(ftp_env_var(SportKey::Row), "not a number");
    env::set_var(ftp_env_var(SportKey::Other), "  ");

    let config = TrainlogConfig::from_env().unwrap();
    let ftp = config.analytics.ftp;
    assert_eq!(ftp.get(SportKey::Ride), Some(265.0));
    assert_eq!(ftp.get(SportKey::Run), Some(600.0));
    assert_eq!(ftp.get(SportKey::Swim), None);
    assert_eq!(ftp.get(SportKey::Row), None);
    assert_eq!(ftp.get(SportKey::Other), None);
    clear_env();
}

#[test]
#[serial]
fn test_load_constants_and_algorithm_overrides() {
    clear_env();
    env::set_var(env_config::CTL_DAYS, "28");
    env::set_var(env_config::ATL_DAYS, " 5 ");
    env::set_var(env_config::LOAD_WINDOW_DAYS, "90");
    env::set_var(env_config::TSS_ALGORITHM, "avg_power");
    env::set_var("ENVIRONMENT", "production");

    let config = TrainlogConfig::from_env().unwrap();
    assert_eq!(config.analytics.load.ctl_days, 28);
    assert_eq!(config.analytics.load.atl_days, 5);
    assert_eq!(config.analytics.load.window_days, 90);
    assert_eq!(config.analytics.tss_algorithm, TssAlgorithm::AvgPower);
    assert!(config.environment.is_production());
    assert!(config.summary().contains("tss=avg_power"));
    clear_env();
}

#[test]
#[serial]
fn test_malformed_values_are_rejected() {
    clear_env();
    env::set_var(env_config::CTL_DAYS, "forty-two");
    let error = TrainlogConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_env();
    env::set_var(env_config::ATL_DAYS, "0");
    let error = TrainlogConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);

    clear_env();
    env::set_var(env_config::TSS_ALGORITHM, "hr_based");
    let error = TrainlogConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("hr_based"));
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "trainlog-test");

    let logging = LoggingConfig::from_env();
    assert_eq!(logging.environment, Environment::Production);
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert!(logging.include_thread);
    assert_eq!(logging.service_name, "trainlog-test");

    env::set_var("LOG_FORMAT", "fancy");
    env::set_var("ENVIRONMENT", "prod");
    let logging = LoggingConfig::from_env();
    assert_eq!(logging.format, LogFormat::Compact);
    assert!(logging.include_location);

    env::set_var("ENVIRONMENT", "staging");
    assert!(!LoggingConfig::from_env().include_location);
    clear_env();
}
