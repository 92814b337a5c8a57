// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Load-model time constants, power thresholds, compliance bands, and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Workout-type intensity table used when no measured stress exists
pub mod intensity;

/// Performance-management model constants
pub mod load {
    /// Chronic training load time constant in days ("fitness")
    pub const CTL_TAU_DAYS: u32 = 42;
    /// Acute training load time constant in days ("fatigue")
    pub const ATL_TAU_DAYS: u32 = 7;
    /// Length of the rolling window evaluated for each query date
    pub const WINDOW_DAYS: u32 = 120;
}

/// Power and FTP constants
pub mod power {
    /// Trailing window for normalized power in seconds
    pub const NP_WINDOW_SECONDS: u32 = 30;
    /// Lowest FTP accepted after sanitization
    pub const FTP_MIN_WATTS: f64 = 50.0;
    /// Highest FTP accepted after sanitization
    pub const FTP_MAX_WATTS: f64 = 600.0;
    /// TSS scale: one hour at threshold equals this many points
    pub const TSS_PER_THRESHOLD_HOUR: f64 = 100.0;
}

/// Compliance band thresholds, in percent of plan
pub mod compliance {
    /// Lower bound of the on-target band (inclusive)
    pub const ON_TARGET_LOW: f64 = 80.0;
    /// Upper bound of the on-target band (inclusive)
    pub const ON_TARGET_HIGH: f64 = 120.0;
    /// Lower bound of the moderate-deviation band (inclusive)
    pub const MODERATE_LOW: f64 = 50.0;
    /// Upper bound of the moderate-deviation band (inclusive)
    pub const MODERATE_HIGH: f64 = 150.0;
}

/// Unit conversion constants
pub mod units {
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Percentage multiplier
    pub const PERCENTAGE_MULTIPLIER: f64 = 100.0;
}

/// Workout normalization bounds
pub mod workout {
    /// Lowest user intensity rating
    pub const INTENSITY_MIN: f64 = 1.0;
    /// Highest user intensity rating
    pub const INTENSITY_MAX: f64 = 10.0;
    /// Intensity assumed when none is given
    pub const INTENSITY_DEFAULT: f64 = 6.0;
    /// Highest "feel" rating
    pub const FEEL_MAX: u8 = 5;
    /// Highest rate of perceived exertion
    pub const RPE_MAX: u8 = 10;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const TRAINLOG: &str = "trainlog";
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// FTP for cycling activities
    pub const FTP_RIDE: &str = "TRAINLOG_FTP_RIDE";
    /// FTP for running activities
    pub const FTP_RUN: &str = "TRAINLOG_FTP_RUN";
    /// FTP for swimming activities
    pub const FTP_SWIM: &str = "TRAINLOG_FTP_SWIM";
    /// FTP for rowing activities
    pub const FTP_ROW: &str = "TRAINLOG_FTP_ROW";
    /// FTP for strength sessions
    pub const FTP_STRENGTH: &str = "TRAINLOG_FTP_STRENGTH";
    /// FTP for anything else
    pub const FTP_OTHER: &str = "TRAINLOG_FTP_OTHER";
    /// CTL time constant override
    pub const CTL_DAYS: &str = "TRAINLOG_CTL_DAYS";
    /// ATL time constant override
    pub const ATL_DAYS: &str = "TRAINLOG_ATL_DAYS";
    /// Load window override
    pub const LOAD_WINDOW_DAYS: &str = "TRAINLOG_LOAD_WINDOW_DAYS";
    /// TSS algorithm selection
    pub const TSS_ALGORITHM: &str = "TRAINLOG_TSS_ALGORITHM";
}
