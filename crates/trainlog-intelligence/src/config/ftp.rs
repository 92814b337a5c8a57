// ABOUTME: Per-sport FTP settings with sanitization of user-entered threshold power
// ABOUTME: Non-positive or unparseable values become absent, positive ones are clamped to 50-600 W
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::warn;
use trainlog_core::constants::power::{FTP_MAX_WATTS, FTP_MIN_WATTS};
use trainlog_core::models::SportKey;

/// Sanitize an FTP value
///
/// Absent, non-finite, and non-positive values yield `None`; anything else is
/// clamped into `[50, 600]` watts. Never fails.
#[must_use]
pub fn sanitize_ftp(value: Option<f64>) -> Option<f64> {
    let watts = value?;
    if !watts.is_finite() || watts <= 0.0 {
        return None;
    }
    Some(watts.clamp(FTP_MIN_WATTS, FTP_MAX_WATTS))
}

/// Sanitize an FTP typed as text (form field, environment variable)
///
/// Blank or unparseable text yields `None`.
#[must_use]
pub fn sanitize_ftp_text(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(watts) => sanitize_ftp(Some(watts)),
        Err(e) => {
            warn!(value = %trimmed, error = %e, "Ignoring unparseable FTP value");
            None
        }
    }
}

/// Functional threshold power per sport class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FtpSettings {
    /// Cycling FTP
    #[serde(default)]
    pub ride: Option<f64>,
    /// Running FTP
    #[serde(default)]
    pub run: Option<f64>,
    /// Swimming FTP
    #[serde(default)]
    pub swim: Option<f64>,
    /// Rowing FTP
    #[serde(default)]
    pub row: Option<f64>,
    /// Strength FTP
    #[serde(default)]
    pub strength: Option<f64>,
    /// Fallback FTP for unclassified sports
    #[serde(default)]
    pub other: Option<f64>,
}

impl FtpSettings {
    /// Sanitized FTP for a sport class
    #[must_use]
    pub fn get(&self, key: SportKey) -> Option<f64> {
        sanitize_ftp(self.raw(key))
    }

    /// Store a sanitized FTP for a sport class
    pub fn set(&mut self, key: SportKey, watts: Option<f64>) {
        let slot = match key {
            SportKey::Ride => &mut self.ride,
            SportKey::Run => &mut self.run,
            SportKey::Swim => &mut self.swim,
            SportKey::Row => &mut self.row,
            SportKey::Strength => &mut self.strength,
            SportKey::Other => &mut self.other,
        };
        *slot = sanitize_ftp(watts);
    }

    /// Builder-style [`FtpSettings::set`]
    #[must_use]
    pub fn with(mut self, key: SportKey, watts: f64) -> Self {
        self.set(key, Some(watts));
        self
    }

    /// Copy with every value sanitized, for settings loaded from storage
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut clean = Self::default();
        for key in SportKey::ALL {
            clean.set(key, self.raw(key));
        }
        clean
    }

    const fn raw(&self, key: SportKey) -> Option<f64> {
        match key {
            SportKey::Ride => self.ride,
            SportKey::Run => self.run,
            SportKey::Swim => self.swim,
            SportKey::Row => self.row,
            SportKey::Strength => self.strength,
            SportKey::Other => self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_ftp_clamps_and_rejects() {
        assert_eq!(sanitize_ftp(None), None);
        assert_eq!(sanitize_ftp(Some(0.0)), None);
        assert_eq!(sanitize_ftp(Some(-250.0)), None);
        assert_eq!(sanitize_ftp(Some(f64::NAN)), None);
        assert_eq!(sanitize_ftp(Some(20.0)), Some(50.0));
        assert_eq!(sanitize_ftp(Some(250.0)), Some(250.0));
        assert_eq!(sanitize_ftp(Some(900.0)), Some(600.0));
    }

    #[test]
    fn test_sanitize_ftp_text() {
        assert_eq!(sanitize_ftp_text("   "), None);
        assert_eq!(sanitize_ftp_text("abc"), None);
        assert_eq!(sanitize_ftp_text(" 280 "), Some(280.0));
        assert_eq!(sanitize_ftp_text("1000"), Some(600.0));
    }

    #[test]
    fn test_settings_get_sanitizes_raw_values() {
        let settings = FtpSettings {
            ride: Some(30.0),
            run: Some(-1.0),
            ..FtpSettings::default()
        };
        assert_eq!(settings.get(SportKey::Ride), Some(50.0));
        assert_eq!(settings.get(SportKey::Run), None);
        assert_eq!(settings.get(SportKey::Swim), None);

        let clean = settings.sanitized();
        assert_eq!(clean.ride, Some(50.0));
        assert_eq!(clean.run, None);
    }
}
