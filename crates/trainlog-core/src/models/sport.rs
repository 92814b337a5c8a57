// ABOUTME: Sport classification keys that select which FTP reference applies to a session
// ABOUTME: Maps free-form sport labels onto a fixed set of FTP classes by substring priority
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// FTP class a session belongs to
///
/// Device and feed sport labels are free-form ("VirtualRide", "Trail Run",
/// "Indoor Cycle"); every label collapses onto one of these keys, and the
/// key picks the threshold power used for stress calculations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SportKey {
    /// Cycling of any kind (ride, cycle, bike)
    Ride,
    /// Running and walking
    Run,
    /// Swimming
    Swim,
    /// Rowing
    Row,
    /// Strength and weight training
    Strength,
    /// Anything not matched above
    #[default]
    Other,
}

impl SportKey {
    /// All keys in classification priority order
    pub const ALL: [Self; 6] = [
        Self::Ride,
        Self::Run,
        Self::Swim,
        Self::Row,
        Self::Strength,
        Self::Other,
    ];

    /// Classify a sport label
    ///
    /// Case-insensitive substring match in fixed priority order
    /// `ride > run > swim > row > strength`, else [`SportKey::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |needle: &str| label.contains(needle);

        if has("ride") || has("cycle") || has("bike") {
            Self::Ride
        } else if has("run") || has("walk") {
            Self::Run
        } else if has("swim") {
            Self::Swim
        } else if has("row") {
            Self::Row
        } else if has("strength") || has("weight") {
            Self::Strength
        } else {
            Self::Other
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ride => "ride",
            Self::Run => "run",
            Self::Swim => "swim",
            Self::Row => "row",
            Self::Strength => "strength",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ride" => Ok(Self::Ride),
            "run" => Ok(Self::Run),
            "swim" => Ok(Self::Swim),
            "row" => Ok(Self::Row),
            "strength" => Ok(Self::Strength),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown sport key: '{other}'. Valid options: ride, run, swim, row, strength, other"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_classification() {
        assert_eq!(SportKey::from_label("VirtualRide"), SportKey::Ride);
        assert_eq!(SportKey::from_label("Cycle Commute"), SportKey::Ride);
        assert_eq!(SportKey::from_label("Mtn Bike"), SportKey::Ride);
        assert_eq!(SportKey::from_label("Trail Run"), SportKey::Run);
        assert_eq!(SportKey::from_label("Walk"), SportKey::Run);
        assert_eq!(SportKey::from_label("open_water_swim"), SportKey::Swim);
        assert_eq!(SportKey::from_label("Rowing"), SportKey::Row);
        assert_eq!(SportKey::from_label("WeightTraining"), SportKey::Strength);
        assert_eq!(SportKey::from_label("Yoga"), SportKey::Other);
        assert_eq!(SportKey::from_label(""), SportKey::Other);
    }

    #[test]
    fn test_priority_order() {
        // "ride" outranks "run" when both appear
        assert_eq!(SportKey::from_label("Run-Ride Brick"), SportKey::Ride);
        // "run" outranks "row"
        assert_eq!(SportKey::from_label("row then run"), SportKey::Run);
    }

    #[test]
    fn test_from_str_round_trip_names() {
        for key in SportKey::ALL {
            assert_eq!(key.as_str().parse::<SportKey>().unwrap(), key);
        }
        assert!("kayak".parse::<SportKey>().is_err());
    }
}
