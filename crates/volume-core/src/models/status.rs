// ABOUTME: Five-way volume classification status with presentation attributes
// ABOUTME: Maps each status to a label, a severity tier and a direction relative to the range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Classification of a weekly volume against its recommended range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeStatus {
    /// Inside the recommended range
    Optimal,
    /// Below the range by at most half its span
    Low,
    /// Below the range by more than half its span
    VeryLow,
    /// Above the range by at most half its span
    High,
    /// Above the range by more than half its span
    VeryHigh,
}

/// Severity tier used to color a status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum StatusSeverity {
    /// No adjustment needed
    Optimal,
    /// Small adjustment suggested
    Caution,
    /// Large adjustment needed
    Critical,
}

/// Which side of the range a volume sits on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VolumeDirection {
    /// Inside the range
    OnTarget,
    /// Under the lower bound
    Below,
    /// Over the upper bound
    Above,
}

impl VolumeStatus {
    /// Every status, optimal first
    pub const ALL: [Self; 5] = [
        Self::Optimal,
        Self::Low,
        Self::VeryLow,
        Self::High,
        Self::VeryHigh,
    ];

    /// Kebab-case identifier ("very-low")
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Low => "low",
            Self::VeryLow => "very-low",
            Self::High => "high",
            Self::VeryHigh => "very-high",
        }
    }

    /// Short human label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Optimal => "Optimal",
            Self::Low => "Slightly Low",
            Self::VeryLow => "Too Low",
            Self::High => "Slightly High",
            Self::VeryHigh => "Too High",
        }
    }

    /// Severity tier (green / yellow / red in a graphical front end)
    #[must_use]
    pub const fn severity(&self) -> StatusSeverity {
        match self {
            Self::Optimal => StatusSeverity::Optimal,
            Self::Low | Self::High => StatusSeverity::Caution,
            Self::VeryLow | Self::VeryHigh => StatusSeverity::Critical,
        }
    }

    /// Direction of the deviation
    #[must_use]
    pub const fn direction(&self) -> VolumeDirection {
        match self {
            Self::Optimal => VolumeDirection::OnTarget,
            Self::Low | Self::VeryLow => VolumeDirection::Below,
            Self::High | Self::VeryHigh => VolumeDirection::Above,
        }
    }

    /// Whether no adjustment is recommended
    #[must_use]
    pub const fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal)
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownVolumeStatus(s.to_owned()))
    }
}

impl VolumeDirection {
    /// Single-character marker for compact output
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::OnTarget => '✓',
            Self::Below => '↓',
            Self::Above => '↑',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&VolumeStatus::VeryHigh).ok();
        assert_eq!(json.as_deref(), Some("\"very-high\""));
        assert_eq!("very_low".parse::<VolumeStatus>(), Ok(VolumeStatus::VeryLow));
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(VolumeStatus::Optimal.severity(), StatusSeverity::Optimal);
        assert_eq!(VolumeStatus::Low.severity(), StatusSeverity::Caution);
        assert_eq!(VolumeStatus::High.severity(), StatusSeverity::Caution);
        assert_eq!(VolumeStatus::VeryLow.severity(), StatusSeverity::Critical);
        assert_eq!(VolumeStatus::VeryHigh.severity(), StatusSeverity::Critical);
    }

    #[test]
    fn test_direction_and_labels() {
        assert_eq!(VolumeStatus::VeryLow.direction(), VolumeDirection::Below);
        assert_eq!(VolumeStatus::High.direction().symbol(), '↑');
        assert_eq!(VolumeStatus::Low.label(), "Slightly Low");
        assert_eq!(VolumeStatus::VeryHigh.label(), "Too High");
    }
}
