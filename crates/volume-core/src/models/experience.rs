// ABOUTME: Training experience level enumeration
// ABOUTME: Ordered beginner < intermediate < advanced with parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::capitalize;
use crate::errors::ModelError;

/// Training experience of the lifter
///
/// Ordered so that recommended ranges never decrease as the level increases.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Less than roughly a year of consistent training
    #[default]
    Beginner,
    /// Several years of consistent training
    Intermediate,
    /// Close to genetic potential, needs the most volume to progress
    Advanced,
}

impl ExperienceLevel {
    /// Every level, lowest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Human-readable name ("Intermediate")
    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ModelError::UnknownExperienceLevel(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(ExperienceLevel::Beginner < ExperienceLevel::Intermediate);
        assert!(ExperienceLevel::Intermediate < ExperienceLevel::Advanced);
    }

    #[test]
    fn test_level_round_trips_through_text() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.to_string().parse::<ExperienceLevel>(), Ok(level));
        }
        assert_eq!(ExperienceLevel::Advanced.display_name(), "Advanced");
    }
}
