// ABOUTME: Muscle group enumeration for weekly volume tracking
// ABOUTME: Defines the nine supported groups with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::capitalize;
use crate::errors::ModelError;

/// Muscle groups with evidence-based weekly volume recommendations
///
/// The set is closed. Variant order is the canonical order used by listings
/// and the reference table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps and rhomboids
    Back,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteal muscles
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
}

impl MuscleGroup {
    /// Every muscle group in canonical order
    pub const ALL: [Self; 9] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
    ];

    /// Lowercase identifier used in serialization and command-line input
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
        }
    }

    /// Human-readable name with a leading capital ("Hamstrings")
    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownMuscleGroup(s.to_owned()))
    }
}
