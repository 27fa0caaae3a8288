// ABOUTME: Recommended weekly set range with a min <= max invariant
// ABOUTME: Provides span, containment and rounded midpoint helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;

use crate::errors::ModelError;

/// Inclusive range of weekly working sets
///
/// Fields are private so that `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VolumeRange {
    min: u32,
    max: u32,
}

impl VolumeRange {
    /// Build a range from bounds given in either order
    ///
    /// Used for static tables, where the bounds are literals.
    #[must_use]
    pub const fn ordered(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Build a range, rejecting an inverted pair
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvertedRange` if `min > max`
    pub const fn try_new(min: u32, max: u32) -> Result<Self, ModelError> {
        if min > max {
            return Err(ModelError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive)
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive)
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Width of the range (`max - min`)
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.max - self.min
    }

    /// Whether `volume` falls inside the range, bounds included
    #[must_use]
    pub const fn contains(&self, volume: u32) -> bool {
        volume >= self.min && volume <= self.max
    }

    /// Midpoint rounded half up, used to seed a freshly selected group
    #[must_use]
    pub const fn midpoint_rounded(&self) -> u32 {
        (self.min / 2) + (self.max / 2) + ((self.min % 2 + self.max % 2 + 1) / 2)
    }

    /// Unrounded midpoint
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

impl fmt::Display for VolumeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
