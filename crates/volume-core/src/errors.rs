// ABOUTME: Error types for parsing and constructing core volume models
// ABOUTME: Covers unknown muscle group, experience level, status names and inverted ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised while parsing or constructing core models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Text did not name one of the nine supported muscle groups
    #[error("Unknown muscle group: {0}")]
    UnknownMuscleGroup(String),

    /// Text did not name beginner, intermediate or advanced
    #[error("Unknown experience level: {0}")]
    UnknownExperienceLevel(String),

    /// Text did not name a volume status
    #[error("Unknown volume status: {0}")]
    UnknownVolumeStatus(String),

    /// Range lower bound exceeds its upper bound
    #[error("Invalid volume range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Requested lower bound
        min: u32,
        /// Requested upper bound
        max: u32,
    },
}
