// ABOUTME: Result records produced by the volume advisor and session split calculator
// ABOUTME: VolumeGuidance pairs a user volume with its range, status and message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::{MuscleGroup, VolumeRange, VolumeStatus};

/// Evaluation of one muscle group's weekly volume
///
/// Created fresh on every evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeGuidance {
    /// Muscle group that was evaluated
    pub muscle_group: MuscleGroup,
    /// Lower bound of the recommended range
    pub recommended_min: u32,
    /// Upper bound of the recommended range
    pub recommended_max: u32,
    /// Weekly sets reported by the user
    pub user_volume: u32,
    /// Classification of `user_volume` against the range
    pub status: VolumeStatus,
    /// Advisory text for the status
    pub message: String,
}

impl VolumeGuidance {
    /// Recommended range the guidance was computed against
    #[must_use]
    pub const fn recommended_range(&self) -> VolumeRange {
        VolumeRange::ordered(self.recommended_min, self.recommended_max)
    }
}

/// Weekly and per-session recommendation for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleGroupVolume {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Recommended weekly minimum
    pub weekly_min: u32,
    /// Recommended weekly maximum
    pub weekly_max: u32,
    /// Weekly minimum spread over the training days, one decimal place
    pub per_session_min: f64,
    /// Weekly maximum spread over the training days, one decimal place
    pub per_session_max: f64,
}
