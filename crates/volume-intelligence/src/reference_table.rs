// ABOUTME: Evidence-based weekly set ranges per muscle group and experience level
// ABOUTME: Total lookup over the 9x3 product of muscle groups and levels, plus level-wide ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reference ranges based on Maximum Adaptive Volume (MAV) estimates.
//!
//! The lookup is an exhaustive `match`: adding a muscle group or a level
//! without its ranges fails to compile.

use serde::Serialize;
use volume_core::{ExperienceLevel, MuscleGroup, VolumeRange};

/// One muscle group's ranges at every experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRow {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Beginner range
    pub beginner: VolumeRange,
    /// Intermediate range
    pub intermediate: VolumeRange,
    /// Advanced range
    pub advanced: VolumeRange,
}

/// Immutable table of recommended weekly set ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceTable;

impl ReferenceTable {
    /// Recommended range for a muscle group at an experience level
    #[must_use]
    pub const fn lookup(muscle_group: MuscleGroup, level: ExperienceLevel) -> VolumeRange {
        use ExperienceLevel::{Advanced, Beginner, Intermediate};
        use MuscleGroup::{
            Back, Biceps, Calves, Chest, Glutes, Hamstrings, Quads, Shoulders, Triceps,
        };

        let (min, max) = match (muscle_group, level) {
            (Chest | Calves, Beginner) => (8, 12),
            (Chest | Calves, Intermediate) => (12, 16),
            (Chest | Calves, Advanced) => (16, 20),

            (Back, Beginner) => (10, 14),
            (Back, Intermediate) => (14, 18),
            (Back, Advanced) => (18, 22),

            (Shoulders, Beginner) => (8, 12),
            (Shoulders, Intermediate) => (14, 18),
            (Shoulders, Advanced) => (18, 20),

            (Biceps | Triceps | Hamstrings, Beginner) => (6, 10),
            (Biceps | Triceps | Hamstrings, Intermediate) => (10, 14),
            (Biceps | Triceps | Hamstrings, Advanced) => (14, 16),

            (Quads, Beginner) => (8, 12),
            (Quads, Intermediate) => (12, 16),
            (Quads, Advanced) => (16, 18),

            (Glutes, Beginner) => (4, 8),
            (Glutes, Intermediate) => (6, 10),
            (Glutes, Advanced) => (10, 12),
        };

        VolumeRange::ordered(min, max)
    }

    /// Every (group, level, range) entry in canonical order
    pub fn entries() -> impl Iterator<Item = (MuscleGroup, ExperienceLevel, VolumeRange)> {
        MuscleGroup::ALL.into_iter().flat_map(|group| {
            ExperienceLevel::ALL
                .into_iter()
                .map(move |level| (group, level, Self::lookup(group, level)))
        })
    }

    /// The table pivoted to one row per muscle group, in canonical order
    #[must_use]
    pub fn rows() -> Vec<ReferenceRow> {
        MuscleGroup::ALL
            .into_iter()
            .map(|muscle_group| ReferenceRow {
                muscle_group,
                beginner: Self::lookup(muscle_group, ExperienceLevel::Beginner),
                intermediate: Self::lookup(muscle_group, ExperienceLevel::Intermediate),
                advanced: Self::lookup(muscle_group, ExperienceLevel::Advanced),
            })
            .collect()
    }
}

/// Level-wide range summarizing all muscle groups at an experience level
#[must_use]
pub const fn general_range(level: ExperienceLevel) -> VolumeRange {
    match level {
        ExperienceLevel::Beginner => VolumeRange::ordered(8, 12),
        ExperienceLevel::Intermediate => VolumeRange::ordered(10, 16),
        ExperienceLevel::Advanced => VolumeRange::ordered(14, 20),
    }
}
