// ABOUTME: Core data models for weekly training volume guidance
// ABOUTME: Re-exports muscle group, experience level, range, status and guidance types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Closed enumerations and immutable value records shared by every crate in
//! the workspace. None of these types hold state beyond their values: a
//! `VolumeGuidance` is computed on demand and discarded once rendered.

/// Experience level enumeration (beginner, intermediate, advanced)
mod experience;
/// Result records produced by the advisor
mod guidance;
/// Muscle group enumeration
mod muscle_group;
/// Recommended set ranges
mod range;
/// Volume classification status and its presentation attributes
mod status;

pub use experience::ExperienceLevel;
pub use guidance::{MuscleGroupVolume, VolumeGuidance};
pub use muscle_group::MuscleGroup;
pub use range::VolumeRange;
pub use status::{StatusSeverity, VolumeDirection, VolumeStatus};

/// Uppercase the first character of a lowercase identifier ("chest" -> "Chest")
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
