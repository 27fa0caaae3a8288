// ABOUTME: Ranges command for volume-cli
// ABOUTME: Prints weekly ranges and their per-session split for an experience level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_advisor::{
    errors::AppResult,
    formatters::{render_session_split, OutputFormat},
    ExperienceLevel, MuscleGroup,
};
use volume_intelligence::calculate_volumes;

/// Render recommended ranges split over `training_days`
pub fn run(
    level: ExperienceLevel,
    muscles: &[MuscleGroup],
    training_days: u8,
    format: OutputFormat,
) -> AppResult<String> {
    let groups = if muscles.is_empty() {
        MuscleGroup::ALL.to_vec()
    } else {
        muscles.to_vec()
    };

    let volumes = calculate_volumes(&groups, level, training_days)?;
    render_session_split(&volumes, training_days, format)
}
