// ABOUTME: Spreads weekly recommended set ranges across training days
// ABOUTME: Per-session bounds are rounded to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_core::constants::schedule::{MAX_TRAINING_DAYS, MIN_TRAINING_DAYS};
use volume_core::{ExperienceLevel, MuscleGroup, MuscleGroupVolume};

use crate::config::ConfigError;
use crate::reference_table::ReferenceTable;

/// Weekly and per-session recommendations for the selected groups
///
/// Output follows the order of `muscle_groups`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidRange` if `training_days` is not between 1 and 7
pub fn calculate_volumes(
    muscle_groups: &[MuscleGroup],
    level: ExperienceLevel,
    training_days: u8,
) -> Result<Vec<MuscleGroupVolume>, ConfigError> {
    if !(MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&training_days) {
        return Err(ConfigError::InvalidRange(
            "training days must be between 1 and 7",
        ));
    }

    let days = f64::from(training_days);
    Ok(muscle_groups
        .iter()
        .map(|&muscle_group| {
            let range = ReferenceTable::lookup(muscle_group, level);
            MuscleGroupVolume {
                muscle_group,
                weekly_min: range.min(),
                weekly_max: range.max(),
                per_session_min: round_to_tenth(f64::from(range.min()) / days),
                per_session_max: round_to_tenth(f64::from(range.max()) / days),
            }
        })
        .collect())
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
