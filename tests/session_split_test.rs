// ABOUTME: Tests for weekly to per-session volume splits
// ABOUTME: Validates rounding, output order, and training day validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use volume_core::{ExperienceLevel, MuscleGroup};
use volume_intelligence::{calculate_volumes, ConfigError};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_split_over_four_days() {
    let volumes = calculate_volumes(
        &[MuscleGroup::Chest, MuscleGroup::Glutes],
        ExperienceLevel::Intermediate,
        4,
    )
    .unwrap();

    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0].muscle_group, MuscleGroup::Chest);
    assert_eq!((volumes[0].weekly_min, volumes[0].weekly_max), (12, 16));
    assert!(approx(volumes[0].per_session_min, 3.0));
    assert!(approx(volumes[0].per_session_max, 4.0));

    assert_eq!(volumes[1].muscle_group, MuscleGroup::Glutes);
    assert!(approx(volumes[1].per_session_min, 1.5));
    assert!(approx(volumes[1].per_session_max, 2.5));
}

#[test]
fn test_split_rounds_to_one_decimal() {
    let volumes = calculate_volumes(&[MuscleGroup::Back], ExperienceLevel::Advanced, 7).unwrap();
    // 18/7 = 2.571..., 22/7 = 3.142...
    assert!(approx(volumes[0].per_session_min, 2.6));
    assert!(approx(volumes[0].per_session_max, 3.1));
}

#[test]
fn test_single_day_keeps_weekly_values() {
    let volumes = calculate_volumes(&MuscleGroup::ALL, ExperienceLevel::Beginner, 1).unwrap();
    assert_eq!(volumes.len(), 9);
    for volume in volumes {
        assert!(approx(volume.per_session_min, f64::from(volume.weekly_min)));
        assert!(approx(volume.per_session_max, f64::from(volume.weekly_max)));
    }
}

#[test]
fn test_invalid_training_days() {
    let zero = calculate_volumes(&[MuscleGroup::Chest], ExperienceLevel::Beginner, 0);
    assert!(matches!(zero, Err(ConfigError::InvalidRange(_))));

    let eight = calculate_volumes(&[MuscleGroup::Chest], ExperienceLevel::Beginner, 8);
    assert!(matches!(eight, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_empty_selection_is_empty_split() {
    let volumes = calculate_volumes(&[], ExperienceLevel::Advanced, 3).unwrap();
    assert!(volumes.is_empty());
}
