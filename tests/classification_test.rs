// ABOUTME: Tests for volume classification boundaries
// ABOUTME: Covers inclusive bounds, the strict half-span threshold, and zero-width ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use volume_core::{ExperienceLevel, MuscleGroup, VolumeRange, VolumeStatus};
use volume_intelligence::{classify_volume, ReferenceTable};

fn chest_intermediate() -> VolumeRange {
    ReferenceTable::lookup(MuscleGroup::Chest, ExperienceLevel::Intermediate)
}

#[test]
fn test_bounds_are_optimal() {
    let range = chest_intermediate();
    assert_eq!((range.min(), range.max()), (12, 16));
    assert_eq!(classify_volume(12, range), VolumeStatus::Optimal);
    assert_eq!(classify_volume(14, range), VolumeStatus::Optimal);
    assert_eq!(classify_volume(16, range), VolumeStatus::Optimal);
}

#[test]
fn test_deficit_boundaries() {
    let range = chest_intermediate();
    // span 4, threshold 2
    assert_eq!(classify_volume(11, range), VolumeStatus::Low);
    assert_eq!(classify_volume(10, range), VolumeStatus::Low);
    assert_eq!(classify_volume(9, range), VolumeStatus::VeryLow);
    assert_eq!(classify_volume(0, range), VolumeStatus::VeryLow);
}

#[test]
fn test_excess_boundaries() {
    let range = chest_intermediate();
    assert_eq!(classify_volume(17, range), VolumeStatus::High);
    assert_eq!(classify_volume(18, range), VolumeStatus::High);
    assert_eq!(classify_volume(19, range), VolumeStatus::VeryHigh);
    assert_eq!(classify_volume(u32::MAX, range), VolumeStatus::VeryHigh);
}

#[test]
fn test_zero_span_range() {
    let range = VolumeRange::try_new(10, 10).unwrap();
    assert_eq!(classify_volume(9, range), VolumeStatus::VeryLow);
    assert_eq!(classify_volume(10, range), VolumeStatus::Optimal);
    assert_eq!(classify_volume(11, range), VolumeStatus::VeryHigh);
}

#[test]
fn test_zero_volume_routes_through_deficit() {
    // glutes/beginner 4-8: deficit 4 > 2
    let glutes = ReferenceTable::lookup(MuscleGroup::Glutes, ExperienceLevel::Beginner);
    assert_eq!(classify_volume(0, glutes), VolumeStatus::VeryLow);

    // narrow span: shoulders/advanced 18-20, span 2, threshold 1
    let shoulders = ReferenceTable::lookup(MuscleGroup::Shoulders, ExperienceLevel::Advanced);
    assert_eq!(classify_volume(17, shoulders), VolumeStatus::Low);
    assert_eq!(classify_volume(16, shoulders), VolumeStatus::VeryLow);
    assert_eq!(classify_volume(21, shoulders), VolumeStatus::High);
    assert_eq!(classify_volume(22, shoulders), VolumeStatus::VeryHigh);
}
