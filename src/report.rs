// ABOUTME: Volume report assembly for rendering guidance, charts and summaries
// ABOUTME: Orders chart bars by volume, computes the axis bound and counts statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Report
//!
//! Everything a presentation layer needs to draw the results panel, derived
//! from a list of [`VolumeGuidance`] records without further lookups.

use serde::Serialize;
use volume_core::constants::chart::AXIS_PADDING_SETS;
use volume_core::{
    ExperienceLevel, MuscleGroup, StatusSeverity, VolumeGuidance, VolumeRange, VolumeStatus,
};
use volume_intelligence::general_range;

/// One bar of the volume comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Capitalized group name for axis labels
    pub display_name: String,
    /// Bar height
    pub user_volume: u32,
    /// Recommended lower bound
    pub recommended_min: u32,
    /// Recommended upper bound
    pub recommended_max: u32,
    /// Midpoint of the recommended range
    pub recommended_avg: f64,
    /// Classification
    pub status: VolumeStatus,
    /// Severity tier used for the bar color
    pub severity: StatusSeverity,
}

/// Chart series with its vertical axis bound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeChart {
    /// Bars sorted by user volume, highest first
    pub bars: Vec<ChartBar>,
    /// Axis maximum: tallest of user volume or recommended max, plus padding
    pub axis_max: u32,
}

/// Count of guidance records per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Optimal count
    pub optimal: usize,
    /// Low count
    pub low: usize,
    /// Very-low count
    pub very_low: usize,
    /// High count
    pub high: usize,
    /// Very-high count
    pub very_high: usize,
}

impl StatusSummary {
    fn record(&mut self, status: VolumeStatus) {
        match status {
            VolumeStatus::Optimal => self.optimal += 1,
            VolumeStatus::Low => self.low += 1,
            VolumeStatus::VeryLow => self.very_low += 1,
            VolumeStatus::High => self.high += 1,
            VolumeStatus::VeryHigh => self.very_high += 1,
        }
    }

    /// Total number of records counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.optimal + self.low + self.very_low + self.high + self.very_high
    }
}

/// Guidance plus derived chart and summary data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeReport {
    /// Experience level the guidance was computed at
    pub experience_level: ExperienceLevel,
    /// Level-wide range shown alongside the per-group results
    pub general_range: VolumeRange,
    /// Guidance records in input order
    pub rows: Vec<VolumeGuidance>,
    /// Chart data
    pub chart: VolumeChart,
    /// Status counts
    pub summary: StatusSummary,
}

impl VolumeReport {
    /// Build a report from guidance computed at `experience_level`
    #[must_use]
    pub fn build(experience_level: ExperienceLevel, rows: Vec<VolumeGuidance>) -> Self {
        let mut summary = StatusSummary::default();
        for row in &rows {
            summary.record(row.status);
        }

        Self {
            experience_level,
            general_range: general_range(experience_level),
            chart: build_chart(&rows),
            rows,
            summary,
        }
    }

    /// Whether every evaluated group is inside its range
    #[must_use]
    pub fn all_optimal(&self) -> bool {
        self.rows.iter().all(|row| row.status.is_optimal())
    }
}

fn build_chart(rows: &[VolumeGuidance]) -> VolumeChart {
    let mut bars: Vec<ChartBar> = rows
        .iter()
        .map(|row| ChartBar {
            muscle_group: row.muscle_group,
            display_name: row.muscle_group.display_name(),
            user_volume: row.user_volume,
            recommended_min: row.recommended_min,
            recommended_max: row.recommended_max,
            recommended_avg: row.recommended_range().midpoint(),
            status: row.status,
            severity: row.status.severity(),
        })
        .collect();
    // sort_by is stable, so ties keep input order
    bars.sort_by(|a, b| b.user_volume.cmp(&a.user_volume));

    let axis_max = bars
        .iter()
        .map(|bar| bar.user_volume.max(bar.recommended_max))
        .max()
        .map_or(0, |tallest| tallest.saturating_add(AXIS_PADDING_SETS));

    VolumeChart { bars, axis_max }
}
