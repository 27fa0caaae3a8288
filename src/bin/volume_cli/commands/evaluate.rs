// ABOUTME: Evaluate command for volume-cli
// ABOUTME: Builds a selection session from arguments and renders the volume report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::info;
use volume_advisor::{
    config::AdvisorSettings,
    errors::{AppError, AppResult},
    formatters::{render_report, OutputFormat},
    input::VolumeEntry,
    report::VolumeReport,
    session::VolumeSession,
    ExperienceLevel, MuscleGroup, VolumeAdvisor,
};

/// Evaluate the given volumes and render a report
pub fn run(
    settings: &AdvisorSettings,
    level: ExperienceLevel,
    volumes: &[VolumeEntry],
    muscles: &[MuscleGroup],
    parallel: bool,
    format: OutputFormat,
) -> AppResult<String> {
    if volumes.is_empty() && muscles.is_empty() {
        return Err(AppError::missing_field("--volume or --muscle"));
    }

    let session = VolumeSession::from_entries(level, volumes, muscles);
    let advisor = VolumeAdvisor::new(&settings.advisor);

    let guidance = if parallel {
        let entries: Vec<(MuscleGroup, u32)> = session
            .selected()
            .iter()
            .filter_map(|&group| session.volume(group).map(|volume| (group, volume)))
            .collect();
        advisor.par_evaluate_all(level, &entries)
    } else {
        session.guidance(&advisor)
    };

    let report = VolumeReport::build(level, guidance);
    info!(
        level = %level,
        groups = report.rows.len(),
        optimal = report.summary.optimal,
        "Volume report built"
    );

    render_report(&report, format)
}
