// ABOUTME: Output format abstraction for rendering volume reports
// ABOUTME: Supports JSON (machine-readable) and plain text tables (human-readable)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Reports are plain `Serialize` values; JSON output is `serde_json` pretty
//! printing. Text output is a fixed-width table intended for terminals.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use volume_core::MuscleGroupVolume;
use volume_intelligence::ReferenceRow;

use crate::errors::{AppError, AppResult};
use crate::report::VolumeReport;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if serialization fails
pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a volume report in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn render_report(report: &VolumeReport, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(report_table(report)),
    }
}

/// Render per-session recommendations in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn render_session_split(
    volumes: &[MuscleGroupVolume],
    training_days: u8,
    format: OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(&volumes),
        OutputFormat::Text => {
            let mut out = format!(
                "{:<12} {:>10} {:>22}\n",
                "Muscle",
                "Sets/week",
                format!("Sets/session ({training_days}d)")
            );
            for volume in volumes {
                let _ = writeln!(
                    out,
                    "{:<12} {:>10} {:>22}",
                    volume.muscle_group.display_name(),
                    format!("{}-{}", volume.weekly_min, volume.weekly_max),
                    format!("{:.1}-{:.1}", volume.per_session_min, volume.per_session_max),
                );
            }
            Ok(out)
        }
    }
}

/// Render the full reference table in the requested format
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` if JSON serialization fails
pub fn render_reference_table(rows: &[ReferenceRow], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Text => {
            let mut out = format!(
                "{:<12} {:>10} {:>13} {:>10}\n",
                "Muscle", "Beginner", "Intermediate", "Advanced"
            );
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:<12} {:>10} {:>13} {:>10}",
                    row.muscle_group.display_name(),
                    row.beginner.to_string(),
                    row.intermediate.to_string(),
                    row.advanced.to_string(),
                );
            }
            Ok(out)
        }
    }
}

fn report_table(report: &VolumeReport) -> String {
    if report.rows.is_empty() {
        return "Select muscle groups and enter your weekly sets to receive guidance.\n"
            .to_owned();
    }

    let mut out = format!(
        "Level: {} (general range {} sets/week)\n\n",
        report.experience_level.display_name(),
        report.general_range
    );
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>8}   {:<15} Advice",
        "Muscle", "Sets", "Range", "Status"
    );
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>8}   {} {:<13} {}",
            row.muscle_group.display_name(),
            row.user_volume,
            format!("{}-{}", row.recommended_min, row.recommended_max),
            row.status.direction().symbol(),
            row.status.label(),
            row.message
        );
    }
    let _ = writeln!(
        out,
        "\n{} optimal, {} below, {} above",
        report.summary.optimal,
        report.summary.low + report.summary.very_low,
        report.summary.high + report.summary.very_high
    );
    out
}
