// ABOUTME: Table command for volume-cli
// ABOUTME: Prints every reference range by muscle group and experience level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_advisor::{
    errors::AppResult,
    formatters::{render_reference_table, OutputFormat},
    ReferenceTable,
};

/// Render the reference table
pub fn run(format: OutputFormat) -> AppResult<String> {
    render_reference_table(&ReferenceTable::rows(), format)
}
