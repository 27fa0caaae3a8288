// ABOUTME: Output helpers for volume-cli
// ABOUTME: Writes rendered output to stdout with a single trailing newline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Print rendered output, ensuring it ends with exactly one newline
pub fn print_output(output: &str) {
    println!("{}", output.trim_end_matches('\n'));
}
