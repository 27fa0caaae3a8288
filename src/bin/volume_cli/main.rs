// ABOUTME: Volume CLI - command-line front end for the hypertrophy volume advisor
// ABOUTME: Evaluates weekly sets per muscle group and prints reference ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Evaluate weekly volumes at the advanced level
//! volume-cli evaluate --level advanced --volume back=20 --volume biceps=15
//!
//! # Select groups without a volume to see their suggested starting point
//! volume-cli evaluate --level beginner --muscle chest --muscle glutes
//!
//! # Per-session split of the recommended ranges over 4 training days
//! volume-cli ranges --level intermediate --training-days 4
//!
//! # Full reference table as JSON
//! volume-cli --format json table
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use volume_advisor::{
    config::AdvisorSettings,
    errors::{AppError, AppResult},
    formatters::OutputFormat,
    input::VolumeEntry,
    logging::LoggingConfig,
    ExperienceLevel, MuscleGroup,
};

#[derive(Parser)]
#[command(
    name = "volume-cli",
    about = "Weekly training volume advisor",
    long_about = "Compares weekly working sets per muscle group against evidence-based hypertrophy ranges."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text or json), overrides VOLUME_OUTPUT_FORMAT
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate weekly volumes against recommended ranges
    Evaluate {
        /// Experience level, overrides VOLUME_EXPERIENCE_LEVEL
        #[arg(long, short = 'l')]
        level: Option<ExperienceLevel>,

        /// Weekly sets as <muscle>=<sets> (repeatable)
        #[arg(long = "volume", value_name = "MUSCLE=SETS")]
        volumes: Vec<VolumeEntry>,

        /// Select a muscle group without entering a volume (repeatable)
        #[arg(long = "muscle", value_name = "MUSCLE")]
        muscles: Vec<MuscleGroup>,

        /// Evaluate groups in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Show recommended ranges with a per-session split
    Ranges {
        /// Experience level, overrides VOLUME_EXPERIENCE_LEVEL
        #[arg(long, short = 'l')]
        level: Option<ExperienceLevel>,

        /// Muscle groups to include (defaults to all)
        #[arg(long = "muscle", value_name = "MUSCLE")]
        muscles: Vec<MuscleGroup>,

        /// Training days per week, overrides VOLUME_TRAINING_DAYS
        #[arg(long)]
        training_days: Option<u8>,
    },

    /// Print the full reference table
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let settings = AdvisorSettings::from_env().map_err(AppError::from)?;
    debug!("Settings: {}", settings.summary());
    let format = cli.format.unwrap_or(settings.output_format);

    let output = match cli.command {
        Command::Evaluate {
            level,
            volumes,
            muscles,
            parallel,
        } => commands::evaluate::run(
            &settings,
            level.unwrap_or(settings.experience_level),
            &volumes,
            &muscles,
            parallel,
            format,
        )?,
        Command::Ranges {
            level,
            muscles,
            training_days,
        } => commands::ranges::run(
            level.unwrap_or(settings.experience_level),
            &muscles,
            training_days.unwrap_or(settings.training_days),
            format,
        )?,
        Command::Table => commands::table::run(format)?,
    };

    helpers::display::print_output(&output);
    Ok(())
}
