// ABOUTME: Application-level constants for the volume advisor
// ABOUTME: Service identity and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants
//!
//! Domain constants (input limits, chart padding, schedule bounds) live in
//! `volume_core::constants`; this module only holds what the application
//! layer needs.

pub use volume_core::constants::{chart, classification, input, schedule};

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const VOLUME_CLI: &str = "volume-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Default experience level (beginner, intermediate, advanced)
    pub const EXPERIENCE_LEVEL: &str = "VOLUME_EXPERIENCE_LEVEL";
    /// Training days per week used for per-session splits
    pub const TRAINING_DAYS: &str = "VOLUME_TRAINING_DAYS";
    /// Output format (text, json)
    pub const OUTPUT_FORMAT: &str = "VOLUME_OUTPUT_FORMAT";
    /// Fraction of the range span separating mild from severe deviations
    pub const SEVERE_DEVIATION_RATIO: &str = "VOLUME_SEVERE_DEVIATION_RATIO";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log events when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Override the service name in log events
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}
