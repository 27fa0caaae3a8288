// ABOUTME: Configuration module for volume-intelligence crate
// ABOUTME: Re-exports advisor configuration and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Advisor tuning (classification thresholds)
pub mod advisor;

/// Configuration error types
pub mod error;

pub use advisor::AdvisorConfig;
pub use error::ConfigError;
