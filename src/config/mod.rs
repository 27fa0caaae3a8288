// ABOUTME: Configuration module for environment-driven advisor settings
// ABOUTME: Re-exports the advisor settings loaded from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration (no configuration file)
pub mod environment;

pub use environment::AdvisorSettings;
