// ABOUTME: Environment configuration management for advisor defaults
// ABOUTME: Parses experience level, training days, output format and thresholds from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Every setting has a default, so an empty environment yields a valid
//! configuration. Malformed values are errors rather than silent fallbacks.
//! `RUST_LOG`, `LOG_FORMAT` and `ENVIRONMENT` belong to the logging layer and
//! are read only by [`crate::logging::LoggingConfig`].

use std::env;
use std::str::FromStr;

use tracing::{debug, info};
use volume_core::constants::schedule::{
    DEFAULT_TRAINING_DAYS, MAX_TRAINING_DAYS, MIN_TRAINING_DAYS,
};
use volume_core::ExperienceLevel;
use volume_intelligence::{AdvisorConfig, ConfigError};

use crate::constants::env_config;
use crate::formatters::OutputFormat;

/// Advisor settings loaded from the environment
#[derive(Debug, Clone)]
pub struct AdvisorSettings {
    /// Experience level used when none is given on the command line
    pub experience_level: ExperienceLevel,
    /// Training days per week for per-session splits
    pub training_days: u8,
    /// Default output format
    pub output_format: OutputFormat,
    /// Classification tuning
    pub advisor: AdvisorConfig,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            experience_level: ExperienceLevel::default(),
            training_days: DEFAULT_TRAINING_DAYS,
            output_format: OutputFormat::default(),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl AdvisorSettings {
    /// Load settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but malformed, or a
    /// validation error if a parsed value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let experience_level = parse_env(env_config::EXPERIENCE_LEVEL)?
            .unwrap_or(defaults.experience_level);
        let training_days =
            parse_env(env_config::TRAINING_DAYS)?.unwrap_or(defaults.training_days);
        let output_format =
            parse_env(env_config::OUTPUT_FORMAT)?.unwrap_or(defaults.output_format);
        let advisor = parse_env(env_config::SEVERE_DEVIATION_RATIO)?.map_or(
            defaults.advisor,
            |ratio| AdvisorConfig {
                severe_deviation_ratio: ratio,
            },
        );

        let settings = Self {
            experience_level,
            training_days,
            output_format,
            advisor,
        };
        settings.validate()?;

        info!("Advisor settings loaded: {}", settings.summary());
        Ok(settings)
    }

    /// Validate loaded values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for training days outside 1-7 and
    /// `ConfigError::ValueOutOfRange` for an invalid deviation ratio
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&self.training_days) {
            return Err(ConfigError::InvalidRange(
                "VOLUME_TRAINING_DAYS must be between 1 and 7",
            ));
        }
        self.advisor.validate()
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "level={} training_days={} format={} severe_ratio={}",
            self.experience_level,
            self.training_days,
            self.output_format,
            self.advisor.severe_deviation_ratio
        )
    }
}

/// Read and parse an optional environment variable
fn parse_env<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => {
            debug!(key, "Environment variable not set, using default");
            Ok(None)
        }
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
