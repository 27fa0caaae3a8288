// ABOUTME: Volume advisor configuration for classification thresholds
// ABOUTME: Defaults reproduce the half-span rule for very-low and very-high volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume Advisor Configuration
//!
//! The only tunable is the fraction of a range's span that separates a
//! "slightly" low/high volume from a "very" low/high one.

use serde::{Deserialize, Serialize};
use volume_core::constants::classification;

use super::ConfigError;

/// Volume Advisor Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// A deviation strictly greater than `span * ratio` is classified as severe
    pub severe_deviation_ratio: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            severe_deviation_ratio: classification::SEVERE_DEVIATION_RATIO,
        }
    }
}

impl AdvisorConfig {
    /// Create a configuration with a custom severe deviation ratio
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the ratio is negative or not finite
    pub fn with_severe_deviation_ratio(ratio: f64) -> Result<Self, ConfigError> {
        let config = Self {
            severe_deviation_ratio: ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the ratio is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.severe_deviation_ratio.is_finite() || self.severe_deviation_ratio < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "severe_deviation_ratio must be a finite value >= 0",
            ));
        }
        Ok(())
    }
}
