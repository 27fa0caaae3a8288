// ABOUTME: Classification of a weekly set count against a recommended range
// ABOUTME: Deviations beyond a fraction of the span escalate low/high to very-low/very-high
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume classification
//!
//! Rules, evaluated in order:
//!
//! 1. `min <= volume <= max` is optimal.
//! 2. Below `min`: a deficit strictly greater than `span * ratio` is very-low,
//!    anything else is low.
//! 3. Above `max`: an excess strictly greater than `span * ratio` is very-high,
//!    anything else is high.
//!
//! With the default ratio of 0.5, a deviation of exactly half the span is
//! still low/high. A zero-width range has no low/high band at all.

use volume_core::{VolumeRange, VolumeStatus};

use crate::config::AdvisorConfig;

/// Classifier parameterized by the severe deviation ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeClassifier {
    severe_deviation_ratio: f64,
}

impl Default for VolumeClassifier {
    fn default() -> Self {
        Self::new(&AdvisorConfig::default())
    }
}

impl VolumeClassifier {
    /// Create a classifier from advisor configuration
    #[must_use]
    pub const fn new(config: &AdvisorConfig) -> Self {
        Self {
            severe_deviation_ratio: config.severe_deviation_ratio,
        }
    }

    /// Classify `user_volume` against `range`
    #[must_use]
    pub fn classify(&self, user_volume: u32, range: VolumeRange) -> VolumeStatus {
        if range.contains(user_volume) {
            return VolumeStatus::Optimal;
        }

        if user_volume < range.min() {
            let deficit = range.min() - user_volume;
            if self.is_severe(deficit, range.span()) {
                VolumeStatus::VeryLow
            } else {
                VolumeStatus::Low
            }
        } else {
            let excess = user_volume - range.max();
            if self.is_severe(excess, range.span()) {
                VolumeStatus::VeryHigh
            } else {
                VolumeStatus::High
            }
        }
    }

    fn is_severe(&self, deviation: u32, span: u32) -> bool {
        f64::from(deviation) > f64::from(span) * self.severe_deviation_ratio
    }
}

/// Classify with the default half-span ratio
#[must_use]
pub fn classify_volume(user_volume: u32, range: VolumeRange) -> VolumeStatus {
    VolumeClassifier::default().classify(user_volume, range)
}
