// ABOUTME: Volume advisor combining reference lookup, classification and messaging
// ABOUTME: Produces a VolumeGuidance record per muscle group, singly or in batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Volume Advisor
//!
//! [`VolumeAdvisor::evaluate`] is pure and total: any muscle group, any
//! experience level and any non-negative set count yield a fully populated
//! [`VolumeGuidance`]. Identical inputs always yield identical output.
//!
//! ```rust
//! use volume_core::{ExperienceLevel, MuscleGroup, VolumeStatus};
//! use volume_intelligence::VolumeAdvisor;
//!
//! let advisor = VolumeAdvisor::default();
//! let guidance = advisor.evaluate(MuscleGroup::Back, 20, ExperienceLevel::Advanced);
//! assert_eq!(guidance.status, VolumeStatus::Optimal);
//! assert_eq!((guidance.recommended_min, guidance.recommended_max), (18, 22));
//! ```

use rayon::prelude::*;
use tracing::debug;
use volume_core::{ExperienceLevel, MuscleGroup, VolumeGuidance};

use crate::classification::VolumeClassifier;
use crate::config::AdvisorConfig;
use crate::messages::format_message;
use crate::reference_table::ReferenceTable;

/// Evaluates weekly volumes against the reference table
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeAdvisor {
    classifier: VolumeClassifier,
}

impl VolumeAdvisor {
    /// Create an advisor from configuration
    #[must_use]
    pub const fn new(config: &AdvisorConfig) -> Self {
        Self {
            classifier: VolumeClassifier::new(config),
        }
    }

    /// Evaluate one muscle group's weekly volume
    #[must_use]
    pub fn evaluate(
        &self,
        muscle_group: MuscleGroup,
        user_volume: u32,
        level: ExperienceLevel,
    ) -> VolumeGuidance {
        let range = ReferenceTable::lookup(muscle_group, level);
        let status = self.classifier.classify(user_volume, range);
        let message = format_message(status, user_volume, range);

        debug!(
            muscle_group = %muscle_group,
            level = %level,
            user_volume,
            range = %range,
            status = %status,
            "Evaluated weekly volume"
        );

        VolumeGuidance {
            muscle_group,
            recommended_min: range.min(),
            recommended_max: range.max(),
            user_volume,
            status,
            message,
        }
    }

    /// Evaluate a batch of (group, volume) entries in input order
    #[must_use]
    pub fn evaluate_all(
        &self,
        level: ExperienceLevel,
        entries: &[(MuscleGroup, u32)],
    ) -> Vec<VolumeGuidance> {
        entries
            .iter()
            .map(|&(group, volume)| self.evaluate(group, volume, level))
            .collect()
    }

    /// Evaluate a batch across the rayon thread pool, preserving input order
    ///
    /// Each evaluation is independent, so the result equals `evaluate_all`.
    #[must_use]
    pub fn par_evaluate_all(
        &self,
        level: ExperienceLevel,
        entries: &[(MuscleGroup, u32)],
    ) -> Vec<VolumeGuidance> {
        entries
            .par_iter()
            .map(|&(group, volume)| self.evaluate(group, volume, level))
            .collect()
    }
}

/// Evaluate with the default advisor configuration
#[must_use]
pub fn evaluate(
    muscle_group: MuscleGroup,
    user_volume: u32,
    level: ExperienceLevel,
) -> VolumeGuidance {
    VolumeAdvisor::default().evaluate(muscle_group, user_volume, level)
}
