// ABOUTME: Caller-owned selection state for an interactive volume check
// ABOUTME: Tracks selected muscle groups, experience level and entered volumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Selection Session
//!
//! Holds the state a form would hold: which muscle groups are selected (in
//! selection order), the current experience level and the volume entered for
//! each selected group. Guidance is recomputed on demand from this state;
//! nothing is cached.

use std::collections::HashMap;

use tracing::debug;
use volume_core::{ExperienceLevel, MuscleGroup, VolumeGuidance};
use volume_intelligence::{ReferenceTable, VolumeAdvisor};

use crate::input::VolumeEntry;

/// Interactive selection of muscle groups and their weekly volumes
#[derive(Debug, Clone, Default)]
pub struct VolumeSession {
    selected: Vec<MuscleGroup>,
    experience_level: ExperienceLevel,
    volumes: HashMap<MuscleGroup, u32>,
}

impl VolumeSession {
    /// Create an empty session at the given experience level
    #[must_use]
    pub fn new(experience_level: ExperienceLevel) -> Self {
        Self {
            experience_level,
            ..Self::default()
        }
    }

    /// Build a session from entered volumes and bare selections
    ///
    /// Every mentioned group is selected once, in order of first mention, and
    /// seeded with its midpoint. Entered volumes are then applied in order, so
    /// a later entry for the same group replaces an earlier one.
    #[must_use]
    pub fn from_entries(
        experience_level: ExperienceLevel,
        volumes: &[VolumeEntry],
        muscles: &[MuscleGroup],
    ) -> Self {
        let mut session = Self::new(experience_level);
        let mentioned = volumes
            .iter()
            .map(|entry| entry.muscle_group)
            .chain(muscles.iter().copied());

        for group in mentioned {
            if !session.is_selected(group) {
                session.toggle(group);
            }
        }
        for entry in volumes {
            session.set_volume(entry.muscle_group, entry.volume);
        }
        session
    }

    /// Selected muscle groups in selection order
    #[must_use]
    pub fn selected(&self) -> &[MuscleGroup] {
        &self.selected
    }

    /// Current experience level
    #[must_use]
    pub const fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    /// Entered volume for a group, if any
    #[must_use]
    pub fn volume(&self, muscle_group: MuscleGroup) -> Option<u32> {
        self.volumes.get(&muscle_group).copied()
    }

    /// Whether a group is currently selected
    #[must_use]
    pub fn is_selected(&self, muscle_group: MuscleGroup) -> bool {
        self.selected.contains(&muscle_group)
    }

    /// Select or deselect a muscle group
    ///
    /// A newly selected group is seeded with the rounded midpoint of its
    /// recommended range; a deselected group loses its volume. Returns whether
    /// the group is selected afterwards.
    pub fn toggle(&mut self, muscle_group: MuscleGroup) -> bool {
        if let Some(index) = self.selected.iter().position(|g| *g == muscle_group) {
            self.selected.remove(index);
            self.volumes.remove(&muscle_group);
            debug!(muscle_group = %muscle_group, "Deselected muscle group");
            return false;
        }

        self.selected.push(muscle_group);
        let seed = self.seed_volume(muscle_group);
        self.volumes.insert(muscle_group, seed);
        debug!(muscle_group = %muscle_group, seed, "Selected muscle group");
        true
    }

    /// Record a volume for a selected group
    ///
    /// Volumes for unselected groups are ignored. Returns whether the volume
    /// was recorded.
    pub fn set_volume(&mut self, muscle_group: MuscleGroup, volume: u32) -> bool {
        if !self.is_selected(muscle_group) {
            debug!(
                muscle_group = %muscle_group,
                volume,
                "Ignoring volume for unselected muscle group"
            );
            return false;
        }
        self.volumes.insert(muscle_group, volume);
        true
    }

    /// Change the experience level
    ///
    /// Selected groups without a recorded volume are seeded with the midpoint
    /// of their range at the new level. Recorded volumes are kept.
    pub fn set_experience_level(&mut self, level: ExperienceLevel) {
        self.experience_level = level;
        let seeds: Vec<(MuscleGroup, u32)> = self
            .selected
            .iter()
            .filter(|group| !self.volumes.contains_key(group))
            .map(|&group| (group, self.seed_volume(group)))
            .collect();
        self.volumes.extend(seeds);
    }

    /// Guidance for every selected group with a volume, in selection order
    #[must_use]
    pub fn guidance(&self, advisor: &VolumeAdvisor) -> Vec<VolumeGuidance> {
        self.selected
            .iter()
            .filter_map(|&group| {
                self.volume(group)
                    .map(|volume| advisor.evaluate(group, volume, self.experience_level))
            })
            .collect()
    }

    fn seed_volume(&self, muscle_group: MuscleGroup) -> u32 {
        ReferenceTable::lookup(muscle_group, self.experience_level).midpoint_rounded()
    }
}
