// ABOUTME: Main library entry point for the hypertrophy volume advisor
// ABOUTME: Wires input normalization, selection state, reports and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Volume Advisor
//!
//! Compares self-reported weekly training volume (working sets per muscle
//! group) against evidence-based ranges and explains the result.
//!
//! The decision logic lives in the `volume-intelligence` crate and the shared
//! types in `volume-core`; this crate adds the application layer around them:
//! configuration, logging, input normalization, selection state, report
//! assembly and output formatting.
//!
//! ## Example
//!
//! ```rust
//! use volume_advisor::{ExperienceLevel, MuscleGroup, VolumeAdvisor, VolumeStatus};
//!
//! let guidance = VolumeAdvisor::default().evaluate(
//!     MuscleGroup::Biceps,
//!     15,
//!     ExperienceLevel::Beginner,
//! );
//! assert_eq!(guidance.status, VolumeStatus::VeryHigh);
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Output formats (text, JSON)
pub mod formatters;

/// Raw input normalization
pub mod input;

/// Structured logging setup
pub mod logging;

/// Report and chart data assembly
pub mod report;

/// Caller-owned selection state
pub mod session;

pub use volume_core::{
    ExperienceLevel, MuscleGroup, MuscleGroupVolume, StatusSeverity, VolumeDirection,
    VolumeGuidance, VolumeRange, VolumeStatus,
};
pub use volume_intelligence::{AdvisorConfig, ReferenceTable, VolumeAdvisor};
