// ABOUTME: Volume intelligence engine for weekly set recommendations
// ABOUTME: Reference ranges, classification, advisory messages and session splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Volume Intelligence
//!
//! Pure decision logic for hypertrophy volume guidance. Given a muscle group,
//! an experience level and a weekly set count, the [`VolumeAdvisor`] looks up
//! the evidence-based range, classifies the volume and produces advisory text.
//!
//! Nothing here performs I/O or keeps state between calls; every function is
//! safe to call from any thread.

/// Advisor configuration and configuration errors
pub mod config;

/// Static evidence-based ranges per muscle group and experience level
pub mod reference_table;

/// Five-way classification of a volume against a range
pub mod classification;

/// Advisory message templates
pub mod messages;

/// Volume advisor combining lookup, classification and messaging
pub mod advisor;

/// Weekly to per-session volume split
pub mod session_split;

pub use advisor::{evaluate, VolumeAdvisor};
pub use classification::{classify_volume, VolumeClassifier};
pub use config::{AdvisorConfig, ConfigError};
pub use messages::format_message;
pub use reference_table::{general_range, ReferenceRow, ReferenceTable};
pub use session_split::calculate_volumes;
