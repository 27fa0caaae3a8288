// ABOUTME: Core types and constants for the hypertrophy volume advisor
// ABOUTME: Foundation crate with domain models, model errors, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Volume Core
//!
//! Foundation crate providing the shared vocabulary of the volume advisor.
//! This crate is designed to change infrequently, so the intelligence crate
//! and the application crate can compile against a stable set of types.
//!
//! ## Modules
//!
//! - **models**: `MuscleGroup`, `ExperienceLevel`, `VolumeRange`, `VolumeStatus`, `VolumeGuidance`
//! - **errors**: `ModelError` for parsing and range construction failures
//! - **constants**: Input limits, chart padding, and classification defaults

/// Model parsing and construction errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (muscle groups, experience levels, ranges, guidance)
pub mod models;

pub use errors::ModelError;
pub use models::{
    ExperienceLevel, MuscleGroup, MuscleGroupVolume, StatusSeverity, VolumeDirection,
    VolumeGuidance, VolumeRange, VolumeStatus,
};
