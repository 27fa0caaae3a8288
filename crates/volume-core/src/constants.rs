// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for classification, input widgets, charts and scheduling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Classification thresholds
pub mod classification {
    /// Fraction of the range span a deviation must exceed to be "very" low/high
    pub const SEVERE_DEVIATION_RATIO: f64 = 0.5;
}

/// Volume input widget limits
pub mod input {
    /// Sets above the recommended max that an input widget should still allow
    pub const SLIDER_HEADROOM_SETS: u32 = 5;
    /// Lowest upper bound any volume input widget exposes
    pub const SLIDER_MIN_CEILING: u32 = 30;
}

/// Chart rendering values
pub mod chart {
    /// Padding added above the tallest bar when computing the axis maximum
    pub const AXIS_PADDING_SETS: u32 = 2;
}

/// Training schedule limits
pub mod schedule {
    /// Fewest training days a weekly split can be spread over
    pub const MIN_TRAINING_DAYS: u8 = 1;
    /// Most training days a weekly split can be spread over
    pub const MAX_TRAINING_DAYS: u8 = 7;
    /// Training days assumed when none are configured
    pub const DEFAULT_TRAINING_DAYS: u8 = 3;
}
