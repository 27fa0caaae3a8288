// ABOUTME: Normalization of raw user input into advisor preconditions
// ABOUTME: Lenient set-count parsing, group=volume entries and input widget bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Normalization
//!
//! The advisor only accepts non-negative integer volumes. Raw input is
//! normalized here before evaluation:
//!
//! - leading whitespace is skipped, an optional sign and the leading digits
//!   are read, and anything after the digits is ignored (`"12 sets"` is 12)
//! - text without leading digits is 0
//! - negative values clamp to 0
//! - values beyond `u32::MAX` saturate

use std::str::FromStr;

use serde::Serialize;
use tracing::debug;
use volume_core::constants::input::{SLIDER_HEADROOM_SETS, SLIDER_MIN_CEILING};
use volume_core::{MuscleGroup, VolumeRange};

use crate::errors::{AppError, AppResult};

/// A muscle group paired with a normalized weekly set count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumeEntry {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Weekly sets, already normalized
    pub volume: u32,
}

impl From<VolumeEntry> for (MuscleGroup, u32) {
    fn from(entry: VolumeEntry) -> Self {
        (entry.muscle_group, entry.volume)
    }
}

impl FromStr for VolumeEntry {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_volume_entry(s)
    }
}

/// Normalize a raw set count
#[must_use]
pub fn normalize_volume(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        debug!(raw, "Volume has no leading digits, treating as 0");
        return 0;
    }
    if negative {
        debug!(raw, "Negative volume clamped to 0");
        return 0;
    }

    digits[..digit_count]
        .bytes()
        .fold(0_u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
        })
}

/// Clamp a signed set count to the advisor's precondition
#[must_use]
pub fn clamp_volume(volume: i64) -> u32 {
    u32::try_from(volume.max(0)).unwrap_or(u32::MAX)
}

/// Parse a `group=volume` pair such as `chest=12`
///
/// The volume part is normalized with [`normalize_volume`].
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` if the `=` separator is missing or the
/// muscle group is unknown
pub fn parse_volume_entry(raw: &str) -> AppResult<VolumeEntry> {
    let (group, volume) = raw.split_once('=').ok_or_else(|| {
        AppError::invalid_input(format!(
            "expected <muscle>=<sets>, got '{raw}' (e.g. chest=12)"
        ))
    })?;

    Ok(VolumeEntry {
        muscle_group: group.parse()?,
        volume: normalize_volume(volume),
    })
}

/// Upper bound for a volume input widget: `max(range.max + 5, 30)`
#[must_use]
pub fn slider_ceiling(range: VolumeRange) -> u32 {
    range
        .max()
        .saturating_add(SLIDER_HEADROOM_SETS)
        .max(SLIDER_MIN_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_volume_policy() {
        assert_eq!(normalize_volume("12"), 12);
        assert_eq!(normalize_volume("  7 sets"), 7);
        assert_eq!(normalize_volume("+4"), 4);
        assert_eq!(normalize_volume("-3"), 0);
        assert_eq!(normalize_volume("abc"), 0);
        assert_eq!(normalize_volume(""), 0);
        assert_eq!(normalize_volume("12.9"), 12);
        assert_eq!(normalize_volume("99999999999"), u32::MAX);
    }

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-5), 0);
        assert_eq!(clamp_volume(14), 14);
        assert_eq!(clamp_volume(i64::MAX), u32::MAX);
    }

    #[test]
    fn test_slider_ceiling() {
        assert_eq!(slider_ceiling(VolumeRange::ordered(8, 12)), 30);
        assert_eq!(slider_ceiling(VolumeRange::ordered(18, 28)), 33);
    }
}
