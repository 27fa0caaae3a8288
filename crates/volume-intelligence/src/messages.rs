// ABOUTME: Advisory message templates for each volume status
// ABOUTME: Embeds the set deficit, excess or target range in the generated text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use volume_core::{VolumeRange, VolumeStatus};

/// Advisory text for a classified volume
///
/// Low and high messages quote the number of sets to add or remove; very-low
/// and very-high messages quote the whole target range instead.
#[must_use]
pub fn format_message(status: VolumeStatus, user_volume: u32, range: VolumeRange) -> String {
    let (min, max) = (range.min(), range.max());
    match status {
        VolumeStatus::Optimal => "Perfect! Your volume is within the optimal range.".to_owned(),
        VolumeStatus::Low => format!(
            "Slightly below optimal. Consider adding {} more set(s) per week.",
            min.saturating_sub(user_volume)
        ),
        VolumeStatus::VeryLow => {
            format!("Volume is too low for optimal growth. Aim for {min}-{max} sets/week.")
        }
        VolumeStatus::High => format!(
            "Slightly above optimal. Consider reducing by {} set(s) per week.",
            user_volume.saturating_sub(max)
        ),
        VolumeStatus::VeryHigh => format!(
            "Volume is excessive and may hinder recovery. Reduce to {min}-{max} sets/week."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_message_quotes_deficit() {
        let message = format_message(VolumeStatus::Low, 11, VolumeRange::ordered(12, 16));
        assert_eq!(
            message,
            "Slightly below optimal. Consider adding 1 more set(s) per week."
        );
    }

    #[test]
    fn test_very_high_message_quotes_range() {
        let message = format_message(VolumeStatus::VeryHigh, 15, VolumeRange::ordered(6, 10));
        assert!(message.contains("Reduce to 6-10 sets/week"));
    }
}
