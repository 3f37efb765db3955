// ABOUTME: Conversion between canonical pounds and the display unit
// ABOUTME: Display values are rounded to whole units, stored values keep full precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Mass unit conversion.
//!
//! Display conversion is lossy and storage conversion is not, so converting
//! a stored weight to kilograms and back can land a fraction of a pound away
//! from where it started.

use liftlog_core::constants::units::LBS_PER_KG;
use liftlog_core::models::WeightUnit;

/// Convert a canonical weight to the display unit, rounded to a whole number
#[must_use]
pub fn to_display(canonical: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Lbs => round_half_up(canonical),
        WeightUnit::Kg => round_half_up(canonical / LBS_PER_KG),
    }
}

/// Nearest integer, halves toward positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert a weight entered in `unit` to the canonical unit, unrounded
#[must_use]
pub fn to_canonical(display: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Lbs => display,
        WeightUnit::Kg => display * LBS_PER_KG,
    }
}

/// Render a canonical volume as thousands of display units, e.g. `12.3k`
#[must_use]
pub fn format_volume_thousands(canonical: f64, unit: WeightUnit) -> String {
    format!("{:.1}k", to_display(canonical, unit) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kg_entry_is_stored_unrounded() {
        let stored = to_canonical(50.0, WeightUnit::Kg);
        assert!((stored - 110.231).abs() < 1e-9);
    }

    #[test]
    fn test_display_rounds_to_whole_units() {
        assert!((to_display(110.23, WeightUnit::Kg) - 50.0).abs() < f64::EPSILON);
        assert!((to_display(102.5, WeightUnit::Lbs) - 103.0).abs() < f64::EPSILON);
        assert!((to_display(102.4, WeightUnit::Lbs) - 102.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_halves_round_up() {
        assert!((to_display(-2.5, WeightUnit::Lbs) - -2.0).abs() < f64::EPSILON);
        assert!((to_display(-2.6, WeightUnit::Lbs) - -3.0).abs() < f64::EPSILON);
        assert!((to_display(-0.4, WeightUnit::Lbs)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pounds_are_identity_on_the_way_in() {
        assert!((to_canonical(137.5, WeightUnit::Lbs) - 137.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kg_round_trip_stays_within_half_a_pound() {
        for tenth in 0..5_000 {
            let canonical = f64::from(tenth) / 10.0;
            let back = to_canonical(to_display(canonical, WeightUnit::Kg), WeightUnit::Kg);
            // Half a kilogram of display rounding is a little over a pound
            assert!(
                (back - canonical).abs() <= 0.5 * LBS_PER_KG + 1e-9,
                "{canonical} drifted to {back}"
            );
        }
    }

    #[test]
    fn test_volume_format() {
        assert_eq!(format_volume_thousands(12_345.0, WeightUnit::Lbs), "12.3k");
        assert_eq!(format_volume_thousands(0.0, WeightUnit::Kg), "0.0k");
        assert_eq!(format_volume_thousands(2_204.62, WeightUnit::Kg), "1.0k");
    }
}
