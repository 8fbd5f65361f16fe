//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_component_is_zero() {
    assert_eq!(DEFAULT_COMPONENT, 0.0);
}

#[test]
fn test_default_w_is_one() {
    // A vector built without arguments reads as (0, 0, 0, 1)
    assert_eq!(DEFAULT_W, 1.0);
}

#[test]
fn test_default_length_precision_is_two_digits() {
    assert_eq!(DEFAULT_LENGTH_PRECISION, 2);
}

#[test]
fn test_default_precision_rounds_to_hundredths() {
    let scale = 10f64.powi(DEFAULT_LENGTH_PRECISION);
    assert_eq!((1.23456 * scale).round() / scale, 1.23);
    assert_eq!((0.999 * scale).round() / scale, 1.0);
}

// =============================================================================
// ANGLE TESTS
// =============================================================================

#[test]
fn test_rad_to_deg_right_angle() {
    let degrees = std::f64::consts::FRAC_PI_2 * RAD_TO_DEG;
    assert!((degrees - 90.0).abs() < 1e-12);
}

#[test]
fn test_rad_to_deg_full_turn() {
    let degrees = std::f64::consts::TAU * RAD_TO_DEG;
    assert!((degrees - 360.0).abs() < 1e-12);
}
