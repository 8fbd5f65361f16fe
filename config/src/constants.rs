//! # Configuration Constants
//!
//! Centralized constants for vector construction, length reporting and
//! angle conversion.
//!
//! ## Categories
//!
//! - **Defaults**: Component and precision defaults
//! - **Angles**: Radian to degree conversion

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default value of the `x`, `y` and `z` components.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_COMPONENT;
///
/// let user_x: Option<f64> = None;
/// assert_eq!(user_x.unwrap_or(DEFAULT_COMPONENT), 0.0);
/// ```
pub const DEFAULT_COMPONENT: f64 = 0.0;

/// Default value of the auxiliary `w` component.
///
/// A freshly constructed vector carries `w = 1` so that it reads as a point
/// in homogeneous coordinates.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_W;
///
/// let user_w: Option<f64> = None;
/// assert_eq!(user_w.unwrap_or(DEFAULT_W), 1.0);
/// ```
pub const DEFAULT_W: f64 = 1.0;

/// Number of decimal digits kept by `get_length` when no precision is given.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_LENGTH_PRECISION;
///
/// let scale = 10f64.powi(DEFAULT_LENGTH_PRECISION);
/// assert_eq!((1.23456 * scale).round() / scale, 1.23);
/// ```
pub const DEFAULT_LENGTH_PRECISION: i32 = 2;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// Multiply a value in radians by this factor to obtain degrees.
///
/// # Example
///
/// ```rust
/// use config::constants::RAD_TO_DEG;
///
/// assert!((std::f64::consts::PI * RAD_TO_DEG - 180.0).abs() < 1e-12);
/// ```
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;
