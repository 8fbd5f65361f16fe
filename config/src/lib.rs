//! # Config Crate
//!
//! Centralized defaults for the `vector3d` workspace. Every literal that
//! shapes vector behavior (the default `w` component, the default rounding
//! precision of `get_length`, angle conversion factors) is defined here once.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_LENGTH_PRECISION, DEFAULT_W, RAD_TO_DEG};
//!
//! assert_eq!(DEFAULT_W, 1.0);
//! assert_eq!(DEFAULT_LENGTH_PRECISION, 2);
//!
//! let right_angle = std::f64::consts::FRAC_PI_2 * RAD_TO_DEG;
//! assert_eq!(right_angle.round(), 90.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants, usable from any crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
