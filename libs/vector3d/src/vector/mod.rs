//! The `Vector3D` value type.
//!
//! A point or direction in three-dimensional space (`x`, `y`, `z`) carrying a
//! fourth auxiliary component `w`. `w` defaults to `1` and can hold data such
//! as an angle of rotation; it is not used as a homogeneous divisor.
//!
//! Two operations come in a mutating and a pure flavor:
//!
//! | Mutating | Pure |
//! |---|---|
//! | [`Vector3D::cross_product`] | [`Vector3D::cross`] |
//! | [`Vector3D::normalize`] | [`Vector3D::normalized`] |
//!
//! [`Vector3D::get_length`] reports the *squared* magnitude over all four
//! components, rounded to a number of decimal digits. Use
//! [`Vector3D::magnitude`] for the Euclidean norm.

use std::fmt;

use config::constants::{DEFAULT_COMPONENT, DEFAULT_LENGTH_PRECISION, DEFAULT_W};
use glam::{DVec3, DVec4};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::VectorResult;

/// Four-component vector with `x`, `y`, `z` and an auxiliary `w`.
///
/// Fields are public and unconstrained: NaN and infinities are stored as
/// given. Missing fields in deserialized JSON fall back to `(0, 0, 0, 1)`.
///
/// # Examples
/// ```
/// use vector3d::Vector3D;
///
/// let v = Vector3D::default();
/// assert_eq!((v.x, v.y, v.z, v.w), (0.0, 0.0, 0.0, 1.0));
///
/// let depth = Vector3D { z: 1.0, ..Default::default() };
/// assert_eq!(depth, Vector3D::new(0.0, 0.0, 1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3D {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth.
    pub z: f64,
    /// Auxiliary component, e.g. an angle of rotation.
    pub w: f64,
}

impl Default for Vector3D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Vector3D {
    /// Origin with `w = 1`; the value of `Vector3D::default()`.
    pub const ORIGIN: Self = Self::new(
        DEFAULT_COMPONENT,
        DEFAULT_COMPONENT,
        DEFAULT_COMPONENT,
        DEFAULT_W,
    );

    /// All four components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Unit X axis with `w = 1`.
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0, DEFAULT_W);

    /// Unit Y axis with `w = 1`.
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0, DEFAULT_W);

    /// Unit Z axis with `w = 1`.
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0, DEFAULT_W);

    /// Creates a vector with exactly the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector from Cartesian coordinates, with `w` left at its
    /// default of `1`.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let v = Vector3D::from_xyz(0.0, 0.0, 1.0);
    /// assert_eq!(v.w, 1.0);
    /// ```
    #[inline]
    pub const fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, DEFAULT_W)
    }

    /// Returns a copy with `x` replaced.
    #[inline]
    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy with `y` replaced.
    #[inline]
    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy with `z` replaced.
    #[inline]
    pub const fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Returns a copy with `w` replaced.
    #[inline]
    pub const fn with_w(self, w: f64) -> Self {
        Self { w, ..self }
    }

    /// Cartesian part as a `glam::DVec3`, dropping `w`.
    #[inline]
    pub fn xyz(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    // -------------------------------------------------------------------------
    // JSON
    // -------------------------------------------------------------------------

    /// Serializes the vector as `{"x":..,"y":..,"z":..,"w":..}`.
    ///
    /// Values are written verbatim with `serde_json` number encoding (`1.0`,
    /// not `1`). NaN and infinities become `null`, which
    /// [`Vector3D::from_json`] rejects.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let json = Vector3D::new(1.5, -2.0, 0.25, 1.0).to_json();
    /// assert_eq!(json, r#"{"x":1.5,"y":-2.0,"z":0.25,"w":1.0}"#);
    /// ```
    pub fn to_json(&self) -> String {
        if !self.is_finite() {
            warn!(
                "serializing non-finite vector {:?}; non-finite components become null",
                self
            );
        }
        self.to_string()
    }

    /// Parses the output of [`Vector3D::to_json`].
    ///
    /// Missing keys take their defaults; `null` components are an error.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let v = Vector3D::from_json(r#"{"x":1,"y":2,"z":3,"w":4}"#).unwrap();
    /// assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    pub fn from_json(text: &str) -> VectorResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns `true` when all four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    // -------------------------------------------------------------------------
    // Cross product
    // -------------------------------------------------------------------------

    /// Cross product of the Cartesian parts, written back into `self`.
    ///
    /// The receiver's `x`, `y`, `z` are overwritten with the result and its
    /// `w` is kept. The returned vector is a separate value equal to the
    /// updated receiver. Use [`Vector3D::cross`] to leave `self` untouched.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let mut v1 = Vector3D::from_xyz(0.0, 0.0, 1.0);
    /// let v2 = Vector3D::from_xyz(1.0, 0.0, 0.0);
    /// let result = v1.cross_product(&v2);
    /// assert_eq!(result, Vector3D::new(0.0, 1.0, 0.0, 1.0));
    /// assert_eq!(v1, result);
    /// ```
    pub fn cross_product(&mut self, other: &Vector3D) -> Vector3D {
        *self = self.cross(other);
        *self
    }

    /// Cross product of the Cartesian parts, keeping `self.w`.
    ///
    /// ```text
    /// x' = y1*z2 - z1*y2
    /// y' = z1*x2 - x1*z2
    /// z' = x1*y2 - y1*x2
    /// ```
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            self.w,
        )
    }

    // -------------------------------------------------------------------------
    // Length
    // -------------------------------------------------------------------------

    /// Unrounded `x² + y² + z² + w²`.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean norm over all four components.
    ///
    /// This is the quantity [`Vector3D::normalize`] drives to `1`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length rounded to two decimal digits.
    ///
    /// No square root is taken: `(1, 1, 1, 1)` reports `4`.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// assert_eq!(Vector3D::default().get_length(), 1.0);
    /// assert_eq!(Vector3D::new(1.0, 1.0, 1.0, 1.0).get_length(), 4.0);
    /// ```
    pub fn get_length(&self) -> f64 {
        self.get_length_with_precision(DEFAULT_LENGTH_PRECISION)
    }

    /// Squared length rounded to `precision` decimal digits.
    ///
    /// Computed as `round(sum * 10^precision) / 10^precision`, halves rounded
    /// away from zero. Zero and negative precisions are accepted: `0` rounds
    /// to an integer, `-1` to a multiple of ten.
    pub fn get_length_with_precision(&self, precision: i32) -> f64 {
        let scale = 10f64.powi(precision);
        (scale * self.length_squared()).round() / scale
    }

    // -------------------------------------------------------------------------
    // Normalization
    // -------------------------------------------------------------------------

    /// Scales all four components in place to unit Euclidean magnitude and
    /// returns `self` for chaining.
    ///
    /// A vector whose components are all zero stays zero. Nothing is guarded:
    /// a NaN component makes every component NaN, and a sum of squares that
    /// overflows to infinity scales finite components to zero and infinite
    /// ones to NaN.
    ///
    /// # Examples
    /// ```
    /// use vector3d::Vector3D;
    /// let mut v = Vector3D::new(3.0, 3.0, 3.0, 0.0);
    /// assert_eq!(v.normalize().get_length(), 1.0);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let mut len = self.length_squared();
        if len > 0.0 {
            len = 1.0 / len.sqrt();
        } else if len == 0.0 {
            debug!("normalizing zero-length vector {:?}", self);
        }

        self.x *= len;
        self.y *= len;
        self.z *= len;
        self.w *= len;
        self
    }

    /// Normalized copy; `self` is left unchanged.
    pub fn normalized(&self) -> Vector3D {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}

impl fmt::Display for Vector3D {
    /// Same text as [`Vector3D::to_json`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"x":{},"y":{},"z":{},"w":{}}}"#,
            Value::from(self.x),
            Value::from(self.y),
            Value::from(self.z),
            Value::from(self.w),
        )
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<DVec4> for Vector3D {
    fn from(v: DVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector3D> for DVec4 {
    fn from(v: Vector3D) -> Self {
        DVec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self::from_xyz(v.x, v.y, v.z)
    }
}

impl From<[f64; 4]> for Vector3D {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector3D> for [f64; 4] {
    fn from(v: Vector3D) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}
