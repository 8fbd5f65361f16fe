//! 2D helpers for checking vector results in the plane.
//!
//! Projecting vectors onto the x/y plane and measuring the angle between
//! them is the simplest way to confirm that a cross product came out
//! perpendicular.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};

/// A point in the plane.
///
/// # Examples
/// ```
/// use vector3d::planar::Point;
/// let p = Point::new(1.0, 2.0);
/// assert_eq!((p.x, p.y), (1.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Interior angle, in radians, at `p1` of the triangle `p1 p2 p3`.
///
/// Measured as `atan2(|u x v|, u . v)` over the edges `u = p2 - p1` and
/// `v = p3 - p1`, which does not depend on the triangle's scale. Collinear
/// points give `0` or `PI`. Fails only when `p2` or `p3` coincides exactly
/// with `p1`.
///
/// # Examples
/// ```
/// use config::constants::RAD_TO_DEG;
/// use vector3d::planar::{find_angle_in_triangle, Point};
///
/// let angle = find_angle_in_triangle(
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
/// )
/// .unwrap();
/// assert_eq!((angle * RAD_TO_DEG).round(), 90.0);
/// ```
pub fn find_angle_in_triangle(p1: Point, p2: Point, p3: Point) -> VectorResult<f64> {
    let origin = DVec2::from(p1);
    let u = DVec2::from(p2) - origin;
    let v = DVec2::from(p3) - origin;
    if u == DVec2::ZERO || v == DVec2::ZERO {
        return Err(VectorError::DegenerateTriangle { vertex: p1 });
    }

    Ok(u.perp_dot(v).abs().atan2(u.dot(v)))
}
