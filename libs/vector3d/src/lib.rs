//! # Vector3D
//!
//! A four-component vector value type: Cartesian `x`, `y`, `z` plus an
//! auxiliary `w` (defaulting to `1`).
//!
//! ## Example
//!
//! ```rust
//! use vector3d::Vector3D;
//!
//! let mut v1 = Vector3D::from_xyz(0.0, 0.0, 1.0);
//! let v2 = Vector3D::from_xyz(1.0, 0.0, 0.0);
//!
//! // The receiver is updated in place and a copy is returned.
//! let normal = v1.cross_product(&v2);
//! assert_eq!(normal, Vector3D::new(0.0, 1.0, 0.0, 1.0));
//! assert_eq!(v1, normal);
//!
//! // `get_length` reports the rounded sum of squares over all four components.
//! assert_eq!(normal.get_length(), 2.0);
//!
//! let json = normal.to_json();
//! assert_eq!(Vector3D::from_json(&json)?, normal);
//! # Ok::<(), vector3d::VectorError>(())
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: the [`Vector3D`] type
//! - [`planar`]: 2D point and triangle angle helpers
//! - [`error`]: [`VectorError`] and [`VectorResult`]
//!
//! The library logs through the `log` facade and never installs a logger.

pub mod error;
pub mod planar;
pub mod vector;

pub use error::{VectorError, VectorResult};
pub use planar::{find_angle_in_triangle, Point};
pub use vector::Vector3D;
