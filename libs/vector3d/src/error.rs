//! # Error Types
//!
//! Error types for vector operations. Vector arithmetic itself is total over
//! `f64`; errors only arise at the edges: JSON text that does not describe a
//! vector, and triangles whose angle is undefined.
//!
//! ## Error Policy
//!
//! - NO fallback values when parsing fails
//! - Errors carry the offending input for debugging

use thiserror::Error;

use crate::planar::Point;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around vector values.
///
/// ## Example
///
/// ```rust
/// use vector3d::{Vector3D, VectorError};
///
/// match Vector3D::from_json("{\"x\":null}") {
///     Ok(v) => println!("parsed {v}"),
///     Err(VectorError::Json(e)) => eprintln!("bad json: {e}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum VectorError {
    /// JSON text did not describe a vector.
    ///
    /// Non-finite components serialize as `null`, so this is also what
    /// parsing such output produces.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Another vertex coincides with the measured vertex, so the angle there
    /// is undefined.
    #[error("Degenerate triangle: zero-length edge at vertex ({}, {})", .vertex.x, .vertex.y)]
    DegenerateTriangle {
        /// The vertex whose angle was requested.
        vertex: Point,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use vector3d::error::VectorResult;
/// use vector3d::Vector3D;
///
/// fn parse(text: &str) -> VectorResult<Vector3D> {
///     Vector3D::from_json(text)
/// }
///
/// assert!(parse("{\"x\":1,\"y\":2,\"z\":3,\"w\":1}").is_ok());
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================
