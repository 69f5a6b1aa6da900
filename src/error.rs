//! Error types for polylabel operations.
//!
//! The search itself is total over well-formed input and never fails. Errors
//! only come from the optional validation layer and from fixture parsing.

use thiserror::Error;

/// Errors reported by validation and I/O.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylabelError {
    /// The polygon has no exterior vertices.
    #[error("polygon has no exterior ring vertices")]
    EmptyPolygon,

    /// A ring cannot describe a boundary.
    #[error("invalid polygon: ring {ring} {reason}")]
    InvalidPolygon {
        /// Index of the offending ring (0 is the exterior).
        ring: usize,
        /// What is wrong with it.
        reason: InvalidRing,
    },

    /// Precision must be positive and finite.
    #[error("precision must be positive and finite")]
    InvalidPrecision,

    /// Polygon data could not be parsed.
    #[error("failed to parse polygon: {0}")]
    Parse(String),
}

/// Reasons a ring is rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRing {
    /// Fewer than three vertices.
    #[error("has {0} vertices, need at least 3")]
    TooFewVertices(usize),

    /// A vertex has a NaN or infinite coordinate.
    #[error("has a non-finite coordinate at vertex {0}")]
    NonFinite(usize),
}

impl From<serde_json::Error> for PolylabelError {
    fn from(err: serde_json::Error) -> Self {
        PolylabelError::Parse(err.to_string())
    }
}
