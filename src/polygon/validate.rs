//! Precondition checks for polygon input.
//!
//! The label search does not validate its input: malformed rings or
//! non-finite coordinates propagate NaN or infinity into the result. These
//! checks let callers fail fast instead.

use super::core::{Polygon, Ring};
use crate::error::{InvalidRing, PolylabelError};
use num_traits::Float;

/// Checks that a polygon is usable for distance queries.
///
/// Every ring must have at least three vertices with finite coordinates.
/// Self-intersections and ring orientation are not checked.
///
/// # Example
///
/// ```
/// use polylabel::polygon::{Polygon, validate_polygon};
/// use polylabel::PolylabelError;
///
/// let ok = Polygon::from_coords(&[vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]]);
/// assert!(validate_polygon(&ok).is_ok());
///
/// let sliver = Polygon::from_coords(&[vec![[0.0, 0.0], [1.0, 0.0]]]);
/// assert!(matches!(
///     validate_polygon(&sliver),
///     Err(PolylabelError::InvalidPolygon { ring: 0, .. })
/// ));
/// ```
pub fn validate_polygon<F: Float>(polygon: &Polygon<F>) -> Result<(), PolylabelError> {
    if polygon.exterior.is_empty() {
        return Err(PolylabelError::EmptyPolygon);
    }

    for (index, ring) in polygon.rings().enumerate() {
        validate_ring(ring).map_err(|reason| PolylabelError::InvalidPolygon {
            ring: index,
            reason,
        })?;
    }

    Ok(())
}

fn validate_ring<F: Float>(ring: &Ring<F>) -> Result<(), InvalidRing> {
    if ring.len() < 3 {
        return Err(InvalidRing::TooFewVertices(ring.len()));
    }

    match ring.vertices.iter().position(|v| !v.is_finite()) {
        Some(vertex) => Err(InvalidRing::NonFinite(vertex)),
        None => Ok(()),
    }
}
