//! Signed distance and centroid queries over polygons with holes.

use super::core::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// Signed distance from a point to the polygon outline.
///
/// The magnitude is the minimum distance to any edge of any ring. The sign
/// is positive when the point is inside the exterior and outside every hole
/// (even-odd rule over all rings combined), negative otherwise, and the
/// result is exactly zero when the point lies on an edge.
///
/// Runs in O(total vertices). A polygon with no edges at all yields
/// negative infinity.
///
/// # Example
///
/// ```
/// use polylabel::{Point2, polygon::{Polygon, point_to_polygon_distance}};
///
/// let square = Polygon::from_coords(&[
///     vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]],
/// ]);
///
/// assert_eq!(point_to_polygon_distance(Point2::new(1.0, 2.0), &square), 1.0);
/// assert_eq!(point_to_polygon_distance(Point2::new(6.0, 2.0), &square), -2.0);
/// ```
pub fn point_to_polygon_distance<F: Float>(p: Point2<F>, polygon: &Polygon<F>) -> F {
    let mut inside = false;
    let mut min_dist_sq = F::infinity();

    for ring in polygon.rings() {
        for edge in ring.edges() {
            let a = edge.start;
            let b = edge.end;

            // Horizontal ray crossing; the division only runs when a.y != b.y.
            if (a.y > p.y) != (b.y > p.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }

            min_dist_sq = min_dist_sq.min(edge.distance_squared_to_point(p));
        }
    }

    if min_dist_sq == F::zero() {
        F::zero()
    } else if inside {
        min_dist_sq.sqrt()
    } else {
        -min_dist_sq.sqrt()
    }
}

/// Area-weighted centroid of the exterior ring.
///
/// Holes do not participate. When the exterior has zero signed area (all
/// vertices collinear or coincident) the first vertex is returned instead.
/// Returns `None` only for an empty exterior.
///
/// # Example
///
/// ```
/// use polylabel::{Point2, polygon::{Polygon, polygon_centroid}};
///
/// let triangle = Polygon::from_coords(&[vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]]]);
/// assert_eq!(polygon_centroid(&triangle), Some(Point2::new(1.0, 1.0)));
/// ```
pub fn polygon_centroid<F: Float>(polygon: &Polygon<F>) -> Option<Point2<F>> {
    let first = *polygon.exterior.vertices.first()?;
    let three = F::one() + F::one() + F::one();

    let mut area = F::zero();
    let mut cx = F::zero();
    let mut cy = F::zero();

    for edge in polygon.exterior.edges() {
        let a = edge.start;
        let b = edge.end;
        let f = a.x * b.y - b.x * a.y;
        cx = cx + (a.x + b.x) * f;
        cy = cy + (a.y + b.y) * f;
        area = area + f * three;
    }

    if area == F::zero() {
        return Some(first);
    }

    Some(Point2::new(cx / area, cy / area))
}
