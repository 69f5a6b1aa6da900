//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A closed 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns `true` if both endpoints are exactly equal.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.length_squared() == F::zero()
    }

    /// Computes the closest point on the segment to `p`.
    ///
    /// The point is projected onto the supporting line with
    /// `t = (p - start)·d / |d|²`. Parameters above 1 snap to `end`, positive
    /// parameters keep the projection, and everything else (including a
    /// degenerate segment) snaps to `start`. No tolerance is applied.
    pub fn closest_point(self, p: Point2<F>) -> Point2<F> {
        let d = self.direction();
        let len_sq = d.magnitude_squared();

        if len_sq > F::zero() {
            let t = (p - self.start).dot(d) / len_sq;
            if t > F::one() {
                return self.end;
            } else if t > F::zero() {
                return self.start + d * t;
            }
        }

        self.start
    }

    /// Computes the squared distance from a point to this segment.
    ///
    /// This is the inner loop of polygon distance queries, so no square root
    /// is taken.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        p.distance_squared(self.closest_point(p))
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
