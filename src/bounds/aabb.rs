//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the length of the shorter side.
    #[inline]
    pub fn min_extent(self) -> F {
        self.width().min(self.height())
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        let two = F::one() + F::one();
        Point2::new(
            self.min.x + self.width() / two,
            self.min.y + self.height() / two,
        )
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let aabb = Aabb2::from_points(vec![
            Point2::new(3.0_f64, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(1.0, 7.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Point2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Point2::new(3.0, 7.0));
        assert_eq!(aabb.width(), 5.0);
        assert_eq!(aabb.height(), 8.0);
        assert_eq!(aabb.min_extent(), 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        let aabb: Option<Aabb2<f64>> = Aabb2::from_points(Vec::new());
        assert!(aabb.is_none());
    }

    #[test]
    fn test_center() {
        let aabb = Aabb2::new(Point2::new(1.0_f64, 2.0), Point2::new(5.0, 10.0));
        assert_eq!(aabb.center(), Point2::new(3.0, 6.0));
    }

    #[test]
    fn test_collinear_points_have_zero_extent() {
        let aabb = Aabb2::from_points(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(aabb.height(), 0.0);
        assert_eq!(aabb.min_extent(), 0.0);
    }
}
