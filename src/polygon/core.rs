//! Core polygon types: rings and polygons with holes.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A closed boundary loop.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
/// A repeated closing vertex is allowed and only contributes a zero-length
/// edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    /// The vertices of the ring in order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates a ring from `[x, y]` coordinate pairs.
    pub fn from_coords(coords: &[[F; 2]]) -> Self {
        Self {
            vertices: coords.iter().map(|&c| Point2::from(c)).collect(),
        }
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the edges of the ring, including the closing edge.
    ///
    /// Edge `i` runs from vertex `i` to its predecessor, so the first edge
    /// yielded joins vertex 0 to the last vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let j = if i == 0 { n - 1 } else { i - 1 };
            Segment2::new(self.vertices[i], self.vertices[j])
        })
    }

    /// Returns the bounding box, or `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Ring<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// A polygon made of an exterior ring and zero or more holes.
///
/// Winding order is not significant: containment uses the even-odd rule over
/// all rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The outer boundary.
    pub exterior: Ring<F>,
    /// Holes cut out of the exterior.
    pub interiors: Vec<Ring<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from an exterior ring and holes.
    #[inline]
    pub fn new(exterior: Ring<F>, interiors: Vec<Ring<F>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Creates a polygon without holes.
    #[inline]
    pub fn simple(vertices: Vec<Point2<F>>) -> Self {
        Self::new(Ring::new(vertices), Vec::new())
    }

    /// Creates a polygon from a list of rings, the first being the exterior.
    ///
    /// An empty list yields a polygon with an empty exterior.
    pub fn from_rings(rings: Vec<Ring<F>>) -> Self {
        let mut rings = rings.into_iter();
        let exterior = rings.next().unwrap_or_else(|| Ring::new(Vec::new()));
        Self::new(exterior, rings.collect())
    }

    /// Creates a polygon from nested `[x, y]` coordinate lists.
    ///
    /// # Example
    ///
    /// ```
    /// use polylabel::polygon::Polygon;
    ///
    /// let square_with_hole = Polygon::from_coords(&[
    ///     vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
    ///     vec![[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0]],
    /// ]);
    /// assert_eq!(square_with_hole.interiors.len(), 1);
    /// ```
    pub fn from_coords(rings: &[Vec<[F; 2]>]) -> Self {
        Self::from_rings(rings.iter().map(|r| Ring::from_coords(r)).collect())
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<F>> + '_ {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Returns the bounding box of the exterior ring.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        self.exterior.bounding_box()
    }

    /// Signed distance from `p` to the polygon outline.
    ///
    /// See [`point_to_polygon_distance`](super::point_to_polygon_distance).
    #[inline]
    pub fn signed_distance(&self, p: Point2<F>) -> F {
        super::distance::point_to_polygon_distance(p, self)
    }

    /// Returns true if `p` lies strictly inside the polygon and outside all
    /// holes.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        self.signed_distance(p) > F::zero()
    }
}
