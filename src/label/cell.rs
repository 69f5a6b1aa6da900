//! Square probe cells and the max-potential priority queue.

use crate::polygon::{point_to_polygon_distance, Polygon};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A square probe region of the polygon's plane.
///
/// `distance` is the signed distance from the center to the outline, and
/// `max_potential` bounds the distance any point inside the square can
/// reach: the center distance plus the half-diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<F> {
    /// Center of the square.
    pub center: Point2<F>,
    /// Half the side length.
    pub half_size: F,
    /// Signed distance from `center` to the polygon outline.
    pub distance: F,
    /// Upper bound on the distance achievable within the cell.
    pub max_potential: F,
}

impl<F: Float> Cell<F> {
    /// Creates a cell and evaluates its distance against `polygon`.
    pub fn new(center: Point2<F>, half_size: F, polygon: &Polygon<F>) -> Self {
        let distance = point_to_polygon_distance(center, polygon);
        let sqrt_2 = (F::one() + F::one()).sqrt();
        Self {
            center,
            half_size,
            distance,
            max_potential: distance + half_size * sqrt_2,
        }
    }

    /// Splits the cell into four quadrants at half the half-size.
    ///
    /// Children are returned in the order lower-left, lower-right,
    /// upper-left, upper-right.
    pub fn split(&self, polygon: &Polygon<F>) -> [Cell<F>; 4] {
        let h = self.half_size / (F::one() + F::one());
        let Point2 { x, y } = self.center;
        [
            Cell::new(Point2::new(x - h, y - h), h, polygon),
            Cell::new(Point2::new(x + h, y - h), h, polygon),
            Cell::new(Point2::new(x - h, y + h), h, polygon),
            Cell::new(Point2::new(x + h, y + h), h, polygon),
        ]
    }
}

/// Heap entry ordering cells by `max_potential`.
struct Ranked<F>(Cell<F>);

impl<F: Float> PartialEq for Ranked<F> {
    fn eq(&self, other: &Self) -> bool {
        self.0.max_potential == other.0.max_potential
    }
}

impl<F: Float> Eq for Ranked<F> {}

impl<F: Float> PartialOrd for Ranked<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for Ranked<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .max_potential
            .partial_cmp(&other.0.max_potential)
            .unwrap_or(Ordering::Equal)
    }
}

/// Max-priority queue of pending cells keyed by `max_potential`.
///
/// Ties pop in unspecified order.
pub struct CellQueue<F> {
    heap: BinaryHeap<Ranked<F>>,
}

impl<F: Float> CellQueue<F> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a cell. O(log n).
    #[inline]
    pub fn push(&mut self, cell: Cell<F>) {
        self.heap.push(Ranked(cell));
    }

    /// Removes the cell with the largest `max_potential`. O(log n).
    #[inline]
    pub fn pop(&mut self) -> Option<Cell<F>> {
        self.heap.pop().map(|Ranked(cell)| cell)
    }

    /// Number of pending cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no cells are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<F: Float> Default for CellQueue<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> std::fmt::Debug for CellQueue<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellQueue").field("len", &self.len()).finish()
    }
}
