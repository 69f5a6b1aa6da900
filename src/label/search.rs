//! Best-first search for the pole of inaccessibility.
//!
//! The bounding box of the exterior is tiled with square cells, which are
//! explored in order of their potential (the best distance any point inside
//! could reach). A cell is split into quadrants unless its potential cannot
//! beat the current best by more than the precision.

use super::cell::{Cell, CellQueue};
use super::observer::{to_f64, SearchObserver};
use crate::error::PolylabelError;
use crate::polygon::{polygon_centroid, validate_polygon, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for the label search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOptions<F> {
    /// Tolerance on the returned distance. Must be positive; smaller values
    /// mean more subdivisions.
    pub precision: F,
}

impl<F: Float> Default for LabelOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::one(),
        }
    }
}

impl<F: Float> LabelOptions<F> {
    /// Creates options with the given precision.
    pub fn with_precision(precision: F) -> Self {
        Self { precision }
    }
}

/// The selected label point and its distance to the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pole<F> {
    pub x: F,
    pub y: F,
    /// Signed distance from `(x, y)` to the polygon outline.
    pub distance: F,
}

impl<F: Float> Pole<F> {
    /// Returns the pole position as a point.
    #[inline]
    pub fn point(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }
}

/// A search result together with the number of distance probes it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelReport<F> {
    pub pole: Pole<F>,
    /// Cells evaluated, including the two initial guesses.
    pub probes: usize,
}

/// Finds the pole of inaccessibility of a polygon.
///
/// Returns the interior point farthest from the outline, with its distance
/// accurate to within `precision`. Polygons whose exterior bounding box has
/// zero width or height return the box's minimum corner with distance zero.
///
/// Input is not validated; see [`try_polylabel`] for a checked variant.
///
/// # Example
///
/// ```
/// use polylabel::polylabel;
/// use polylabel::polygon::Polygon;
///
/// // An L shape: the pole sits in the corner square, pushed away from the
/// // reflex vertex at (10, 10).
/// let l_shape = Polygon::from_coords(&[vec![
///     [0.0, 0.0], [30.0, 0.0], [30.0, 10.0],
///     [10.0, 10.0], [10.0, 30.0], [0.0, 30.0],
/// ]]);
///
/// let pole = polylabel(&l_shape, 0.1);
/// assert!(pole.distance > 5.75 && pole.distance < 5.86);
/// assert!(pole.x < 10.0 && pole.y < 10.0);
/// ```
pub fn polylabel<F: Float>(polygon: &Polygon<F>, precision: F) -> Pole<F> {
    polylabel_with(polygon, &LabelOptions::with_precision(precision), &mut ())
}

/// Like [`polylabel`], reporting progress to `observer`.
pub fn polylabel_with<F, O>(
    polygon: &Polygon<F>,
    options: &LabelOptions<F>,
    observer: &mut O,
) -> Pole<F>
where
    F: Float,
    O: SearchObserver<F> + ?Sized,
{
    polylabel_report(polygon, options, observer).pole
}

/// Like [`polylabel_with`], also returning the probe count.
pub fn polylabel_report<F, O>(
    polygon: &Polygon<F>,
    options: &LabelOptions<F>,
    observer: &mut O,
) -> LabelReport<F>
where
    F: Float,
    O: SearchObserver<F> + ?Sized,
{
    let Some(bbox) = polygon.bounding_box() else {
        log::trace!("polylabel: empty exterior, returning origin");
        return LabelReport {
            pole: Pole {
                x: F::zero(),
                y: F::zero(),
                distance: F::zero(),
            },
            probes: 0,
        };
    };

    let cell_size = bbox.min_extent();
    if cell_size == F::zero() {
        log::trace!("polylabel: degenerate bounding box, skipping search");
        return LabelReport {
            pole: Pole {
                x: bbox.min.x,
                y: bbox.min.y,
                distance: F::zero(),
            },
            probes: 0,
        };
    }

    let mut search = Search {
        polygon,
        precision: options.precision,
        queue: CellQueue::new(),
        probes: 0,
        observer,
    };

    // Tiles past the max corner are included when the box is not a whole
    // multiple of the cell size.
    let h = cell_size / (F::one() + F::one());
    let mut x = bbox.min.x;
    while x < bbox.max.x {
        let mut y = bbox.min.y;
        while y < bbox.max.y {
            let cell = search.probe(Point2::new(x + h, y + h), h);
            search.queue.push(cell);
            y = y + cell_size;
        }
        x = x + cell_size;
    }

    // Exterior is non-empty here, so the centroid always exists.
    let centroid = polygon_centroid(polygon).unwrap_or(bbox.min);
    let mut best = search.probe(centroid, F::zero());
    let bbox_cell = search.probe(bbox.center(), F::zero());
    if bbox_cell.distance > best.distance {
        best = bbox_cell;
    }

    let best = search.refine(best);
    search.observer.finished(search.probes, best.distance);
    log::trace!(
        "polylabel: {} probes, best distance {}",
        search.probes,
        to_f64(best.distance)
    );

    LabelReport {
        pole: Pole {
            x: best.center.x,
            y: best.center.y,
            distance: best.distance,
        },
        probes: search.probes,
    }
}

/// Validates the polygon and precision, then runs [`polylabel`].
///
/// # Errors
///
/// Returns [`PolylabelError::InvalidPrecision`] when `precision` is not a
/// positive finite number, and the errors of
/// [`validate_polygon`](crate::polygon::validate_polygon) for malformed rings.
pub fn try_polylabel<F: Float>(
    polygon: &Polygon<F>,
    precision: F,
) -> Result<Pole<F>, PolylabelError> {
    if !(precision.is_finite() && precision > F::zero()) {
        return Err(PolylabelError::InvalidPrecision);
    }
    validate_polygon(polygon)?;
    Ok(polylabel(polygon, precision))
}

/// Mutable state of one search run.
struct Search<'a, F, O: ?Sized> {
    polygon: &'a Polygon<F>,
    precision: F,
    queue: CellQueue<F>,
    probes: usize,
    observer: &'a mut O,
}

impl<F, O> Search<'_, F, O>
where
    F: Float,
    O: SearchObserver<F> + ?Sized,
{
    fn probe(&mut self, center: Point2<F>, half_size: F) -> Cell<F> {
        self.probes += 1;
        Cell::new(center, half_size, self.polygon)
    }

    /// Drains the queue, returning the best cell seen.
    fn refine(&mut self, mut best: Cell<F>) -> Cell<F> {
        while let Some(cell) = self.queue.pop() {
            if cell.distance > best.distance {
                best = cell;
                self.observer.improved(best.distance, self.probes);
            }

            // Already considered as a candidate; only further splitting is
            // withheld.
            if cell.max_potential - best.distance <= self.precision {
                continue;
            }

            for child in cell.split(self.polygon) {
                self.queue.push(child);
            }
            self.probes += 4;
        }

        best
    }
}
