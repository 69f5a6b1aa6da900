//! Label placement via the pole of inaccessibility.
//!
//! The pole of inaccessibility is the interior point farthest from the
//! polygon outline, which makes it a good anchor for a label or marker in an
//! irregular shape. The search here approximates it to a caller-supplied
//! precision using quadtree subdivision driven by a best-first queue.
//!
//! # Example
//!
//! ```
//! use polylabel::label::{polylabel_report, LabelOptions, LogObserver};
//! use polylabel::polygon::Polygon;
//!
//! let lake = Polygon::from_coords(&[
//!     vec![[0.0, 0.0], [20.0, 0.0], [20.0, 20.0], [0.0, 20.0]],
//!     vec![[8.0, 8.0], [12.0, 8.0], [12.0, 12.0], [8.0, 12.0]],
//! ]);
//!
//! let report = polylabel_report(&lake, &LabelOptions::with_precision(0.5), &mut LogObserver);
//!
//! // The hole pushes the pole off the center.
//! assert!(lake.contains(report.pole.point()));
//! assert!(report.pole.distance > 3.5);
//! ```

mod cell;
mod observer;
mod search;

pub use cell::{Cell, CellQueue};
pub use observer::{FnObserver, LogObserver, SearchObserver};
pub use search::{
    polylabel, polylabel_report, polylabel_with, try_polylabel, LabelOptions, LabelReport, Pole,
};
