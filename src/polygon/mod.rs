//! Polygons with holes and the distance queries the label search runs on.
//!
//! This module provides:
//! - [`Ring`] and [`Polygon`] (an exterior ring plus holes)
//! - Signed point-to-outline distance using the even-odd rule
//! - Area-weighted centroid of the exterior
//! - Optional input validation
//!
//! # Example
//!
//! ```
//! use polylabel::polygon::Polygon;
//! use polylabel::Point2;
//!
//! let frame = Polygon::from_coords(&[
//!     vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
//!     vec![[2.0, 2.0], [8.0, 2.0], [8.0, 8.0], [2.0, 8.0]],
//! ]);
//!
//! assert!(frame.contains(Point2::new(1.0, 5.0)));
//! assert!(!frame.contains(Point2::new(5.0, 5.0)));
//! ```

mod core;
mod distance;
mod validate;

pub use core::{Polygon, Ring};
pub use distance::{point_to_polygon_distance, polygon_centroid};
pub use validate::validate_polygon;
