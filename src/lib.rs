//! polylabel - Pole of inaccessibility for label placement
//!
//! Finds the point inside a polygon (with optional holes) that is farthest
//! from its outline, to within a chosen precision. That point is where a
//! label or marker reads best in an irregular shape: the center of the
//! largest circle that fits inside.
//!
//! # Example
//!
//! ```
//! use polylabel::{polylabel, Polygon};
//!
//! let square = Polygon::from_coords(&[
//!     vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
//! ]);
//!
//! let pole = polylabel(&square, 1.0);
//! assert_eq!((pole.x, pole.y, pole.distance), (5.0, 5.0, 5.0));
//! ```

pub mod bounds;
pub mod error;
pub mod io;
pub mod label;
pub mod polygon;
pub mod primitives;

pub use error::{InvalidRing, PolylabelError};
pub use label::{polylabel, polylabel_with, try_polylabel, LabelOptions, Pole};
pub use polygon::{Polygon, Ring};
pub use primitives::{Point2, Segment2, Vec2};
