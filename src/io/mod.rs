//! Input/output utilities for polygon fixtures.
//!
//! Reads and writes polygons as JSON coordinate arrays.

mod json;

pub use json::{parse_polygon_json, pole_to_json, polygon_to_json};
