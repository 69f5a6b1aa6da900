//! JSON coordinate arrays for polygons and results.
//!
//! Polygons use the nested-array form of a GeoJSON `Polygon`'s
//! `coordinates` member: `[[[x, y], ...], ...]`, exterior ring first.

use crate::error::PolylabelError;
use crate::label::Pole;
use crate::polygon::{Polygon, Ring};
use serde_json::json;

/// Parses a polygon from nested JSON coordinate arrays.
///
/// Extra elements in a position (such as altitude) are ignored.
///
/// # Errors
///
/// Returns [`PolylabelError::Parse`] for malformed JSON, non-numeric
/// coordinates, or positions with fewer than two elements.
///
/// # Example
///
/// ```
/// use polylabel::io::parse_polygon_json;
///
/// let poly = parse_polygon_json("[[[0, 0], [4, 0], [4, 4], [0, 4]]]").unwrap();
/// assert_eq!(poly.exterior.len(), 4);
/// assert!(poly.interiors.is_empty());
/// ```
pub fn parse_polygon_json(input: &str) -> Result<Polygon<f64>, PolylabelError> {
    let rings: Vec<Vec<Vec<f64>>> = serde_json::from_str(input)?;

    let rings = rings
        .into_iter()
        .enumerate()
        .map(|(r, ring)| {
            ring.into_iter()
                .enumerate()
                .map(|(v, position)| match position.as_slice() {
                    [x, y, ..] => Ok([*x, *y]),
                    _ => Err(PolylabelError::Parse(format!(
                        "ring {r} vertex {v}: expected [x, y], found {} values",
                        position.len()
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|coords| Ring::from_coords(&coords))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::from_rings(rings))
}

/// Serializes a polygon to nested JSON coordinate arrays.
pub fn polygon_to_json(polygon: &Polygon<f64>) -> String {
    let rings: Vec<Vec<[f64; 2]>> = polygon
        .rings()
        .map(|ring| ring.vertices.iter().map(|p| [p.x, p.y]).collect())
        .collect();
    json!(rings).to_string()
}

/// Serializes a search result as `{"x": .., "y": .., "distance": ..}`.
pub fn pole_to_json(pole: &Pole<f64>) -> String {
    json!({
        "x": pole.x,
        "y": pole.y,
        "distance": pole.distance,
    })
    .to_string()
}
