//! End-to-end properties of the label search.

use approx::assert_relative_eq;
use polylabel::io::parse_polygon_json;
use polylabel::label::{polylabel_report, FnObserver, LabelOptions, LabelReport};
use polylabel::polygon::{polygon_centroid, Polygon, Ring};
use polylabel::{polylabel, Point2};

/// Star-shaped blob with jittered radii between 600 and 1000.
fn blob(num_vertices: usize, seed: u64) -> Polygon<f64> {
    let mut state = seed;
    let vertices = (0..num_vertices)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let jitter = state as f64 / u64::MAX as f64;

            let angle = i as f64 / num_vertices as f64 * 2.0 * std::f64::consts::PI;
            let radius = 1000.0 * (0.6 + 0.4 * jitter);
            Point2::new(3000.0 + radius * angle.cos(), 2000.0 + radius * angle.sin())
        })
        .collect();
    Polygon::simple(vertices)
}

fn regular_polygon(sides: usize, radius: f64) -> Polygon<f64> {
    let vertices = (0..sides)
        .map(|i| {
            let angle = i as f64 / sides as f64 * 2.0 * std::f64::consts::PI;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::simple(vertices)
}

fn report(polygon: &Polygon<f64>, precision: f64) -> LabelReport<f64> {
    polylabel_report(polygon, &LabelOptions::with_precision(precision), &mut ())
}

#[test]
fn repeated_calls_are_identical() {
    let polygon = blob(300, 7);
    assert_eq!(report(&polygon, 1.0), report(&polygon, 1.0));
}

#[test]
fn near_circle_pole_is_center() {
    let radius = 100.0;
    let sides = 256;
    let apothem = radius * (std::f64::consts::PI / sides as f64).cos();
    let polygon = regular_polygon(sides, radius);

    for precision in [5.0, 1.0, 0.01] {
        let pole = polylabel(&polygon, precision);
        assert!(pole.distance <= apothem + 1e-9, "distance above the inscribed radius");
        assert!(pole.distance >= apothem - precision, "distance not within precision");
        assert!(pole.point().distance(Point2::origin()) <= precision * 1.001);
    }
}

#[test]
fn finer_precision_is_at_least_as_good() {
    let polygon = blob(512, 987654321);
    let coarse = report(&polygon, 50.0);
    let fine = report(&polygon, 1.0);
    let finest = report(&polygon, 0.1);

    assert!(fine.pole.distance >= coarse.pole.distance);
    assert!(finest.pole.distance >= fine.pole.distance);
    assert!(coarse.pole.distance >= finest.pole.distance - 50.0);

    assert!(coarse.probes < fine.probes);
    assert!(fine.probes <= finest.probes);
}

#[test]
fn irregular_polygon_coarse_and_fine() {
    let polygon = blob(1024, 2124);
    let fine = report(&polygon, 1.0);
    let coarse = report(&polygon, 50.0);

    assert!(fine.pole.distance > 0.0);
    assert!(coarse.pole.distance > 0.0);
    assert!(coarse.pole.distance >= fine.pole.distance - 50.0);
    assert!(coarse.pole.distance <= fine.pole.distance + 1.0);
    assert!(coarse.probes < fine.probes);

    // The returned distance is the real distance at the returned point.
    assert_eq!(
        polygon.signed_distance(fine.pole.point()),
        fine.pole.distance
    );
}

#[test]
fn lake_fixture_matches_recorded_result() {
    let polygon = parse_polygon_json(include_str!("fixtures/lake.json")).unwrap();

    let fine = report(&polygon, 1.0);
    assert_relative_eq!(fine.pole.x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(fine.pole.y, 10.0, epsilon = 1e-12);
    assert_relative_eq!(fine.pole.distance, 4.0, epsilon = 1e-12);

    let coarse = report(&polygon, 50.0);
    assert_relative_eq!(coarse.pole.x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(coarse.pole.y, 10.0, epsilon = 1e-12);
    assert_relative_eq!(coarse.pole.distance, 4.0, epsilon = 1e-12);

    // One seed cell plus the two guesses, none worth splitting.
    assert_eq!(coarse.probes, 3);
    assert!(coarse.probes < fine.probes);
}

#[test]
fn collinear_polygon_is_degenerate() {
    let polygon = parse_polygon_json("[[[0, 0], [1, 0], [2, 0], [0, 0]]]").unwrap();
    let pole = polylabel(&polygon, 1.0);
    assert_eq!(pole.distance, 0.0);
    assert_eq!(pole.point(), Point2::new(0.0, 0.0));
}

#[test]
fn sign_of_distance_for_convex_polygon() {
    let hexagon = regular_polygon(6, 10.0);
    let centroid = polygon_centroid(&hexagon).unwrap();
    assert!(hexagon.signed_distance(centroid) > 0.0);
    assert!(hexagon.signed_distance(Point2::new(500.0, -500.0)) < 0.0);
}

#[test]
fn pole_avoids_hole_over_centroid() {
    let polygon = parse_polygon_json(include_str!("fixtures/frame.json")).unwrap();
    let hole = Polygon::new(polygon.interiors[0].clone(), Vec::new());

    // Both initial guesses fall in the hole.
    let centroid = polygon_centroid(&polygon).unwrap();
    assert!(polygon.signed_distance(centroid) < 0.0);

    let pole = polylabel(&polygon, 0.5);
    assert!(pole.distance > 0.0);
    assert!(hole.signed_distance(pole.point()) < 0.0, "pole inside the hole");

    // The largest circle sits in a corner of the frame, tangent to both outer
    // edges and touching the hole corner at (20, 15).
    let expected = 35.0 - 600.0_f64.sqrt();
    assert!(pole.distance <= expected + 1e-9);
    assert!(pole.distance >= expected - 0.5);
}

#[test]
fn l_shape_fixture() {
    let polygon = parse_polygon_json(include_str!("fixtures/l_shape.json")).unwrap();
    // Inscribed circle in the corner square, tangent to both outer edges and
    // the reflex vertex at (10, 10).
    let expected = 10.0 * std::f64::consts::SQRT_2 / (1.0 + std::f64::consts::SQRT_2);

    let pole = polylabel(&polygon, 0.001);
    assert!(pole.distance <= expected + 1e-9);
    assert_relative_eq!(pole.distance, expected, epsilon = 0.001);
    assert_relative_eq!(pole.x, expected, epsilon = 0.01);
    assert_relative_eq!(pole.y, expected, epsilon = 0.01);
}

#[test]
fn observer_reports_each_improvement() {
    let polygon = blob(128, 99);
    let mut improvements = Vec::new();
    let mut summary = Vec::new();
    let result = {
        let mut observer = FnObserver(|line: &str| {
            if line.starts_with("found best") {
                improvements.push(line.to_owned());
            } else {
                summary.push(line.to_owned());
            }
        });
        polylabel_report(&polygon, &LabelOptions::default(), &mut observer)
    };

    assert_eq!(
        summary,
        vec![
            format!("num probes: {}", result.probes),
            format!("best distance: {}", result.pole.distance),
        ]
    );
    for line in &improvements {
        assert!(line.ends_with(" probes"));
    }
}

#[test]
fn ring_built_from_points_matches_coords() {
    let from_points = Polygon::new(
        Ring::from(vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 4.0),
        ]),
        Vec::new(),
    );
    let from_coords = Polygon::from_coords(&[vec![[0.0, 0.0], [6.0, 0.0], [6.0, 4.0]]]);
    assert_eq!(polylabel(&from_points, 0.1), polylabel(&from_coords, 0.1));
}
