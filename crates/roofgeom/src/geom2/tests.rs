use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn distance_and_midpoint() {
    assert!((distance(pt(0.0, 0.0), pt(3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert_eq!(distance(pt(2.0, 2.0), pt(2.0, 2.0)), 0.0);
    assert_eq!(midpoint(pt(0.0, 0.0), pt(10.0, -4.0)), vector![5.0, -2.0]);
}

#[test]
fn vertex_angle_quarter_turns() {
    let a = vertex_angle(pt(1.0, 0.0), pt(0.0, 0.0), pt(0.0, 1.0));
    assert!((a - 90.0).abs() < 1e-9);
    // Reversed sweep gives the complementary directed angle.
    let b = vertex_angle(pt(0.0, 1.0), pt(0.0, 0.0), pt(1.0, 0.0));
    assert!((b - 270.0).abs() < 1e-9);
    assert!(!is_reflex(a));
    assert!(is_reflex(b));
    // Straight continuation.
    let c = vertex_angle(pt(-1.0, 0.0), pt(0.0, 0.0), pt(1.0, 0.0));
    assert!((c - 180.0).abs() < 1e-9);
    assert!(!is_reflex(c));
}

#[test]
fn polygon_area_triangle_both_windings() {
    let tri = [pt(0.0, 0.0), pt(4.0, 0.0), pt(0.0, 3.0)];
    assert!((polygon_area(&tri) - 6.0).abs() < 1e-12);
    let rev: Vec<Point> = tri.iter().rev().copied().collect();
    assert!((polygon_area(&rev) - 6.0).abs() < 1e-12);
}

#[test]
fn polygon_area_square_and_degenerate() {
    let sq = [pt(0.0, 0.0), pt(0.0, 10.0), pt(10.0, 10.0), pt(10.0, 0.0)];
    assert!((polygon_area(&sq) - 100.0).abs() < 1e-12);
    assert_eq!(polygon_area(&[]), 0.0);
    assert_eq!(polygon_area(&[pt(0.0, 0.0), pt(5.0, 5.0)]), 0.0);
}

#[test]
fn slope_correction_values_and_guard() {
    assert_eq!(correct_length_for_slope(100.0, 0.0), 100.0);
    assert!((correct_length_for_slope(100.0, 60.0) - 200.0).abs() < 1e-9);
    assert!((correct_area_for_slope(50.0, 60.0) - 100.0).abs() < 1e-9);
    // Vertical pitch: returned unchanged, never inf/NaN.
    assert_eq!(correct_length_for_slope(100.0, 90.0), 100.0);
    assert_eq!(correct_area_for_slope(100.0, 90.0), 100.0);
    assert_eq!(correct_area_for_slope(100.0, -90.0), 100.0);
    // Just outside the guard the division still happens.
    let near = correct_length_for_slope(1.0, 89.9);
    assert!(near.is_finite() && near > 500.0);
}

#[test]
fn collinearity() {
    let a = pt(0.0, 0.0);
    let b = pt(10.0, 0.0);
    assert!(are_collinear(a, b, pt(5.0, 0.5), 1.0));
    assert!(!are_collinear(a, b, pt(5.0, 1.0), 1.0));
    assert!(are_collinear(a, b, pt(50.0, -0.2), 1.0));
    // Degenerate line.
    assert!(!are_collinear(a, pt(0.0, 0.0005), pt(0.0, 0.0), 1.0));
}

#[test]
fn simplify_drops_midpoint_clicks() {
    let pts = [
        pt(0.0, 0.0),
        pt(5.0, 0.2),
        pt(10.0, 0.0),
        pt(10.0, 10.0),
        pt(0.0, 10.0),
    ];
    let out = simplify_collinear(&pts, 1.0);
    assert_eq!(out, vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]);
    assert!((polygon_area(&out) - 100.0).abs() < 1e-12);
}

#[test]
fn simplify_keeps_triangles() {
    let tri = [pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)];
    assert_eq!(simplify_collinear(&tri, 1.0), tri.to_vec());
    let line = [pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0), pt(3.0, 0.0)];
    assert_eq!(simplify_collinear(&line, 1.0).len(), 3);
}

#[test]
fn edge_helpers() {
    let e = Edge::new(pt(2.0, 1.0), pt(6.0, 4.0));
    assert!((e.length_px() - 5.0).abs() < 1e-12);
    assert_eq!(e.midpoint(), pt(4.0, 2.5));
    assert_eq!(e.extents(), (4.0, 3.0));
    assert_eq!(e.endpoints(), [pt(2.0, 1.0), pt(6.0, 4.0)]);
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn vertex_angle_in_range(a in point(), b in point(), c in point()) {
        let ang = vertex_angle(a, b, c);
        prop_assert!((0.0..360.0).contains(&ang), "angle {ang} out of range");
    }

    #[test]
    fn area_is_winding_invariant(pts in prop::collection::vec(point(), 0..12)) {
        let fwd = polygon_area(&pts);
        let rev: Vec<Point> = pts.iter().rev().copied().collect();
        // Summation order differs, so compare against the magnitude of the terms.
        let mag: f64 = (0..pts.len())
            .map(|i| {
                let (p, q) = (pts[i], pts[(i + 1) % pts.len()]);
                (p.x * q.y).abs() + (q.x * p.y).abs()
            })
            .sum();
        prop_assert!(fwd >= 0.0);
        prop_assert!((fwd - polygon_area(&rev)).abs() <= 1e-12 * mag + 1e-12);
    }

    #[test]
    fn slope_correction_never_shrinks(len in 0.0f64..1.0e6, slope in -89.9f64..89.9) {
        let out = correct_length_for_slope(len, slope);
        prop_assert!(out.is_finite());
        prop_assert!(out >= len);
        prop_assert_eq!(out, correct_area_for_slope(len, slope));
    }
}
