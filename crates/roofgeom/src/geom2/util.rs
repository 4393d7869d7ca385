//! Pure point/polygon primitives used by the roof analyzer.
//!
//! - Metric: `distance`, `midpoint`, `polygon_area` (shoelace, unsigned).
//! - Angular: `vertex_angle` (directed, winding dependent), `is_reflex`.
//! - Slope: `correct_length_for_slope`, `correct_area_for_slope`.
//! - Lines: `are_collinear`, `simplify_collinear`.
//!
//! Every function is total over finite inputs; degenerate cases return
//! sentinels rather than errors.

use super::types::Point;
use crate::cfg::{DEGENERATE_LINE_EPS, SLOPE_COS_EPS};

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).norm()
}

/// Directed angle (degrees) swept from ray `curr→prev` to ray `curr→next`.
///
/// Computed as the difference of the rays' polar angles and shifted by 360
/// when negative, so the result lies in `[0, 360)`. For a consistent winding
/// the value is the interior angle on one side of the outline; callers must
/// keep the winding fixed for reflex tests to mean "concave".
pub fn vertex_angle(prev: Point, curr: Point, next: Point) -> f64 {
    let v1 = prev - curr;
    let v2 = next - curr;
    let a1 = v1.y.atan2(v1.x);
    let a2 = v2.y.atan2(v2.x);
    let mut deg = (a2 - a1).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    // a2 - a1 ∈ (-2π, 2π); rounding in to_degrees can land exactly on 360.
    if deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Reflex test: strictly greater than 180°.
#[inline]
pub fn is_reflex(angle_deg: f64) -> bool {
    angle_deg > 180.0
}

/// Unsigned shoelace area over the cyclic vertex sequence; `0` for < 3 points.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum();
    twice.abs() / 2.0
}

/// `cos(slope)` if usable as a divisor, `None` near vertical.
#[inline]
pub(crate) fn slope_divisor(slope_deg: f64) -> Option<f64> {
    let c = slope_deg.to_radians().cos();
    if c.abs() < SLOPE_COS_EPS {
        None
    } else {
        Some(c)
    }
}

/// True length on a plane pitched by `slope_deg`, from its horizontal projection.
///
/// Returns the input unchanged when `|cos(slope)| < 1e-3`.
#[inline]
pub fn correct_length_for_slope(projected_length: f64, slope_deg: f64) -> f64 {
    match slope_divisor(slope_deg) {
        Some(c) => projected_length / c,
        None => projected_length,
    }
}

/// True area on a plane pitched by `slope_deg`, from its horizontal projection.
///
/// Same guard as [`correct_length_for_slope`].
#[inline]
pub fn correct_area_for_slope(projected_area: f64, slope_deg: f64) -> f64 {
    match slope_divisor(slope_deg) {
        Some(c) => projected_area / c,
        None => projected_area,
    }
}

#[inline]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    (p1 + p2) / 2.0
}

/// Whether `p3` lies within `tolerance` (perpendicular distance) of line `p1–p2`.
///
/// Returns `false` when `p1` and `p2` (nearly) coincide.
pub fn are_collinear(p1: Point, p2: Point, p3: Point, tolerance: f64) -> bool {
    let d = p2 - p1;
    let len = d.norm();
    if len < DEGENERATE_LINE_EPS {
        return false;
    }
    let num = (d.y * p3.x - d.x * p3.y + p2.x * p1.y - p2.y * p1.x).abs();
    num / len < tolerance
}

/// Drop vertices lying on the line through their cyclic neighbours.
///
/// Single forward pass; a vertex is tested against its nearest kept neighbours
/// on both sides. Stops removing once 3 vertices remain.
pub fn simplify_collinear(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n <= 3 {
        return points.to_vec();
    }
    let mut keep = vec![true; n];
    let mut kept = n;
    for i in 0..n {
        if kept <= 3 {
            break;
        }
        let kept_at = |j: &usize| keep[*j];
        let prev = (1..n).map(|k| (i + n - k) % n).find(kept_at);
        let next = (1..n).map(|k| (i + k) % n).find(kept_at);
        let (Some(prev), Some(next)) = (prev, next) else {
            break;
        };
        if are_collinear(points[prev], points[next], points[i], tolerance) {
            keep[i] = false;
            kept -= 1;
        }
    }
    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}
