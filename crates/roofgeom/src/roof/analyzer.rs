//! Edge classification and measurement over one roof outline.

use tracing::{debug, warn};

use super::types::{Areas, ClassifiedEdges, Dimensions, EdgeClass, EdgeMeasure, Parameters, Report};
use crate::cfg::HORIZONTAL_RATIO;
use crate::geom2::{
    correct_area_for_slope, correct_length_for_slope, is_reflex, polygon_area, slope_divisor,
    vertex_angle, Edge, Point,
};

/// Round to 2 decimals; exact ties go to the even neighbour (0.125 → 0.12).
#[inline]
pub(crate) fn round_2dp(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Analyzer over an immutable snapshot of outline, scale and slope.
///
/// Invariants
/// - `points` are in image-pixel space with a consistent winding; convex
///   corners must come out of [`vertex_angle`] below 180° (counterclockwise as
///   seen on screen, `y` down).
/// - `scale` is meters per pixel; a zero scale zeroes every length and area.
#[derive(Clone, Debug)]
pub struct RoofAnalyzer {
    points: Vec<Point>,
    scale: f64,
    slope_deg: f64,
}

impl RoofAnalyzer {
    pub fn new(points: impl Into<Vec<Point>>, scale: f64, slope_deg: f64) -> Self {
        Self {
            points: points.into(),
            scale,
            slope_deg,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn slope_deg(&self) -> f64 {
        self.slope_deg
    }

    /// Cyclic edge list: vertex `i` paired with vertex `i+1 (mod n)`.
    pub fn build_edges(&self) -> Vec<Edge> {
        let n = self.points.len();
        (0..n)
            .map(|i| Edge::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    fn mean_y(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.y).sum::<f64>() / self.points.len() as f64
    }

    /// Class of the edge leaving vertex `i`, given the outline's mean `y`.
    ///
    /// Heuristic (local only, no roof-topology check):
    /// 1. reflex corner at `i` → valley;
    /// 2. edge with `dx > 2·dy` → ridge if it starts above the mean height, else eave;
    /// 3. otherwise → rake.
    fn class_at(&self, i: usize, mean_y: f64) -> EdgeClass {
        let n = self.points.len();
        let prev = self.points[(i + n - 1) % n];
        let curr = self.points[i];
        let next = self.points[(i + 1) % n];
        if is_reflex(vertex_angle(prev, curr, next)) {
            return EdgeClass::Valley;
        }
        let (dx, dy) = Edge::new(curr, next).extents();
        if dx > HORIZONTAL_RATIO * dy {
            // Image y grows downward: smaller y is higher on the roof.
            if curr.y < mean_y {
                EdgeClass::Ridge
            } else {
                EdgeClass::Eave
            }
        } else {
            EdgeClass::Rake
        }
    }

    /// Class of the edge leaving vertex `i`, or `None` if there is no such vertex.
    pub fn edge_class(&self, i: usize) -> Option<EdgeClass> {
        (i < self.points.len()).then(|| self.class_at(i, self.mean_y()))
    }

    /// Partition every edge into exactly one bucket, preserving edge order.
    pub fn classify_edges(&self) -> ClassifiedEdges {
        let mean_y = self.mean_y();
        let mut out = ClassifiedEdges::default();
        for (i, edge) in self.build_edges().into_iter().enumerate() {
            out.push(self.class_at(i, mean_y), edge);
        }
        out
    }

    /// Edge length in meters, optionally corrected for the roof pitch.
    pub fn edge_length(&self, edge: &Edge, apply_slope_correction: bool) -> f64 {
        let meters = edge.length_px() * self.scale;
        if apply_slope_correction {
            correct_length_for_slope(meters, self.slope_deg)
        } else {
            meters
        }
    }

    /// Per-bucket measurements with 1-based ids within each bucket.
    pub fn compute_dimensions(&self) -> Dimensions {
        let classified = self.classify_edges();
        let mut dims = Dimensions::default();
        for class in EdgeClass::ALL {
            let measures = classified
                .bucket(class)
                .iter()
                .enumerate()
                .map(|(k, edge)| EdgeMeasure {
                    id: k + 1,
                    length_m: round_2dp(self.edge_length(edge, class.is_slope_corrected())),
                    endpoints: edge.endpoints(),
                    midpoint: edge.midpoint(),
                })
                .collect();
            *dims.bucket_mut(class) = measures;
        }
        dims
    }

    /// Projected and pitched areas in m².
    pub fn compute_areas(&self) -> Areas {
        let projected = polygon_area(&self.points) * self.scale * self.scale;
        let pitched = correct_area_for_slope(projected, self.slope_deg);
        Areas {
            projected_m2: round_2dp(projected),
            true_m2: round_2dp(pitched),
        }
    }

    pub fn full_analysis(&self) -> Report {
        if slope_divisor(self.slope_deg).is_none() {
            warn!(
                slope_deg = self.slope_deg,
                "slope is near vertical; slope correction skipped"
            );
        }
        let dimensions = self.compute_dimensions();
        let areas = self.compute_areas();
        debug!(
            vertices = self.points.len(),
            ridges = dimensions.ridges.len(),
            eaves = dimensions.eaves.len(),
            rakes = dimensions.rakes.len(),
            valleys = dimensions.valleys.len(),
            projected_m2 = areas.projected_m2,
            true_m2 = areas.true_m2,
            "roof analysis"
        );
        Report {
            dimensions,
            areas,
            parameters: Parameters {
                slope_deg: self.slope_deg,
                scale: self.scale,
                vertex_count: self.points.len(),
            },
        }
    }
}
