//! Basic 2D types in image-pixel space.
//!
//! - `Point`: `(x, y)` with `y` growing downward (image convention).
//! - `Edge`: ordered pair of adjacent outline vertices.

use nalgebra::Vector2;
use serde::Serialize;

/// Pixel-space point. Serializes as `[x, y]`.
pub type Point = Vector2<f64>;

/// Directed outline edge `from → to`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Euclidean length in pixels.
    #[inline]
    pub fn length_px(&self) -> f64 {
        super::distance(self.from, self.to)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        super::midpoint(self.from, self.to)
    }

    /// Absolute axis extents `(dx, dy)`.
    #[inline]
    pub fn extents(&self) -> (f64, f64) {
        let d = self.to - self.from;
        (d.x.abs(), d.y.abs())
    }

    /// Endpoints as a pair, in edge order.
    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.from, self.to]
    }
}
