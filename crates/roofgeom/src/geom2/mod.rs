//! 2D geometry primitives in image-pixel space.
//!
//! Purpose
//! - Stateless point/polygon operations the roof analyzer is built from:
//!   distances, directed vertex angles, shoelace area, slope corrections,
//!   midpoints and collinearity.
//! - Keep the API minimal and numerically explicit: each degenerate case has a
//!   documented sentinel (area `0`, unchanged value under a vertical slope,
//!   `false` for an undefined line).
//!
//! Conventions
//! - `Point` is `nalgebra::Vector2<f64>`; `y` grows downward as in images.
//! - Polygons are `&[Point]`, implicitly closed, winding not enforced.
//!
//! Code cross-refs: `crate::roof::RoofAnalyzer`, `crate::cfg`.

pub mod rand;
mod types;
mod util;

pub use types::{Edge, Point};
pub use util::{
    are_collinear, correct_area_for_slope, correct_length_for_slope, distance, is_reflex,
    midpoint, polygon_area, simplify_collinear, vertex_angle,
};
pub(crate) use util::slope_divisor;

#[cfg(test)]
mod tests;
