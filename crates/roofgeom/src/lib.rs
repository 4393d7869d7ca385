//! Roof geometry from digitized orthophoto outlines.
//!
//! A user traces the roof outline in image pixels, marks a reference segment of
//! known length and states the roof pitch. This crate turns that into
//! ridge/eave/rake/valley lengths and projected/true areas.
//!
//! Layout
//! - `geom2`: pure pixel-space primitives (distance, vertex angle, shoelace
//!   area, slope correction, collinearity) and a seeded outline sampler.
//! - `roof`: scale derivation, the `RoofAnalyzer` classification heuristic,
//!   the serialized `Report`, and request validation.
//!
//! Everything here is synchronous and side-effect free apart from `tracing`
//! events; callers install their own subscriber.

pub mod api;
mod cfg;
pub mod geom2;
pub mod roof;

pub use cfg::DEFAULT_COLLINEAR_TOL;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        are_collinear, correct_area_for_slope, correct_length_for_slope, distance, is_reflex,
        midpoint, polygon_area, simplify_collinear, vertex_angle, Edge, Point,
    };
    pub use crate::roof::{
        derive_scale, ClassifiedEdges, EdgeClass, MeasureRequest, Report, RoofAnalyzer,
    };
}
