//! Curated surface for front ends (CLI, services).
//!
//! Front ends should only need these: parse a `MeasureRequest`, validate it,
//! analyze, and wrap the outcome in a `Response`.

pub use crate::geom2::rand::{draw_outline, OutlineCfg, ReplayToken, VertexCount};
pub use crate::geom2::{simplify_collinear, Point};
pub use crate::roof::{
    derive_scale, Areas, Dimensions, EdgeMeasure, MeasureRequest, Parameters, Report,
    RequestError, Response, RoofAnalyzer, ValidRequest,
};
