//! Roof analysis: scale, edge classification and measurements.
//!
//! Purpose
//! - Turn a digitized outline (pixels), a reference segment of known length and
//!   a roof pitch into ridge/eave/rake/valley lengths and projected/true areas.
//!
//! Pipeline
//! - `derive_scale` (m/px) → `RoofAnalyzer::new(points, scale, slope)` →
//!   `full_analysis()` → `Report`.
//! - `MeasureRequest::validate()` wraps the same pipeline with the checks a
//!   front end must run first.
//!
//! Classification is a local heuristic (corner angle, edge direction and
//! height against the outline's mean). It does not check that the buckets form
//! a consistent roof; gambrel or split-level outlines can be misattributed.
//!
//! Code cross-refs: `geom2::{vertex_angle, polygon_area, correct_*_for_slope}`.

mod analyzer;
mod request;
mod scale;
mod types;

pub use analyzer::RoofAnalyzer;
pub use request::{MeasureRequest, RequestError, Response, ValidRequest};
pub use scale::derive_scale;
pub use types::{
    Areas, ClassifiedEdges, Dimensions, EdgeClass, EdgeMeasure, Parameters, Report,
};
