//! Tolerance defaults for roof measurement (internal).
//!
//! Policy
//! - Defaults are fixed constants. The classification heuristic and the slope
//!   guard are part of the measurement contract, so these are not runtime
//!   knobs; only the collinearity tolerance is chosen by callers.

/// `|cos(slope)|` below this leaves slope-corrected values unchanged.
pub(crate) const SLOPE_COS_EPS: f64 = 1e-3;
/// Minimum pixel length of the reference segment for a valid scale.
pub(crate) const MIN_REFERENCE_PX: f64 = 1.0;
/// An edge is "horizontal" when `dx > HORIZONTAL_RATIO * dy`.
pub(crate) const HORIZONTAL_RATIO: f64 = 2.0;
/// Line length under which `are_collinear` treats the line as undefined.
pub(crate) const DEGENERATE_LINE_EPS: f64 = 1e-3;
/// Default perpendicular tolerance (pixels) for collinearity checks.
pub const DEFAULT_COLLINEAR_TOL: f64 = 1.0;
