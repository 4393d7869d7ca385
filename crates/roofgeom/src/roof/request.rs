//! Measurement requests: wire format, validation and the response envelope.
//!
//! Validation runs before the analyzer is constructed, so the core never sees
//! fewer than 3 vertices, a missing reference or a zero scale.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::analyzer::RoofAnalyzer;
use super::scale::derive_scale;
use super::types::Report;
use crate::geom2::Point;

/// Raw request as posted by a client. All fields may be absent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MeasureRequest {
    #[serde(rename = "punkty_dachu", default)]
    pub roof_points: Vec<[f64; 2]>,
    #[serde(rename = "punkt_a", default)]
    pub reference_a: Option<[f64; 2]>,
    #[serde(rename = "punkt_b", default)]
    pub reference_b: Option<[f64; 2]>,
    #[serde(rename = "rzeczywista_dlugosc", default)]
    pub reference_length_m: Option<f64>,
    #[serde(rename = "kat_nachylenia", default)]
    pub slope_deg: f64,
}

/// Request rejected before analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Fewer than 3 outline vertices.
    TooFewPoints { got: usize },
    /// Reference point A or B absent.
    MissingReference,
    /// Reference length absent, zero or negative.
    NonPositiveLength,
    /// Reference points closer than one pixel (scale would be zero).
    DegenerateReference,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::TooFewPoints { got } => write!(
                f,
                "mark at least 3 roof points (got {got})"
            ),
            RequestError::MissingReference => {
                write!(f, "define both reference points A and B")
            }
            RequestError::NonPositiveLength => {
                write!(f, "give the real-world length of segment AB (must be > 0)")
            }
            RequestError::DegenerateReference => write!(
                f,
                "scale could not be derived: reference points A and B are too close"
            ),
        }
    }
}

impl std::error::Error for RequestError {}

/// A request that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidRequest {
    pub roof_points: Vec<Point>,
    pub reference_a: Point,
    pub reference_b: Point,
    pub reference_length_m: f64,
    pub slope_deg: f64,
}

impl MeasureRequest {
    /// Check point count, reference presence and reference length, in that order.
    pub fn validate(self) -> Result<ValidRequest, RequestError> {
        if self.roof_points.len() < 3 {
            return Err(RequestError::TooFewPoints {
                got: self.roof_points.len(),
            });
        }
        let (Some(a), Some(b)) = (self.reference_a, self.reference_b) else {
            return Err(RequestError::MissingReference);
        };
        let length = match self.reference_length_m {
            Some(l) if l > 0.0 => l,
            _ => return Err(RequestError::NonPositiveLength),
        };
        Ok(ValidRequest {
            roof_points: self
                .roof_points
                .into_iter()
                .map(|[x, y]| Point::new(x, y))
                .collect(),
            reference_a: Point::new(a[0], a[1]),
            reference_b: Point::new(b[0], b[1]),
            reference_length_m: length,
            slope_deg: self.slope_deg,
        })
    }
}

impl ValidRequest {
    /// Meters per pixel, rejecting a sub-pixel reference segment.
    pub fn scale(&self) -> Result<f64, RequestError> {
        let s = derive_scale(self.reference_a, self.reference_b, self.reference_length_m);
        if s <= 0.0 {
            return Err(RequestError::DegenerateReference);
        }
        Ok(s)
    }

    pub fn analyzer(&self) -> Result<RoofAnalyzer, RequestError> {
        let scale = self.scale()?;
        Ok(RoofAnalyzer::new(
            self.roof_points.clone(),
            scale,
            self.slope_deg,
        ))
    }

    pub fn analyze(&self) -> Result<Report, RequestError> {
        Ok(self.analyzer()?.full_analysis())
    }
}

/// Response envelope: `{success, wyniki}` on success, `{success, error}` otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(rename = "wyniki", skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(report: Report) -> Self {
        Self {
            success: true,
            report: Some(report),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            report: None,
            error: Some(message.into()),
        }
    }
}

impl From<Result<Report, RequestError>> for Response {
    fn from(res: Result<Report, RequestError>) -> Self {
        match res {
            Ok(report) => Response::ok(report),
            Err(e) => Response::err(e.to_string()),
        }
    }
}
