//! Data types for edge classification and the measurement report.
//!
//! Report field names serialize with the wire keys consumers already read
//! (`wymiary`, `kalenice`, `dlugosc`, ...); Rust-side names are English.

use serde::Serialize;

use crate::geom2::{Edge, Point};

/// Roof element an outline edge is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    Ridge,
    Eave,
    /// Sloped gable edge.
    Rake,
    Valley,
}

impl EdgeClass {
    /// Report order.
    pub const ALL: [EdgeClass; 4] = [
        EdgeClass::Ridge,
        EdgeClass::Eave,
        EdgeClass::Rake,
        EdgeClass::Valley,
    ];

    /// Ridges and eaves lie in a horizontal plane; rakes and valleys run down the pitch.
    #[inline]
    pub fn is_slope_corrected(self) -> bool {
        matches!(self, EdgeClass::Rake | EdgeClass::Valley)
    }

    /// Key of this bucket in the serialized report.
    pub fn wire_key(self) -> &'static str {
        match self {
            EdgeClass::Ridge => "kalenice",
            EdgeClass::Eave => "okapy",
            EdgeClass::Rake => "skosy",
            EdgeClass::Valley => "kosze",
        }
    }
}

/// Partition of the outline's edges into the four classes, each in edge order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedEdges {
    pub ridges: Vec<Edge>,
    pub eaves: Vec<Edge>,
    pub rakes: Vec<Edge>,
    pub valleys: Vec<Edge>,
}

impl ClassifiedEdges {
    pub fn bucket(&self, class: EdgeClass) -> &[Edge] {
        match class {
            EdgeClass::Ridge => &self.ridges,
            EdgeClass::Eave => &self.eaves,
            EdgeClass::Rake => &self.rakes,
            EdgeClass::Valley => &self.valleys,
        }
    }

    pub(crate) fn push(&mut self, class: EdgeClass, edge: Edge) {
        match class {
            EdgeClass::Ridge => self.ridges.push(edge),
            EdgeClass::Eave => self.eaves.push(edge),
            EdgeClass::Rake => self.rakes.push(edge),
            EdgeClass::Valley => self.valleys.push(edge),
        }
    }

    /// Total number of classified edges (equals the vertex count).
    pub fn len(&self) -> usize {
        EdgeClass::ALL.iter().map(|&c| self.bucket(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(class, edge)` pairs bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeClass, &Edge)> + '_ {
        EdgeClass::ALL
            .into_iter()
            .flat_map(move |c| self.bucket(c).iter().map(move |e| (c, e)))
    }
}

/// One measured edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeMeasure {
    /// 1-based position within its bucket.
    pub id: usize,
    /// Meters, rounded to 2 decimals.
    #[serde(rename = "dlugosc")]
    pub length_m: f64,
    /// Pixel endpoints in edge order.
    #[serde(rename = "punkty")]
    pub endpoints: [Point; 2],
    #[serde(rename = "srodek")]
    pub midpoint: Point,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dimensions {
    #[serde(rename = "kalenice")]
    pub ridges: Vec<EdgeMeasure>,
    #[serde(rename = "okapy")]
    pub eaves: Vec<EdgeMeasure>,
    #[serde(rename = "skosy")]
    pub rakes: Vec<EdgeMeasure>,
    #[serde(rename = "kosze")]
    pub valleys: Vec<EdgeMeasure>,
}

impl Dimensions {
    pub fn bucket(&self, class: EdgeClass) -> &[EdgeMeasure] {
        match class {
            EdgeClass::Ridge => &self.ridges,
            EdgeClass::Eave => &self.eaves,
            EdgeClass::Rake => &self.rakes,
            EdgeClass::Valley => &self.valleys,
        }
    }

    pub(crate) fn bucket_mut(&mut self, class: EdgeClass) -> &mut Vec<EdgeMeasure> {
        match class {
            EdgeClass::Ridge => &mut self.ridges,
            EdgeClass::Eave => &mut self.eaves,
            EdgeClass::Rake => &mut self.rakes,
            EdgeClass::Valley => &mut self.valleys,
        }
    }

    /// Sum of the (rounded) lengths in one bucket.
    pub fn total_length(&self, class: EdgeClass) -> f64 {
        self.bucket(class).iter().map(|m| m.length_m).sum()
    }
}

/// Roof areas in m², rounded to 2 decimals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Areas {
    /// Horizontal projection.
    #[serde(rename = "pole_rzutu")]
    pub projected_m2: f64,
    /// On the pitched surface.
    #[serde(rename = "pole_rzeczywiste")]
    pub true_m2: f64,
}

/// Echo of the analysis inputs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Parameters {
    #[serde(rename = "kat_nachylenia")]
    pub slope_deg: f64,
    /// Meters per pixel.
    #[serde(rename = "skala")]
    pub scale: f64,
    #[serde(rename = "liczba_punktow")]
    pub vertex_count: usize,
}

/// Complete measurement report for one outline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    #[serde(rename = "wymiary")]
    pub dimensions: Dimensions,
    #[serde(rename = "powierzchnie")]
    pub areas: Areas,
    #[serde(rename = "parametry")]
    pub parameters: Parameters,
}
