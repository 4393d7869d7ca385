use anyhow::{bail, Context, Result};
use polars::prelude::*;
use roofgeom::api::{MeasureRequest, Point};
use std::fs;
use std::path::Path;

/// Read a JSON measurement request (same shape the web client posts).
pub fn read_request(path: &Path) -> Result<MeasureRequest> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing request {}", path.display()))
}

/// Read outline vertices from a CSV with `x` and `y` columns, in row order.
pub fn read_points_csv(path: &Path) -> Result<Vec<[f64; 2]>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "points_csv");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push([x, y]),
            _ => bail!("{}: row {} is missing x or y", path.display(), row + 1),
        }
    }
    Ok(out)
}

/// Parse `x,y` (pixels) from a command-line argument.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(format!("coordinates must be finite, got `{s}`"));
    }
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_point_accepts_spaces_and_rejects_garbage() {
        assert_eq!(parse_point("10, 2.5").unwrap(), Point::new(10.0, 2.5));
        assert_eq!(parse_point("-1,0").unwrap(), Point::new(-1.0, 0.0));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("inf,0").is_err());
    }

    #[test]
    fn csv_points_in_row_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("outline.csv");
        fs::write(&path, "x,y\n0,0\n0,10\n10.5,10\n10,0\n").unwrap();
        let pts = read_points_csv(&path).unwrap();
        assert_eq!(
            pts,
            vec![[0.0, 0.0], [0.0, 10.0], [10.5, 10.0], [10.0, 0.0]]
        );
    }

    #[test]
    fn csv_missing_value_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,y\n0,0\n5,\n").unwrap();
        let err = read_points_csv(&path).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn request_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("req.json");
        fs::write(
            &path,
            r#"{"punkty_dachu": [[0,0],[0,10],[10,10]], "punkt_a": [0,0], "punkt_b": [0,10],
                "rzeczywista_dlugosc": 5, "kat_nachylenia": 30}"#,
        )
        .unwrap();
        let req = read_request(&path).unwrap();
        assert_eq!(req.roof_points.len(), 3);
        assert_eq!(req.slope_deg, 30.0);
        assert!(read_request(&dir.path().join("missing.json")).is_err());
    }
}
