//! `<stem>.provenance.json` sidecars next to written measurement responses.
//!
//! The sidecar records where the outline came from, how it was cleaned up
//! and the parameters the analysis actually ran with (taken from the
//! report, so they reflect the validated scale and the post-clean-up
//! vertex count rather than the raw request).

use anyhow::{Context, Result};
use roofgeom::api::{Parameters, Response};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What one `analyze` run measured and from which input.
#[derive(Debug, Default)]
pub struct Provenance {
    pub source: Option<PathBuf>,
    pub drop_collinear: Option<f64>,
    pub parameters: Option<Parameters>,
    pub error: Option<String>,
}

impl Provenance {
    pub fn for_response(response: &Response) -> Self {
        Self {
            parameters: response.report.as_ref().map(|r| r.parameters),
            error: response.error.clone(),
            ..Self::default()
        }
    }

    pub fn source(mut self, path: Option<&PathBuf>) -> Self {
        self.source = path.cloned();
        self
    }

    pub fn drop_collinear(mut self, tol: Option<f64>) -> Self {
        self.drop_collinear = tol;
        self
    }

    #[track_caller]
    fn to_json(&self, response_path: &Path) -> Result<Value> {
        let callsite = Location::caller();
        Ok(json!({
            "code_rev": code_rev(),
            "roofgeom_version": roofgeom::VERSION,
            "callsite": format!("{}:{}", callsite.file(), callsite.line()),
            "source": self.source.as_ref().map(|p| p.display().to_string()),
            "response": response_path.display().to_string(),
            "drop_collinear": self.drop_collinear,
            "parametry": serde_json::to_value(&self.parameters)?,
            "error": self.error,
        }))
    }
}

/// Write the sidecar beside `response_path`, whose directory must exist.
#[track_caller]
pub fn write_sidecar(response_path: &Path, prov: &Provenance) -> Result<PathBuf> {
    let path = sidecar_path(response_path);
    let doc = prov.to_json(response_path)?;
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(response_path: &Path) -> PathBuf {
    let stem = response_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "roof".to_string());
    response_path.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roofgeom::api::{Point, RequestError, RoofAnalyzer};
    use tempfile::tempdir;

    fn read(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn sidecar_sits_next_to_the_response() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/roof.json")),
            Path::new("/tmp/output/roof.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("measure")),
            Path::new("measure.provenance.json")
        );
    }

    #[test]
    fn records_report_parameters() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("roof.json");
        let square = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]
            .map(|(x, y)| Point::new(x, y));
        let report = RoofAnalyzer::new(square, 0.5, 30.0).full_analysis();
        let prov = Provenance::for_response(&Response::ok(report))
            .source(Some(&PathBuf::from("outline.csv")))
            .drop_collinear(Some(1.0));
        let path = write_sidecar(&out, &prov).unwrap();
        let v = read(&path);
        assert_eq!(v["parametry"]["skala"], 0.5);
        assert_eq!(v["parametry"]["kat_nachylenia"], 30.0);
        assert_eq!(v["parametry"]["liczba_punktow"], 4);
        assert_eq!(v["source"], "outline.csv");
        assert_eq!(v["drop_collinear"], 1.0);
        assert_eq!(v["roofgeom_version"], roofgeom::VERSION);
        assert!(v["error"].is_null());
    }

    #[test]
    fn rejected_request_records_error_without_parameters() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("roof.json");
        let response = Response::err(RequestError::MissingReference.to_string());
        let path = write_sidecar(&out, &Provenance::for_response(&response)).unwrap();
        let v = read(&path);
        assert!(v["parametry"].is_null());
        assert_eq!(v["error"], RequestError::MissingReference.to_string());
    }
}
