use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use roofgeom::api::{derive_scale, simplify_collinear, MeasureRequest, Point, RequestError, Response};
use roofgeom::DEFAULT_COLLINEAR_TOL;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::parse_point;
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "roof")]
#[command(about = "Roof measurements from orthophoto outlines")]
struct Cmd {
    /// Log analysis details (debug level) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Measure a traced outline and emit the JSON response envelope
    Analyze(AnalyzeArgs),
    /// Print the meters-per-pixel scale of a reference segment
    Scale {
        #[arg(long, value_parser = parse_point)]
        ref_a: Point,
        #[arg(long, value_parser = parse_point)]
        ref_b: Point,
        /// Real-world length of A–B in meters
        #[arg(long)]
        length: f64,
    },
    /// Print a small status/provenance JSON block
    Report,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    /// JSON request (punkty_dachu, punkt_a, punkt_b, rzeczywista_dlugosc, kat_nachylenia)
    #[arg(long, conflicts_with_all = ["points", "ref_a", "ref_b", "length", "slope"])]
    request: Option<PathBuf>,
    /// CSV with `x`,`y` columns holding the outline vertices in pixels
    #[arg(long, required_unless_present = "request")]
    points: Option<PathBuf>,
    /// Reference point A as `x,y`
    #[arg(long, value_parser = parse_point)]
    ref_a: Option<Point>,
    /// Reference point B as `x,y`
    #[arg(long, value_parser = parse_point)]
    ref_b: Option<Point>,
    /// Real-world length of A–B in meters
    #[arg(long)]
    length: Option<f64>,
    /// Roof pitch in degrees
    #[arg(long)]
    slope: Option<f64>,
    /// Drop vertices within this many pixels of the line through their neighbours
    /// (default 1.0 when given without a value)
    #[arg(long)]
    drop_collinear: Option<Option<f64>>,
    /// Write the response here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Analyze(args) => analyze(args),
        Action::Scale {
            ref_a,
            ref_b,
            length,
        } => scale(ref_a, ref_b, length),
        Action::Report => report(),
    }
}

fn load_request(args: &AnalyzeArgs) -> Result<MeasureRequest> {
    if let Some(path) = &args.request {
        return input::read_request(path);
    }
    let Some(points) = &args.points else {
        bail!("either --request or --points is required");
    };
    Ok(MeasureRequest {
        roof_points: input::read_points_csv(points)?,
        reference_a: args.ref_a.map(|p| [p.x, p.y]),
        reference_b: args.ref_b.map(|p| [p.x, p.y]),
        reference_length_m: args.length,
        slope_deg: args.slope.unwrap_or(0.0),
    })
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let request = load_request(&args)?;
    tracing::info!(
        points = request.roof_points.len(),
        slope_deg = request.slope_deg,
        source = ?args.request.as_ref().or(args.points.as_ref()),
        "analyze"
    );
    let tolerance = args
        .drop_collinear
        .map(|tol| tol.unwrap_or(DEFAULT_COLLINEAR_TOL));
    let outcome = request.validate().and_then(|mut valid| {
        if let Some(tol) = tolerance {
            let before = valid.roof_points.len();
            valid.roof_points = simplify_collinear(&valid.roof_points, tol);
            tracing::info!(before, after = valid.roof_points.len(), tol, "drop_collinear");
        }
        valid.analyze()
    });
    let failure: Option<RequestError> = outcome.as_ref().err().cloned();
    let response = Response::from(outcome);
    let body = serde_json::to_vec_pretty(&response)?;

    match &args.out {
        Some(out) => {
            write_output(out, &body)?;
            let sidecar = Provenance::for_response(&response)
                .source(args.request.as_ref().or(args.points.as_ref()))
                .drop_collinear(tolerance);
            let prov = provenance::write_sidecar(out, &sidecar)?;
            tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }

    if let Some(err) = failure {
        tracing::warn!(%err, "request rejected");
        return Err(err.into());
    }
    Ok(())
}

fn write_output(out: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, body).with_context(|| format!("writing {}", out.display()))
}

fn scale(ref_a: Point, ref_b: Point, length: f64) -> Result<()> {
    if length <= 0.0 {
        return Err(RequestError::NonPositiveLength.into());
    }
    let s = derive_scale(ref_a, ref_b, length);
    if s <= 0.0 {
        return Err(RequestError::DegenerateReference.into());
    }
    tracing::info!(scale = s, "scale");
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "skala": s }))?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "status": "ok",
        "version": roofgeom::VERSION,
        "code_rev": provenance::code_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
