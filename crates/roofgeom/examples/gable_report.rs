//! Print the report for a small hand-traced outline.
//!
//! Usage:
//!   cargo run -p roofgeom --example gable_report -- [slope_deg]
//!
//! The outline is an L-shaped roof traced at 0.05 m/px (reference: 200 px = 10 m).

use roofgeom::api::{derive_scale, Point, RoofAnalyzer};
use roofgeom::roof::EdgeClass;

fn main() {
    let slope: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(35.0);
    let outline = vec![
        Point::new(100.0, 100.0),
        Point::new(100.0, 400.0),
        Point::new(300.0, 400.0),
        Point::new(300.0, 250.0),
        Point::new(500.0, 250.0),
        Point::new(500.0, 100.0),
    ];
    let scale = derive_scale(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 10.0);
    let report = RoofAnalyzer::new(outline, scale, slope).full_analysis();
    for class in EdgeClass::ALL {
        let bucket = report.dimensions.bucket(class);
        println!(
            "{:<9} n={} total={:.2} m",
            class.wire_key(),
            bucket.len(),
            report.dimensions.total_length(class)
        );
    }
    println!(
        "area: projected={:.2} m², true={:.2} m² (slope {slope}°, scale {scale} m/px)",
        report.areas.projected_m2, report.areas.true_m2
    );
}
