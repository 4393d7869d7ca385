//! Criterion benchmarks for the roof analyzer.
//! Focus sizes: outline vertex counts n in {4, 16, 64, 256}.
//! Results: under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use roofgeom::api::{draw_outline, OutlineCfg, ReplayToken, RoofAnalyzer, VertexCount};
use roofgeom::geom2::{polygon_area, simplify_collinear};

fn outline(n: usize, index: u64) -> Vec<roofgeom::api::Point> {
    let cfg = OutlineCfg {
        vertex_count: VertexCount::Fixed(n),
        ..OutlineCfg::default()
    };
    draw_outline(cfg, ReplayToken { seed: 43, index })
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("roof");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("full_analysis", n), &n, |b, &n| {
            b.iter_batched(
                || RoofAnalyzer::new(outline(n, 1), 0.05, 35.0),
                |an| {
                    let _report = an.full_analysis();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("classify_edges", n), &n, |b, &n| {
            let an = RoofAnalyzer::new(outline(n, 2), 0.05, 35.0);
            b.iter(|| an.classify_edges())
        });

        group.bench_with_input(BenchmarkId::new("polygon_area", n), &n, |b, &n| {
            let pts = outline(n, 3);
            b.iter(|| polygon_area(&pts))
        });

        group.bench_with_input(BenchmarkId::new("simplify_collinear", n), &n, |b, &n| {
            let pts = outline(n, 4);
            b.iter(|| simplify_collinear(&pts, 1.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
