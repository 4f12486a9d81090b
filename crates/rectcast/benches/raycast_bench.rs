//! Criterion benchmarks: sector lookup vs. four-edge brute force.
//! Workloads: uniform random queries, all-inside, and all-outside-same-side.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rectcast::api::{
    draw_queries, raycast_brute_force, raycast_line_rect, Query, Rect2, SampleCfg, Seg2,
};
use std::hint::black_box;

fn uniform(n: usize) -> Vec<Query> {
    draw_queries(SampleCfg::default(), 43, n).unwrap()
}

fn shifted(queries: &[Query], f: impl Fn(&Rect2, Vector2<f64>) -> Vector2<f64>) -> Vec<Query> {
    queries
        .iter()
        .map(|q| {
            let mut q = *q;
            q.seg = Seg2::new(f(&q.rect, q.seg.begin), f(&q.rect, q.seg.end));
            q
        })
        .collect()
}

fn bench_raycast(c: &mut Criterion) {
    let base = uniform(4096);
    let inside = shifted(&base, |r, p| {
        // fold into the rectangle
        let u = (p.x.abs() / 10.0).fract();
        let v = (p.y.abs() / 10.0).fract();
        Vector2::new(r.x_min + u * r.width, r.y_min + v * r.height)
    });
    let above = shifted(&base, |r, p| Vector2::new(p.x, r.y_max() + 1.0 + p.y.abs()));
    let workloads = [("uniform", base), ("inside", inside), ("above", above)];

    let mut group = c.benchmark_group("raycast");
    for (name, queries) in &workloads {
        group.bench_with_input(BenchmarkId::new("lookup", name), queries, |b, qs| {
            b.iter(|| {
                for q in qs {
                    black_box(raycast_line_rect(q.seg.begin, q.seg.end, &q.rect));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("brute_force", name), queries, |b, qs| {
            b.iter(|| {
                for q in qs {
                    black_box(raycast_brute_force(q.seg.begin, q.seg.end, &q.rect));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raycast);
criterion_main!(benches);
