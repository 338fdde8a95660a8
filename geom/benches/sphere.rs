//! Sphere subdivision benchmarks.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polychrome_geom::solids::{Icosphere, dodecahedron_dual};

fn bench_icosphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("icosphere");
    for depth in [1, 3, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| Icosphere { depth: black_box(depth) }.build())
        });
    }
    group.finish();
}

fn bench_dual(c: &mut Criterion) {
    c.bench_function("dodecahedron_dual", |b| b.iter(dodecahedron_dual));
}

criterion_group!(benches, bench_icosphere, bench_dual);
criterion_main!(benches);
