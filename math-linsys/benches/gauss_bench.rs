use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_linsys::{determinant, solve};
use ndarray::{Array1, Array2};

fn dominant_system(n: usize) -> (Array2<f64>, Array1<f64>) {
    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            2.0 * n as f64
        } else {
            ((i * 7 + j * 3) % 11) as f64 / 11.0
        }
    });
    let b = Array1::from_shape_fn(n, |i| (i + 1) as f64);
    (a, b)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_solve");
    for n in [4, 16, 64] {
        let (a, b) = dominant_system(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| solve(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for n in [4, 16, 64] {
        let (a, _) = dominant_system(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| determinant(black_box(&a)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_determinant);
criterion_main!(benches);
