use std::hint::black_box;

use bandsolve::linalg::{
    gaussian_elimination, gaussian_elimination_pivots, housetriang_solve, solve_lower_banded,
    BandedLu,
};
use bandsolve::{DynMatrix, DynVector};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant test systems
// ---------------------------------------------------------------------------

fn banded_matrix(n: usize, d: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, n, |i, j| {
        let k = i.abs_diff(j);
        if k == 0 {
            2.0 * d as f64 + 4.0
        } else if k <= d {
            1.0 / (k + 1) as f64
        } else {
            0.0
        }
    })
}

fn lower_banded(n: usize, d: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, n, |i, j| {
        if j <= i && i - j <= d {
            if i == j {
                4.0
            } else {
                -0.5
            }
        } else {
            0.0
        }
    })
}

fn dense_matrix(n: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, n, |i, j| {
        if i == j {
            n as f64 + 1.0
        } else {
            ((i * 7 + j * 3) % 11) as f64 / 11.0
        }
    })
}

fn rhs(n: usize) -> DynVector<f64> {
    DynVector::from_vec((0..n).map(|i| (i % 5) as f64 + 1.0).collect())
}

// ---------------------------------------------------------------------------
// Banded vs dense triangular substitution
// ---------------------------------------------------------------------------

fn substitution(c: &mut Criterion) {
    let mut g = c.benchmark_group("lower_substitution_400");
    let n = 400;
    let b = rhs(n);

    for d in [1, 4, 16] {
        let a = lower_banded(n, d);
        g.bench_with_input(BenchmarkId::new("banded", d), &d, |bench, &d| {
            bench.iter(|| solve_lower_banded(black_box(&a), black_box(&b), d))
        });
        g.bench_with_input(BenchmarkId::new("dense", d), &d, |bench, _| {
            bench.iter(|| solve_lower_banded(black_box(&a), black_box(&b), n - 1))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Banded LU vs pivoted elimination on banded systems
// ---------------------------------------------------------------------------

fn banded_factor(c: &mut Criterion) {
    let mut g = c.benchmark_group("banded_system_200");
    let n = 200;
    let b = rhs(n);

    for d in [1, 3, 8] {
        let a = banded_matrix(n, d);
        g.bench_with_input(BenchmarkId::new("banded_lu", d), &d, |bench, &d| {
            bench.iter(|| BandedLu::new(black_box(&a), d).and_then(|lu| lu.solve(&b)))
        });
        g.bench_with_input(BenchmarkId::new("gaussian_elimination", d), &d, |bench, _| {
            bench.iter(|| gaussian_elimination(black_box(&a), black_box(&b)))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Dense solve paths
// ---------------------------------------------------------------------------

fn dense_solve(c: &mut Criterion) {
    for n in [10, 50, 150] {
        let mut g = c.benchmark_group(format!("dense_solve_{n}x{n}"));
        let a = dense_matrix(n);
        let b = rhs(n);

        g.bench_function("gaussian_elimination", |bench| {
            bench.iter(|| gaussian_elimination(black_box(&a), black_box(&b)))
        });
        g.bench_function("gaussian_elimination_pivots", |bench| {
            bench.iter(|| gaussian_elimination_pivots(black_box(&a), black_box(&b)))
        });
        g.bench_function("housetriang_solve", |bench| {
            bench.iter(|| housetriang_solve(black_box(&a), black_box(&b)))
        });

        g.finish();
    }
}

criterion_group!(benches, substitution, banded_factor, dense_solve);
criterion_main!(benches);
