use approx::assert_abs_diff_eq;
use bandsolve::linalg::{
    gaussian_elimination, gaussian_elimination_pivots, housetriang_solve, solve_lower_banded,
    solve_upper_banded, BandedLu, PivotedLu,
};
use bandsolve::{DynMatrix, DynVector, LinalgError};

const TOL: f64 = 1e-10;

fn sample() -> (DynMatrix<f64>, DynVector<f64>) {
    let a = DynMatrix::from_nested(&[[1.0, 1.0, 2.0], [2.0, 2.0, 1.0], [1.0, 2.0, 3.0]]);
    let b = DynVector::from_slice(&[9.0, 9.0, 14.0]);
    (a, b)
}

fn assert_solution(x: &DynVector<f64>, expected: &[f64]) {
    assert_eq!(x.len(), expected.len());
    for (xi, ei) in x.iter().zip(expected) {
        assert_abs_diff_eq!(xi, ei, epsilon = TOL);
    }
}

/// Symmetric diagonally dominant matrix with bandwidth `d`.
fn banded(n: usize, d: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, n, |i, j| {
        let k = i.abs_diff(j);
        if k == 0 {
            2.0 * d as f64 + 2.0
        } else if k <= d {
            -1.0 / k as f64
        } else {
            0.0
        }
    })
}

// ── The 3x3 sample system ────────────────────────────────────────────

#[test]
fn sample_every_dense_path() {
    let (a, b) = sample();
    assert_solution(&gaussian_elimination(&a, &b).unwrap(), &[1.0, 2.0, 3.0]);
    assert_solution(&gaussian_elimination_pivots(&a, &b).unwrap(), &[1.0, 2.0, 3.0]);
    assert_solution(&housetriang_solve(&a, &b).unwrap(), &[1.0, 2.0, 3.0]);
    assert_solution(&a.solve(&b).unwrap(), &[1.0, 2.0, 3.0]);
}

#[test]
fn sample_needs_pivoting_for_lu() {
    let (a, _) = sample();
    assert_eq!(
        BandedLu::new(&a, 2).unwrap_err(),
        LinalgError::SingularLeadingMinor { order: 2 }
    );
    assert!(PivotedLu::new(&a).is_ok());
}

#[test]
fn sample_plu_factors() {
    let (a, _) = sample();
    let lu = a.plu().unwrap();
    let (p, l, u) = lu.clone().into_parts();

    // P is a permutation matrix.
    for i in 0..3 {
        let row: f64 = p.row_slice(i).iter().sum();
        let col: f64 = p.col(i).iter().sum();
        assert_eq!((row, col), (1.0, 1.0));
    }
    for i in 0..3 {
        assert_eq!(l[(i, i)], 1.0);
        for j in (i + 1)..3 {
            assert_eq!(l[(i, j)], 0.0);
            assert_eq!(u[(j, i)], 0.0);
        }
    }
    let plu = &p * &(&l * &u);
    for (x, y) in plu.as_slice().iter().zip(a.as_slice()) {
        assert_abs_diff_eq!(x, y, epsilon = TOL);
    }
    assert_abs_diff_eq!(lu.det(), 3.0, epsilon = TOL);
}

// ── Triangular fixtures ──────────────────────────────────────────────

#[test]
fn lower_fixture() {
    let a = DynMatrix::from_nested(&[[2.0, 0.0, 0.0], [1.0, 5.0, 0.0], [0.0, 2.0, 1.0]]);
    let b = DynVector::from_slice(&[2.0, 6.0, 5.0]);
    assert_solution(&solve_lower_banded(&a, &b, 1).unwrap(), &[1.0, 1.0, 3.0]);
}

#[test]
fn upper_fixture() {
    let a = DynMatrix::from_nested(&[[1.0, 3.0], [0.0, 2.0]]);
    let b = DynVector::from_slice(&[3.0, 4.0]);
    assert_solution(&solve_upper_banded(&a, &b, 1).unwrap(), &[-3.0, 2.0]);
}

#[test]
fn banded_and_dense_triangular_agree() {
    let n = 12;
    let d = 3;
    let lower = DynMatrix::from_fn(n, n, |i, j| {
        if j <= i && i - j <= d {
            1.0 + (i + 2 * j) as f64 / 10.0
        } else {
            0.0
        }
    });
    let b = DynVector::from_vec((0..n).map(|i| (i as f64).sin()).collect());
    let banded = solve_lower_banded(&lower, &b, d).unwrap();
    let dense = solve_lower_banded(&lower, &b, n - 1).unwrap();
    for i in 0..n {
        assert_abs_diff_eq!(banded[i], dense[i], epsilon = TOL);
    }

    let upper = lower.transpose();
    let banded = solve_upper_banded(&upper, &b, d).unwrap();
    let dense = solve_upper_banded(&upper, &b, n - 1).unwrap();
    for i in 0..n {
        assert_abs_diff_eq!(banded[i], dense[i], epsilon = TOL);
    }
}

// ── Banded LU ────────────────────────────────────────────────────────

#[test]
fn banded_lu_matches_dense_solvers() {
    for d in [0, 1, 2, 4] {
        let a = banded(10, d);
        let b = DynVector::from_vec((0..10).map(|i| 1.0 + i as f64).collect());
        let lu = BandedLu::new(&a, d).unwrap();
        assert!(lu.l().lower_bandwidth() <= d);
        assert!(lu.u().upper_bandwidth() <= d);

        let x = lu.solve(&b).unwrap();
        let reference = gaussian_elimination(&a, &b).unwrap();
        for i in 0..10 {
            assert_abs_diff_eq!(x[i], reference[i], epsilon = TOL);
        }
    }
}

#[test]
fn banded_lu_derived_bandwidth() {
    let a = banded(8, 2);
    let d = a.lower_bandwidth().max(a.upper_bandwidth());
    assert_eq!(d, 2);
    let lu = a.banded_lu(d).unwrap();
    let prod = lu.l() * lu.u();
    for (x, y) in prod.as_slice().iter().zip(a.as_slice()) {
        assert_abs_diff_eq!(x, y, epsilon = TOL);
    }
}

// ── Failure modes ────────────────────────────────────────────────────

#[test]
fn singular_everywhere() {
    let a = DynMatrix::from_nested(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]]);
    let b = DynVector::from_slice(&[1.0, 2.0, 3.0]);
    assert!(matches!(
        gaussian_elimination(&a, &b),
        Err(LinalgError::Singular { .. })
    ));
    assert!(matches!(
        gaussian_elimination_pivots(&a, &b),
        Err(LinalgError::Singular { .. })
    ));
    assert_eq!(
        PivotedLu::new(&a).unwrap_err(),
        LinalgError::Singular { index: 2 }
    );
    assert_eq!(
        housetriang_solve(&a, &b).unwrap_err(),
        LinalgError::Singular { index: 2 }
    );
}

#[test]
fn exactly_singular_index() {
    let a = DynMatrix::from_nested(&[[2.0, 4.0], [1.0, 2.0]]);
    let b = DynVector::from_slice(&[1.0, 1.0]);
    let err = LinalgError::Singular { index: 1 };
    assert_eq!(gaussian_elimination(&a, &b).unwrap_err(), err);
    assert_eq!(gaussian_elimination_pivots(&a, &b).unwrap_err(), err);
    assert_eq!(housetriang_solve(&a, &b).unwrap_err(), err);
}

#[test]
fn zero_diagonal_in_triangular() {
    let a = DynMatrix::from_nested(&[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
    let b = DynVector::from_slice(&[1.0, 1.0, 1.0]);
    assert_eq!(
        solve_lower_banded(&a, &b, 2).unwrap_err(),
        LinalgError::Singular { index: 1 }
    );
}

#[test]
fn shape_mismatches() {
    let (a, _) = sample();
    let short = DynVector::from_slice(&[1.0, 2.0]);
    let rect = DynMatrix::zeros(3, 2, 0.0_f64);
    let b3 = DynVector::from_slice(&[1.0, 2.0, 3.0]);

    assert!(matches!(
        gaussian_elimination(&a, &short),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        gaussian_elimination(&rect, &b3),
        Err(LinalgError::NotSquare { .. })
    ));
    assert!(matches!(
        BandedLu::new(&banded(3, 1), 1).unwrap().solve(&short),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn inputs_survive_every_routine() {
    let (a, b) = sample();
    let (a0, b0) = (a.clone(), b.clone());
    let _ = gaussian_elimination(&a, &b);
    let _ = gaussian_elimination_pivots(&a, &b);
    let _ = housetriang_solve(&a, &b);
    let _ = BandedLu::new(&a, 2);
    let _ = PivotedLu::new(&a);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn householder_least_squares_residual_is_orthogonal() {
    let a = DynMatrix::from_fn(6, 3, |i, j| ((i + 1) as f64).powi(j as i32));
    let b = DynVector::from_slice(&[1.0, 0.5, 2.0, 1.5, 3.0, 2.5]);
    let x = housetriang_solve(&a, &b).unwrap();
    let ax = &a * &x;
    let resid: Vec<f64> = (0..6).map(|i| b[i] - ax[i]).collect();
    // Aᵀ r = 0 at the least-squares minimum.
    for j in 0..3 {
        let s: f64 = (0..6).map(|i| a[(i, j)] * resid[i]).sum();
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-9);
    }
}
