use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::lu::PivotedLu;
use crate::linalg::triangular::back_substitute_banded;
use crate::linalg::{ensure_rhs_len, ensure_square, LinalgError};
use crate::traits::LinalgScalar;

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// Row operations are applied to working copies of `A` and `b` in lockstep,
/// reducing `A` to upper-triangular form, then the result is back-substituted.
/// No factors are kept. A column whose largest remaining entry is zero
/// returns `LinalgError::Singular` with that column's index.
///
/// ```
/// use bandsolve::{DynMatrix, DynVector};
/// use bandsolve::linalg::gaussian_elimination;
///
/// let a = DynMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 2.0, 0.0]);
/// let b = DynVector::from_slice(&[3.0, 4.0]);
/// let x = gaussian_elimination(&a, &b).unwrap();
/// assert_eq!(x.as_slice(), &[2.0, 3.0]);
/// ```
pub fn gaussian_elimination<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynVector<T>,
) -> Result<DynVector<T>, LinalgError> {
    let n = ensure_square(a)?;
    ensure_rhs_len(n, b.len())?;
    log::debug!("gaussian elimination on {n}x{n} system");

    let mut u = a.clone();
    let mut rhs = b.clone();

    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_mod = u[(k, k)].modulus();
        for i in (k + 1)..n {
            let m = u[(i, k)].modulus();
            if m > pivot_mod {
                pivot_mod = m;
                pivot_row = i;
            }
        }
        if pivot_mod == <T::Real as num_traits::Zero>::zero() {
            log::debug!("zero pivot in column {k}");
            return Err(LinalgError::Singular { index: k });
        }
        if pivot_row != k {
            log::trace!("swap rows {k} <-> {pivot_row}");
            u.swap_row_range(k, pivot_row, k..n);
            rhs.swap(k, pivot_row);
        }

        let pivot = u[(k, k)];
        for j in (k + 1)..n {
            let factor = u[(j, k)] / pivot;
            if factor == T::zero() {
                continue;
            }
            u[(j, k)] = T::zero();
            for c in (k + 1)..n {
                u[(j, c)] = u[(j, c)] - factor * u[(k, c)];
            }
            rhs[j] = rhs[j] - factor * rhs[k];
        }
    }

    let mut x = vec![T::zero(); n];
    back_substitute_banded(&u, rhs.as_slice(), n.saturating_sub(1), &mut x)?;
    Ok(DynVector::from_vec(x))
}

/// Solve `A x = b` through an explicit pivoted factorization `A = P·L·U`.
///
/// Equivalent to `PivotedLu::new(a)?.solve(b)`; use [`PivotedLu`] directly
/// to reuse the factors for several right-hand sides.
pub fn gaussian_elimination_pivots<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynVector<T>,
) -> Result<DynVector<T>, LinalgError> {
    let n = ensure_square(a)?;
    ensure_rhs_len(n, b.len())?;
    PivotedLu::new(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> (DynMatrix<f64>, DynVector<f64>) {
        (
            DynMatrix::from_rows(3, 3, &[1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 2.0, 3.0]),
            DynVector::from_slice(&[9.0, 9.0, 14.0]),
        )
    }

    #[test]
    fn sample_both_paths() {
        let (a, b) = sample();
        for x in [
            gaussian_elimination(&a, &b).unwrap(),
            gaussian_elimination_pivots(&a, &b).unwrap(),
        ] {
            for (xi, ei) in x.iter().zip([1.0, 2.0, 3.0]) {
                assert_abs_diff_eq!(*xi, ei, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn needs_pivoting() {
        // Zero in the (0,0) slot; plain elimination would divide by it.
        let a = DynMatrix::from_rows(3, 3, &[0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0]);
        let b = DynVector::from_slice(&[5.0, 6.0, 4.0]);
        let x = gaussian_elimination(&a, &b).unwrap();
        let y = gaussian_elimination_pivots(&a, &b).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(x[i], y[i], epsilon = 1e-12);
        }
        let ax = &a * &x;
        for i in 0..3 {
            assert_abs_diff_eq!(ax[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn singular() {
        let a = DynMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
        let b = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            gaussian_elimination(&a, &b),
            Err(LinalgError::Singular { .. })
        ));
        assert!(matches!(
            gaussian_elimination_pivots(&a, &b),
            Err(LinalgError::Singular { .. })
        ));
    }

    #[test]
    fn rhs_length_checked() {
        let (a, _) = sample();
        let b = DynVector::from_slice(&[1.0, 2.0]);
        let err = LinalgError::DimensionMismatch {
            expected: (3, 1),
            got: (2, 1),
        };
        assert_eq!(gaussian_elimination(&a, &b).unwrap_err(), err);
        assert_eq!(gaussian_elimination_pivots(&a, &b).unwrap_err(), err);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let (a, b) = sample();
        let x1 = gaussian_elimination(&a, &b).unwrap();
        let x2 = gaussian_elimination(&a, &b).unwrap();
        assert_eq!(x1, x2);
    }
}
