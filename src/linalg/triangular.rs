use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::{ensure_rhs_len, ensure_square, LinalgError};
use crate::traits::{LinalgScalar, MatrixRef};

/// Forward substitution for a lower-triangular matrix with bandwidth `d`.
///
/// Solves `A x = b` reading only `A[k, max(0, k-d)..=k]` in row `k`, so the
/// cost is `O(n·d)`. Entries further below the diagonal are never touched;
/// passing a `d` smaller than the true bandwidth gives a wrong answer rather
/// than an error. Any `d >= n - 1` is a dense solve.
///
/// `b` and `x` are separate slices of length `n = b.len()`, and `a` must be
/// at least `n x n`.
///
/// Returns `LinalgError::Singular` if a diagonal entry is exactly zero.
pub fn forward_substitute_banded<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
    b: &[T],
    d: usize,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = b.len();
    assert_eq!(x.len(), n, "solution slice length must match rhs");
    assert!(
        a.nrows() >= n && a.ncols() >= n,
        "{}x{} matrix too small for rhs of length {}",
        a.nrows(),
        a.ncols(),
        n,
    );

    for k in 0..n {
        let lk = k.saturating_sub(d);
        let mut sum = b[k];
        for j in lk..k {
            sum = sum - *a.get(k, j) * x[j];
        }
        let diag = *a.get(k, k);
        if diag == T::zero() {
            log::debug!("forward substitution hit zero diagonal at {k}");
            return Err(LinalgError::Singular { index: k });
        }
        x[k] = sum / diag;
    }
    Ok(())
}

/// Back substitution for an upper-triangular matrix with bandwidth `d`.
///
/// Mirror image of [`forward_substitute_banded`]: row `k` reads
/// `A[k, k..=min(n-1, k+d)]`, scanning `k` from `n-1` down to `0`.
pub fn back_substitute_banded<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
    b: &[T],
    d: usize,
    x: &mut [T],
) -> Result<(), LinalgError> {
    let n = b.len();
    assert_eq!(x.len(), n, "solution slice length must match rhs");
    assert!(
        a.nrows() >= n && a.ncols() >= n,
        "{}x{} matrix too small for rhs of length {}",
        a.nrows(),
        a.ncols(),
        n,
    );

    for k in (0..n).rev() {
        let uk = k.saturating_add(d).min(n - 1);
        let mut sum = b[k];
        for j in (k + 1)..=uk {
            sum = sum - *a.get(k, j) * x[j];
        }
        let diag = *a.get(k, k);
        if diag == T::zero() {
            log::debug!("back substitution hit zero diagonal at {k}");
            return Err(LinalgError::Singular { index: k });
        }
        x[k] = sum / diag;
    }
    Ok(())
}

/// Solve `A x = b` for a nonsingular lower-triangular `A` with bandwidth `d`.
///
/// `A` and `b` are left untouched; the solution is a fresh vector.
///
/// ```
/// use bandsolve::{DynMatrix, DynVector};
/// use bandsolve::linalg::solve_lower_banded;
///
/// let a = DynMatrix::from_rows(3, 3, &[
///     2.0_f64, 0.0, 0.0,
///     1.0, 4.0, 0.0,
///     0.0, 3.0, 1.0,
/// ]);
/// let b = DynVector::from_slice(&[2.0, 9.0, 7.0]);
/// let x = solve_lower_banded(&a, &b, 1).unwrap();
/// assert_eq!(x.as_slice(), &[1.0, 2.0, 1.0]);
/// ```
pub fn solve_lower_banded<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynVector<T>,
    d: usize,
) -> Result<DynVector<T>, LinalgError> {
    let n = ensure_square(a)?;
    ensure_rhs_len(n, b.len())?;
    let mut x = vec![T::zero(); n];
    forward_substitute_banded(a, b.as_slice(), d, &mut x)?;
    Ok(DynVector::from_vec(x))
}

/// Solve `A x = b` for a nonsingular upper-triangular `A` with bandwidth `d`.
///
/// ```
/// use bandsolve::{DynMatrix, DynVector};
/// use bandsolve::linalg::solve_upper_banded;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 3.0, 0.0, 2.0]);
/// let b = DynVector::from_slice(&[7.0, 4.0]);
/// let x = solve_upper_banded(&a, &b, 1).unwrap();
/// assert_eq!(x.as_slice(), &[1.0, 2.0]);
/// ```
pub fn solve_upper_banded<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynVector<T>,
    d: usize,
) -> Result<DynVector<T>, LinalgError> {
    let n = ensure_square(a)?;
    ensure_rhs_len(n, b.len())?;
    let mut x = vec![T::zero(); n];
    back_substitute_banded(a, b.as_slice(), d, &mut x)?;
    Ok(DynVector::from_vec(x))
}
