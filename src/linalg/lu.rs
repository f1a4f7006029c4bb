use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::perm::Permutation;
use crate::linalg::triangular::{back_substitute_banded, forward_substitute_banded};
use crate::linalg::{ensure_rhs_len, ensure_square, LinalgError};
use crate::traits::LinalgScalar;

/// LU decomposition with partial pivoting: `A = P·L·U`.
///
/// `L` is unit lower-triangular and `U` upper-triangular, both stored as
/// separate dense matrices. `P` is kept as a [`Permutation`].
///
/// # Example
///
/// ```
/// use bandsolve::{DynMatrix, DynVector};
/// use bandsolve::linalg::PivotedLu;
///
/// let a = DynMatrix::from_rows(3, 3, &[
///     1.0_f64, 1.0, 2.0,
///     2.0, 2.0, 1.0,
///     1.0, 2.0, 3.0,
/// ]);
/// let lu = PivotedLu::new(&a).unwrap();
/// let back = lu.reconstruct();
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((back[(i, j)] - a[(i, j)]).abs() < 1e-12);
///     }
/// }
///
/// let b = DynVector::from_slice(&[9.0, 9.0, 14.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((x[2] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PivotedLu<T> {
    perm: Permutation,
    l: DynMatrix<T>,
    u: DynMatrix<T>,
}

impl<T: LinalgScalar> PivotedLu<T> {
    /// Factor a square matrix. `a` is not modified.
    ///
    /// At column `k` the pivot is the first row `i >= k` of largest modulus.
    /// A zero pivot returns `LinalgError::Singular { index: k }`; all `n`
    /// columns are checked, the last one included.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        let n = ensure_square(a)?;
        log::debug!("pivoted LU of {n}x{n} matrix");

        let mut u = a.clone();
        let mut l = DynMatrix::eye(n, T::zero());
        let mut perm = Permutation::identity(n);

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
                l.swap_row_range(k, pivot_row, 0..k);
                perm.swap(k, pivot_row);
            }

            let pivot = u[(k, k)];
            for j in (k + 1)..n {
                let factor = u[(j, k)] / pivot;
                l[(j, k)] = factor;
                u[(j, k)] = T::zero();
                for c in (k + 1)..n {
                    u[(j, c)] = u[(j, c)] - factor * u[(k, c)];
                }
            }
        }

        Ok(Self { perm, l, u })
    }

    /// Solve `A x = b` as `L y = Pᵀ b`, then `U x = y`.
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        let n = self.u.nrows();
        ensure_rhs_len(n, b.len())?;
        let pb = self.perm.apply_transpose(b);
        let dense = n.saturating_sub(1);
        let mut y = vec![T::zero(); n];
        forward_substitute_banded(&self.l, pb.as_slice(), dense, &mut y)?;
        let mut x = vec![T::zero(); n];
        back_substitute_banded(&self.u, &y, dense, &mut x)?;
        Ok(DynVector::from_vec(x))
    }

    /// Determinant, `sign(P) · Π U[k,k]`.
    pub fn det(&self) -> T {
        let mut det = if self.perm.sign() < 0 {
            T::zero() - T::one()
        } else {
            T::one()
        };
        for k in 0..self.u.nrows() {
            det = det * self.u[(k, k)];
        }
        det
    }

    /// `P·L·U`, which equals the factored matrix up to rounding.
    pub fn reconstruct(&self) -> DynMatrix<T> {
        self.perm.apply_rows(&(&self.l * &self.u))
    }

    /// The unit lower-triangular factor.
    #[inline]
    pub fn l(&self) -> &DynMatrix<T> {
        &self.l
    }

    /// The upper-triangular factor.
    #[inline]
    pub fn u(&self) -> &DynMatrix<T> {
        &self.u
    }

    #[inline]
    pub fn permutation(&self) -> &Permutation {
        &self.perm
    }

    /// The permutation as a dense 0/1 matrix.
    pub fn p(&self) -> DynMatrix<T> {
        self.perm.to_matrix(T::zero())
    }

    /// Consume into `(P, L, U)` with `P` materialized.
    pub fn into_parts(self) -> (DynMatrix<T>, DynMatrix<T>, DynMatrix<T>) {
        (self.p(), self.l, self.u)
    }
}
