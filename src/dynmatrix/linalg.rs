use crate::linalg::{
    gaussian_elimination, gaussian_elimination_pivots, housetriang, housetriang_solve,
    solve_lower_banded, solve_upper_banded, BandedLu, LinalgError, PivotedLu,
};
use crate::traits::LinalgScalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Convenience methods ─────────────────────────────────────────────

impl<T: LinalgScalar> DynMatrix<T> {
    /// Solve `self · x = b` for lower-triangular `self` with bandwidth `d`.
    ///
    /// ```
    /// use bandsolve::{DynMatrix, DynVector};
    /// let l = DynMatrix::from_rows(2, 2, &[1.0_f64, 0.0, 3.0, 2.0]);
    /// let x = l.solve_lower_banded(&DynVector::from_slice(&[3.0, 13.0]), 1).unwrap();
    /// assert_eq!(x.as_slice(), &[3.0, 2.0]);
    /// ```
    pub fn solve_lower_banded(&self, b: &DynVector<T>, d: usize) -> Result<DynVector<T>, LinalgError> {
        solve_lower_banded(self, b, d)
    }

    /// Solve `self · x = b` for upper-triangular `self` with bandwidth `d`.
    pub fn solve_upper_banded(&self, b: &DynVector<T>, d: usize) -> Result<DynVector<T>, LinalgError> {
        solve_upper_banded(self, b, d)
    }

    /// Banded LU factorization `self = L·U` without pivoting.
    pub fn banded_lu(&self, d: usize) -> Result<BandedLu<T>, LinalgError> {
        BandedLu::new(self, d)
    }

    /// Partial-pivoting LU factorization `self = P·L·U`.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let lu = a.plu().unwrap();
    /// assert_eq!(lu.permutation().as_slice(), &[1, 0]);
    /// assert!((lu.det() + 2.0).abs() < 1e-12);
    /// ```
    pub fn plu(&self) -> Result<PivotedLu<T>, LinalgError> {
        PivotedLu::new(self)
    }

    /// Solve `self · x = b` by Gaussian elimination with partial pivoting.
    ///
    /// ```
    /// use bandsolve::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let x = a.solve(&DynVector::from_slice(&[4.0, 11.0])).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        gaussian_elimination(self, b)
    }

    /// Solve `self · x = b` via explicit `P·L·U` factors.
    pub fn solve_pivoted(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        gaussian_elimination_pivots(self, b)
    }

    /// Solve `self · x = b` by Householder reduction; least squares when
    /// `self` has more rows than columns.
    pub fn solve_householder(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        housetriang_solve(self, b)
    }

    /// Householder reduction of `[self | b]` to `(R, C)`.
    pub fn housetriang(&self, b: &DynMatrix<T>) -> Result<(DynMatrix<T>, DynMatrix<T>), LinalgError> {
        housetriang(self, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn all_paths_agree() {
        let a = DynMatrix::from_rows(3, 3, &[4.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 4.0]);
        let b = DynVector::from_slice(&[3.0, 2.0, 3.0]);
        let reference = a.solve(&b).unwrap();
        for x in [
            a.solve_pivoted(&b).unwrap(),
            a.solve_householder(&b).unwrap(),
            a.banded_lu(1).unwrap().solve(&b).unwrap(),
            a.plu().unwrap().solve(&b).unwrap(),
        ] {
            for i in 0..3 {
                assert_abs_diff_eq!(x[i], reference[i], epsilon = 1e-12);
            }
        }
        for i in 0..3 {
            assert_abs_diff_eq!(reference[i], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn triangular_methods() {
        let l = DynMatrix::from_rows(2, 2, &[2.0, 0.0, 1.0, 1.0]);
        let b = DynVector::from_slice(&[2.0, 3.0]);
        assert_eq!(l.solve_lower_banded(&b, 1).unwrap().as_slice(), &[1.0, 2.0]);
        let u = l.transpose();
        assert_eq!(u.solve_upper_banded(&b, 1).unwrap().as_slice(), &[-0.5, 3.0]);
    }

    #[test]
    fn housetriang_method() {
        let a = DynMatrix::eye(2, 0.0_f64);
        let b = DynMatrix::from_rows(2, 1, &[1.0, 2.0]);
        let (r, c) = a.housetriang(&b).unwrap();
        assert_abs_diff_eq!(r[(0, 0)].abs(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.col(0).norm(), 5.0_f64.sqrt(), epsilon = 1e-14);
    }
}
