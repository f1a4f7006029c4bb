use num_traits::Zero;

use crate::traits::LinalgScalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Vector norms ────────────────────────────────────────────────────

/// Euclidean norm of a slice, `sqrt(Σ |x_i|²)`.
pub(crate) fn norm2<T: LinalgScalar>(x: &[T]) -> T::Real {
    let mut sum = <T::Real as Zero>::zero();
    for &v in x {
        sum = sum + v.modulus_sq();
    }
    sum.lsqrt()
}

impl<T: LinalgScalar> DynVector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use bandsolve::DynVector;
    /// let v = DynVector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T::Real {
        norm2(self.as_slice())
    }

    /// Infinity norm (largest modulus).
    pub fn norm_inf(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for &x in self.as_slice() {
            let m = x.modulus();
            if m > max {
                max = m;
            }
        }
        max
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: LinalgScalar> DynMatrix<T> {
    /// Frobenius norm (square root of sum of squared moduli).
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T::Real {
        norm2(&self.data)
    }

    /// Infinity norm (maximum row sum of moduli).
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for i in 0..self.nrows {
            let mut row_sum = <T::Real as Zero>::zero();
            for &x in self.row_slice(i) {
                row_sum = row_sum + x.modulus();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }
}
