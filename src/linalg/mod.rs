//! Factorizations and direct solvers.
//!
//! Every routine borrows its inputs, works on private copies and returns
//! owned results. Free functions are generic over [`LinalgScalar`], so the
//! same code path serves `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
//!
//! [`LinalgScalar`]: crate::traits::LinalgScalar

pub(crate) mod banded_lu;
pub(crate) mod gauss;
pub(crate) mod householder;
pub(crate) mod lu;
pub(crate) mod perm;
pub(crate) mod triangular;
pub(crate) mod window;

pub use banded_lu::BandedLu;
pub use gauss::{gaussian_elimination, gaussian_elimination_pivots};
pub use householder::{housegen, housetriang, housetriang_solve, Reflector};
pub use lu::PivotedLu;
pub use perm::Permutation;
pub use triangular::{
    back_substitute_banded, forward_substitute_banded, solve_lower_banded, solve_upper_banded,
};
pub use window::Window;

use thiserror::Error;

/// Errors from linear algebra operations.
///
/// ```
/// use bandsolve::DynMatrix;
/// use bandsolve::linalg::LinalgError;
///
/// let singular = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.plu().unwrap_err(), LinalgError::Singular { index: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A pivot or diagonal entry required as a divisor is exactly zero.
    #[error("matrix is singular: zero pivot at index {index}")]
    Singular { index: usize },

    /// Banded LU needs every leading principal submatrix to be nonsingular.
    #[error("leading principal submatrix of order {order} is singular")]
    SingularLeadingMinor { order: usize },

    /// A square matrix was required.
    #[error("expected a square matrix, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    /// Operand shapes are incompatible. Both fields are `(rows, cols)`.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// The matrix has nonzero entries outside the declared band.
    #[error("declared bandwidth {bandwidth} is smaller than the matrix bandwidth {required}")]
    BandwidthExceeded { bandwidth: usize, required: usize },

    /// A zero-length vector was passed where at least one entry is needed.
    #[error("input vector is empty")]
    EmptyInput,
}

/// Fail with [`LinalgError::NotSquare`] unless `a` is square.
pub(crate) fn ensure_square<T>(a: &crate::DynMatrix<T>) -> Result<usize, LinalgError> {
    if a.is_square() {
        Ok(a.nrows())
    } else {
        Err(LinalgError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        })
    }
}

/// Fail with [`LinalgError::DimensionMismatch`] unless `len == n`.
pub(crate) fn ensure_rhs_len(n: usize, len: usize) -> Result<(), LinalgError> {
    if len == n {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (len, 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynMatrix;

    #[test]
    fn error_messages() {
        assert_eq!(
            LinalgError::Singular { index: 2 }.to_string(),
            "matrix is singular: zero pivot at index 2"
        );
        assert_eq!(
            LinalgError::DimensionMismatch {
                expected: (3, 1),
                got: (2, 1)
            }
            .to_string(),
            "dimension mismatch: expected 3x1, got 2x1"
        );
        assert_eq!(
            LinalgError::BandwidthExceeded {
                bandwidth: 1,
                required: 2
            }
            .to_string(),
            "declared bandwidth 1 is smaller than the matrix bandwidth 2"
        );
    }

    #[test]
    fn shape_guards() {
        let rect = DynMatrix::zeros(2, 3, 0.0_f64);
        assert_eq!(
            ensure_square(&rect),
            Err(LinalgError::NotSquare { nrows: 2, ncols: 3 })
        );
        assert_eq!(ensure_square(&DynMatrix::eye(3, 0.0_f64)), Ok(3));
        assert!(ensure_rhs_len(3, 3).is_ok());
        assert!(ensure_rhs_len(3, 2).is_err());
    }
}
