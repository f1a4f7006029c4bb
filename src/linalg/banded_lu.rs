use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::triangular::{back_substitute_banded, forward_substitute_banded};
use crate::linalg::window::Window;
use crate::linalg::{ensure_rhs_len, ensure_square, LinalgError};
use crate::traits::LinalgScalar;

/// LU factorization without pivoting that exploits a known bandwidth.
///
/// Produces `A = L·U` with `L` unit lower-triangular and `U` upper-triangular,
/// both of bandwidth `d`. Row `k` of `L` and column `k` of `U` come from two
/// small triangular solves against windows of the factors built so far:
///
/// ```text
/// U[km..k, km..k]ᵀ · L[k, km..k]ᵀ = A[k, km..k]ᵀ
/// L[km..=k, km..=k] · U[km..=k, k] = A[km..=k, k]       km = max(0, k - d)
/// ```
///
/// Requires every leading principal submatrix of `A` to be nonsingular.
///
/// # Example
///
/// ```
/// use bandsolve::{DynMatrix, DynVector};
/// use bandsolve::linalg::BandedLu;
///
/// let a = DynMatrix::from_rows(3, 3, &[
///     4.0_f64, 1.0, 0.0,
///     1.0, 4.0, 1.0,
///     0.0, 1.0, 4.0,
/// ]);
/// let lu = BandedLu::new(&a, 1).unwrap();
/// assert_eq!(lu.l()[(2, 0)], 0.0);
/// assert_eq!(lu.u()[(0, 2)], 0.0);
///
/// let x = lu.solve(&DynVector::from_slice(&[5.0, 6.0, 5.0])).unwrap();
/// for xi in x.iter() {
///     assert!((xi - 1.0).abs() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BandedLu<T> {
    l: DynMatrix<T>,
    u: DynMatrix<T>,
    bandwidth: usize,
}

impl<T: LinalgScalar> BandedLu<T> {
    /// Factor `a` with bandwidth `d`. `a` is not modified.
    ///
    /// Fails with `BandwidthExceeded` if `a` has a nonzero entry more than
    /// `d` places off the diagonal, and with `SingularLeadingMinor` if a
    /// diagonal entry of `U` comes out exactly zero.
    pub fn new(a: &DynMatrix<T>, d: usize) -> Result<Self, LinalgError> {
        let n = ensure_square(a)?;
        let d = d.min(n.saturating_sub(1));
        log::debug!("banded LU of {n}x{n} matrix, bandwidth {d}");

        let required = a.lower_bandwidth().max(a.upper_bandwidth());
        if required > d {
            log::debug!("matrix bandwidth {required} exceeds declared {d}");
            return Err(LinalgError::BandwidthExceeded {
                bandwidth: d,
                required,
            });
        }

        let mut l = DynMatrix::eye(n, T::zero());
        let mut u = DynMatrix::zeros(n, n, T::zero());
        if n == 0 {
            return Ok(Self { l, u, bandwidth: d });
        }

        u[(0, 0)] = a[(0, 0)];
        check_pivot(&u, 0)?;

        let mut rhs = Vec::with_capacity(d + 1);
        let mut col = vec![T::zero(); d + 1];
        for k in 1..n {
            let km = k.saturating_sub(d);
            let w = k - km;

            let ut = Window::square(&u, km..k).transposed();
            let row = &a.row_slice(k)[km..k];
            forward_substitute_banded(&ut, row, w, &mut l.row_slice_mut(k)[km..k])
                .map_err(|e| leading_minor(e, km))?;

            rhs.clear();
            rhs.extend((km..=k).map(|i| a[(i, k)]));
            let lw = Window::square(&l, km..k + 1);
            forward_substitute_banded(&lw, &rhs, w, &mut col[..=w])
                .map_err(|e| leading_minor(e, km))?;
            for (i, &v) in col[..=w].iter().enumerate() {
                u[(km + i, k)] = v;
            }

            check_pivot(&u, k)?;
        }

        Ok(Self { l, u, bandwidth: d })
    }

    /// Solve `A x = b` by banded forward then back substitution.
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        let n = self.u.nrows();
        ensure_rhs_len(n, b.len())?;
        let mut y = vec![T::zero(); n];
        forward_substitute_banded(&self.l, b.as_slice(), self.bandwidth, &mut y)?;
        let mut x = vec![T::zero(); n];
        back_substitute_banded(&self.u, &y, self.bandwidth, &mut x)?;
        Ok(DynVector::from_vec(x))
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

    /// Bandwidth used for the factorization, after clamping to `n - 1`.
    #[inline]
    pub fn bandwidth(&self) -> usize {
        self.bandwidth
    }

    /// Consume into `(L, U)`.
    pub fn into_parts(self) -> (DynMatrix<T>, DynMatrix<T>) {
        (self.l, self.u)
    }
}

fn check_pivot<T: LinalgScalar>(u: &DynMatrix<T>, k: usize) -> Result<(), LinalgError> {
    if u[(k, k)] == T::zero() {
        log::debug!("U[{k},{k}] is zero, leading minor of order {} singular", k + 1);
        Err(LinalgError::SingularLeadingMinor { order: k + 1 })
    } else {
        Ok(())
    }
}

fn leading_minor(e: LinalgError, offset: usize) -> LinalgError {
    match e {
        LinalgError::Singular { index } => LinalgError::SingularLeadingMinor {
            order: offset + index + 1,
        },
        other => other,
    }
}
