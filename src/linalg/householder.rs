use num_traits::{Float, NumCast, One, Zero};

use crate::dynmatrix::norm::norm2;
use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::triangular::back_substitute_banded;
use crate::linalg::LinalgError;
use crate::traits::LinalgScalar;

/// A Householder reflector `H = I - u·uᴴ` together with the value it maps
/// its generating vector to.
///
/// For the `x` it was generated from, `H·x = alpha·e₁` and `|alpha| = ‖x‖₂`.
/// `u` is scaled so that `uᴴu = 2`, which makes `H` unitary and Hermitian.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflector<T> {
    u: DynVector<T>,
    alpha: T,
}

impl<T: LinalgScalar> Reflector<T> {
    /// The reflection vector `u`.
    #[inline]
    pub fn u(&self) -> &DynVector<T> {
        &self.u
    }

    /// The image `alpha` of the generating vector on `e₁`.
    #[inline]
    pub fn alpha(&self) -> T {
        self.alpha
    }

    pub fn into_parts(self) -> (DynVector<T>, T) {
        (self.u, self.alpha)
    }

    /// `H·x = x - u·(uᴴx)`.
    pub fn apply(&self, x: &DynVector<T>) -> DynVector<T> {
        assert_eq!(x.len(), self.u.len(), "reflector length mismatch");
        let mut out = x.clone();
        reflect(self.u.as_slice(), out.as_mut_slice());
        out
    }
}

/// `x ← x - u·(uᴴx)`.
fn reflect<T: LinalgScalar>(u: &[T], x: &mut [T]) {
    let s = u
        .iter()
        .zip(x.iter())
        .fold(T::zero(), |acc, (&ui, &xi)| acc + ui.conj() * xi);
    for (xi, &ui) in x.iter_mut().zip(u) {
        *xi = *xi - ui * s;
    }
}

/// Generate the Householder reflector mapping `x` onto a multiple of `e₁`.
///
/// With `a = ‖x‖₂` and `r = x₀/|x₀|` (or `1` when `x₀ = 0`), the result has
/// `alpha = -r·a`, so the reflection never cancels against `x₀`. A zero
/// vector gives `alpha = 0` and `u = x` with `u₀ = √2`.
///
/// ```
/// use bandsolve::DynVector;
/// use bandsolve::linalg::housegen;
///
/// let x = DynVector::from_slice(&[3.0_f64, 4.0]);
/// let h = housegen(x.as_slice()).unwrap();
/// assert!((h.alpha() + 5.0).abs() < 1e-12);
/// let hx = h.apply(&x);
/// assert!((hx[0] + 5.0).abs() < 1e-12);
/// assert!(hx[1].abs() < 1e-12);
/// ```
pub fn housegen<T: LinalgScalar>(x: &[T]) -> Result<Reflector<T>, LinalgError> {
    let Some(&x0) = x.first() else {
        return Err(LinalgError::EmptyInput);
    };

    let a = norm2(x);
    let mut u = x.to_vec();
    if a == <T::Real as Zero>::zero() {
        u[0] = (T::one() + T::one()).lsqrt();
        return Ok(Reflector {
            u: DynVector::from_vec(u),
            alpha: T::zero(),
        });
    }

    let r = if x0 == T::zero() {
        T::one()
    } else {
        x0 / T::from_real(x0.modulus())
    };
    let scale = r.conj() / T::from_real(a);
    for ui in u.iter_mut() {
        *ui = *ui * scale;
    }
    u[0] = u[0] + T::one();
    let root = u[0].lsqrt();
    for ui in u.iter_mut() {
        *ui = *ui / root;
    }

    Ok(Reflector {
        u: DynVector::from_vec(u),
        alpha: T::zero() - r * T::from_real(a),
    })
}

/// Reduce `[A | B]` to upper-trapezoidal form with Householder reflections.
///
/// `A` is `m x n` and `B` is `m x r`. Column `k` of `A` is reflected for
/// `k < min(n, m - 1)` and each reflector is applied to every column to its
/// right, `B` included. Returns `(R, C)` where `R` is the upper triangle of
/// the reduced `A` and `C` the transformed `B`, so `Qᴴ·A = R` and
/// `Qᴴ·B = C` for the unitary `Q` built from the reflectors.
///
/// ```
/// use bandsolve::DynMatrix;
/// use bandsolve::linalg::housetriang;
///
/// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 1.0, 4.0, 2.0]);
/// let b = DynMatrix::from_rows(2, 1, &[1.0, 1.0]);
/// let (r, c) = housetriang(&a, &b).unwrap();
/// assert_eq!(r[(1, 0)], 0.0);
/// assert!((r[(0, 0)].abs() - 5.0).abs() < 1e-12);
/// assert_eq!(c.nrows(), 2);
/// ```
pub fn housetriang<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynMatrix<T>,
) -> Result<(DynMatrix<T>, DynMatrix<T>), LinalgError> {
    let (m, n) = (a.nrows(), a.ncols());
    if b.nrows() != m {
        return Err(LinalgError::DimensionMismatch {
            expected: (m, b.ncols()),
            got: (b.nrows(), b.ncols()),
        });
    }
    let steps = n.min(m.saturating_sub(1));
    log::debug!("householder reduction of {m}x{n} matrix, {} rhs, {steps} steps", b.ncols());

    let mut aug = a.hstack(b);
    let width = aug.ncols();
    let mut col = Vec::with_capacity(m);
    for k in 0..steps {
        col.clear();
        col.extend((k..m).map(|i| aug[(i, k)]));
        let h = housegen(&col)?;
        let u = h.u.as_slice();

        aug[(k, k)] = h.alpha;
        for c in (k + 1)..width {
            col.clear();
            col.extend((k..m).map(|i| aug[(i, c)]));
            reflect(u, &mut col);
            for (i, &v) in col.iter().enumerate() {
                aug[(k + i, c)] = v;
            }
        }
    }

    let r = aug.left_cols(n).upper_triangle();
    let c = aug.right_cols(b.ncols());
    Ok((r, c))
}

/// Solve `A x = b` by Householder reduction and back substitution.
///
/// For `m > n` this is the least-squares solution minimizing `‖A x - b‖₂`.
/// `m < n` is underdetermined and returns `DimensionMismatch`.
///
/// Reflections leave rounding residue where an exact elimination would
/// produce zero, so a diagonal entry of `R` with
/// `|R[k,k]| <= max(m, n)·ε·‖A‖_F` is reported as `Singular { index: k }`.
pub fn housetriang_solve<T: LinalgScalar>(
    a: &DynMatrix<T>,
    b: &DynVector<T>,
) -> Result<DynVector<T>, LinalgError> {
    let (m, n) = (a.nrows(), a.ncols());
    if m < n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, n),
            got: (m, n),
        });
    }
    if b.len() != m {
        return Err(LinalgError::DimensionMismatch {
            expected: (m, 1),
            got: (b.len(), 1),
        });
    }

    let (r, c) = housetriang(a, &b.to_column())?;
    if let Some(k) = rank_deficient_column(&r, a.frobenius_norm(), m.max(n)) {
        log::debug!("householder solve: R[{k},{k}] below rank tolerance");
        return Err(LinalgError::Singular { index: k });
    }
    let rhs: Vec<T> = (0..n).map(|i| c[(i, 0)]).collect();
    let mut x = vec![T::zero(); n];
    back_substitute_banded(&r, &rhs, n.saturating_sub(1), &mut x)?;
    Ok(DynVector::from_vec(x))
}

/// First `k` with `|R[k,k]| <= dim·ε·scale`.
fn rank_deficient_column<T: LinalgScalar>(
    r: &DynMatrix<T>,
    scale: T::Real,
    dim: usize,
) -> Option<usize> {
    let eps = <T::Real as Float>::epsilon();
    let dim = <T::Real as NumCast>::from(dim).unwrap_or_else(<T::Real as One>::one);
    let tol = dim * eps * scale;
    (0..r.ncols()).find(|&k| r[(k, k)].modulus() <= tol)
}
