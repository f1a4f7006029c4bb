//! Runtime real/complex dispatch.
//!
//! The generic routines in [`linalg`](crate::linalg) fix the element type at
//! compile time. The wrappers here accept operands whose type is only known
//! at runtime: if any operand is complex, every operand is promoted to
//! `Complex<f64>` once, on entry, and the complex instantiation runs.
//! Otherwise the real one runs and no copy is made.
//!
//! ```
//! use bandsolve::mixed::{self, MixedMatrix, MixedVector};
//! use bandsolve::{Complex, DynMatrix, DynVector};
//!
//! let a: MixedMatrix = DynMatrix::from_rows(2, 2, &[1.0_f64, 0.0, 3.0, 2.0]).into();
//! let b: MixedVector = DynVector::from_slice(&[
//!     Complex::new(3.0, 0.0),
//!     Complex::new(0.0, 4.2),
//! ]).into();
//! let x = mixed::solve_lower_banded(&a, &b, 1).unwrap();
//! assert!(x.is_complex());
//! ```

use std::borrow::Cow;

use num_complex::Complex;

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::linalg::{self, LinalgError};

type C64 = Complex<f64>;

/// A matrix of `f64` or `Complex<f64>` entries.
#[derive(Debug, Clone, PartialEq)]
pub enum MixedMatrix {
    Real(DynMatrix<f64>),
    Complex(DynMatrix<C64>),
}

/// A vector of `f64` or `Complex<f64>` entries.
#[derive(Debug, Clone, PartialEq)]
pub enum MixedVector {
    Real(DynVector<f64>),
    Complex(DynVector<C64>),
}

/// A single `f64` or `Complex<f64>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixedScalar {
    Real(f64),
    Complex(C64),
}

impl MixedMatrix {
    pub fn is_complex(&self) -> bool {
        matches!(self, MixedMatrix::Complex(_))
    }

    pub fn nrows(&self) -> usize {
        match self {
            MixedMatrix::Real(m) => m.nrows(),
            MixedMatrix::Complex(m) => m.nrows(),
        }
    }

    pub fn ncols(&self) -> usize {
        match self {
            MixedMatrix::Real(m) => m.ncols(),
            MixedMatrix::Complex(m) => m.ncols(),
        }
    }

    /// Complex view of the matrix; borrows when already complex.
    pub fn to_complex(&self) -> Cow<'_, DynMatrix<C64>> {
        match self {
            MixedMatrix::Real(m) => Cow::Owned(m.map(|x| C64::new(x, 0.0))),
            MixedMatrix::Complex(m) => Cow::Borrowed(m),
        }
    }

    pub fn as_real(&self) -> Option<&DynMatrix<f64>> {
        match self {
            MixedMatrix::Real(m) => Some(m),
            MixedMatrix::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&DynMatrix<C64>> {
        match self {
            MixedMatrix::Real(_) => None,
            MixedMatrix::Complex(m) => Some(m),
        }
    }
}

impl MixedVector {
    pub fn is_complex(&self) -> bool {
        matches!(self, MixedVector::Complex(_))
    }

    pub fn len(&self) -> usize {
        match self {
            MixedVector::Real(v) => v.len(),
            MixedVector::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Complex view of the vector; borrows when already complex.
    pub fn to_complex(&self) -> Cow<'_, DynVector<C64>> {
        match self {
            MixedVector::Real(v) => {
                Cow::Owned(DynVector::from_vec(v.iter().map(|&x| C64::new(x, 0.0)).collect()))
            }
            MixedVector::Complex(v) => Cow::Borrowed(v),
        }
    }

    /// Single-column matrix with the same entries.
    pub fn to_column(&self) -> MixedMatrix {
        match self {
            MixedVector::Real(v) => MixedMatrix::Real(v.to_column()),
            MixedVector::Complex(v) => MixedMatrix::Complex(v.to_column()),
        }
    }

    pub fn as_real(&self) -> Option<&DynVector<f64>> {
        match self {
            MixedVector::Real(v) => Some(v),
            MixedVector::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&DynVector<C64>> {
        match self {
            MixedVector::Real(_) => None,
            MixedVector::Complex(v) => Some(v),
        }
    }
}

impl From<DynMatrix<f64>> for MixedMatrix {
    fn from(m: DynMatrix<f64>) -> Self {
        MixedMatrix::Real(m)
    }
}

impl From<DynMatrix<C64>> for MixedMatrix {
    fn from(m: DynMatrix<C64>) -> Self {
        MixedMatrix::Complex(m)
    }
}

impl From<DynVector<f64>> for MixedVector {
    fn from(v: DynVector<f64>) -> Self {
        MixedVector::Real(v)
    }
}

impl From<DynVector<C64>> for MixedVector {
    fn from(v: DynVector<C64>) -> Self {
        MixedVector::Complex(v)
    }
}

// ── Dispatch ────────────────────────────────────────────────────────

fn dispatch_solve(
    a: &MixedMatrix,
    b: &MixedVector,
    real: impl FnOnce(&DynMatrix<f64>, &DynVector<f64>) -> Result<DynVector<f64>, LinalgError>,
    complex: impl FnOnce(&DynMatrix<C64>, &DynVector<C64>) -> Result<DynVector<C64>, LinalgError>,
) -> Result<MixedVector, LinalgError> {
    match (a, b) {
        (MixedMatrix::Real(a), MixedVector::Real(b)) => real(a, b).map(MixedVector::Real),
        _ => {
            log::debug!("promoting operands to complex");
            let (a, b) = (a.to_complex(), b.to_complex());
            complex(&*a, &*b).map(MixedVector::Complex)
        }
    }
}

/// [`linalg::solve_lower_banded`] with runtime promotion.
pub fn solve_lower_banded(
    a: &MixedMatrix,
    b: &MixedVector,
    d: usize,
) -> Result<MixedVector, LinalgError> {
    dispatch_solve(
        a,
        b,
        |a, b| linalg::solve_lower_banded(a, b, d),
        |a, b| linalg::solve_lower_banded(a, b, d),
    )
}

/// [`linalg::solve_upper_banded`] with runtime promotion.
pub fn solve_upper_banded(
    a: &MixedMatrix,
    b: &MixedVector,
    d: usize,
) -> Result<MixedVector, LinalgError> {
    dispatch_solve(
        a,
        b,
        |a, b| linalg::solve_upper_banded(a, b, d),
        |a, b| linalg::solve_upper_banded(a, b, d),
    )
}

/// [`linalg::gaussian_elimination`] with runtime promotion.
pub fn gaussian_elimination(a: &MixedMatrix, b: &MixedVector) -> Result<MixedVector, LinalgError> {
    dispatch_solve(
        a,
        b,
        |a, b| linalg::gaussian_elimination(a, b),
        |a, b| linalg::gaussian_elimination(a, b),
    )
}

/// [`linalg::gaussian_elimination_pivots`] with runtime promotion.
pub fn gaussian_elimination_pivots(
    a: &MixedMatrix,
    b: &MixedVector,
) -> Result<MixedVector, LinalgError> {
    dispatch_solve(
        a,
        b,
        |a, b| linalg::gaussian_elimination_pivots(a, b),
        |a, b| linalg::gaussian_elimination_pivots(a, b),
    )
}

/// [`linalg::housetriang_solve`] with runtime promotion.
pub fn housetriang_solve(a: &MixedMatrix, b: &MixedVector) -> Result<MixedVector, LinalgError> {
    dispatch_solve(
        a,
        b,
        |a, b| linalg::housetriang_solve(a, b),
        |a, b| linalg::housetriang_solve(a, b),
    )
}

/// Banded LU factors `(L, U)`, complex only if `a` is.
pub fn banded_lu(a: &MixedMatrix, d: usize) -> Result<(MixedMatrix, MixedMatrix), LinalgError> {
    match a {
        MixedMatrix::Real(a) => {
            let (l, u) = linalg::BandedLu::new(a, d)?.into_parts();
            Ok((l.into(), u.into()))
        }
        MixedMatrix::Complex(a) => {
            let (l, u) = linalg::BandedLu::new(a, d)?.into_parts();
            Ok((l.into(), u.into()))
        }
    }
}

/// Pivoted LU factors `(P, L, U)` with `P` materialized.
pub fn plu(a: &MixedMatrix) -> Result<(MixedMatrix, MixedMatrix, MixedMatrix), LinalgError> {
    match a {
        MixedMatrix::Real(a) => {
            let (p, l, u) = linalg::PivotedLu::new(a)?.into_parts();
            Ok((p.into(), l.into(), u.into()))
        }
        MixedMatrix::Complex(a) => {
            let (p, l, u) = linalg::PivotedLu::new(a)?.into_parts();
            Ok((p.into(), l.into(), u.into()))
        }
    }
}

/// Householder vector and image `(u, alpha)` for `x`.
pub fn housegen(x: &MixedVector) -> Result<(MixedVector, MixedScalar), LinalgError> {
    match x {
        MixedVector::Real(x) => {
            let (u, a) = linalg::housegen(x.as_slice())?.into_parts();
            Ok((u.into(), MixedScalar::Real(a)))
        }
        MixedVector::Complex(x) => {
            let (u, a) = linalg::housegen(x.as_slice())?.into_parts();
            Ok((u.into(), MixedScalar::Complex(a)))
        }
    }
}

/// Householder reduction `(R, C)` of `[A | B]`, complex if either is.
pub fn housetriang(
    a: &MixedMatrix,
    b: &MixedMatrix,
) -> Result<(MixedMatrix, MixedMatrix), LinalgError> {
    match (a, b) {
        (MixedMatrix::Real(a), MixedMatrix::Real(b)) => {
            let (r, c) = linalg::housetriang(a, b)?;
            Ok((r.into(), c.into()))
        }
        _ => {
            log::debug!("promoting operands to complex");
            let (a, b) = (a.to_complex(), b.to_complex());
            let (r, c) = linalg::housetriang(&*a, &*b)?;
            Ok((r.into(), c.into()))
        }
    }
}
