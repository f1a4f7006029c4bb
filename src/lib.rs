//! # bandsolve
//!
//! Dense and banded direct solvers for real and complex linear systems.
//!
//! ## Quick start
//!
//! ```
//! use bandsolve::{DynMatrix, DynVector};
//!
//! let a = DynMatrix::from_rows(3, 3, &[
//!     1.0_f64, 1.0, 2.0,
//!     2.0, 2.0, 1.0,
//!     1.0, 2.0, 3.0,
//! ]);
//! let b = DynVector::from_slice(&[9.0, 9.0, 14.0]);
//!
//! let x = a.solve(&b).unwrap(); // x = [1, 2, 3]
//! assert!((x[0] - 1.0).abs() < 1e-12);
//!
//! let lu = a.plu().unwrap();
//! assert!((lu.det() - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`]: Heap-allocated `DynMatrix<T>` with runtime dimensions and
//!   row-major `Vec<T>` storage, plus the [`DynVector<T>`] newtype. Implements
//!   [`MatrixRef`] / [`MatrixMut`]. Convenience methods forward to the solvers:
//!   `a.solve(&b)`, `a.plu()`, `a.banded_lu(d)`, `a.solve_householder(&b)`.
//!
//! - [`linalg`]: The algorithms:
//!   - banded forward/back substitution (`O(n·d)` for bandwidth `d`)
//!   - [`BandedLu`](linalg::BandedLu): LU without pivoting that only touches
//!     the band, through [`Window`](linalg::Window) views of the factors
//!   - [`PivotedLu`](linalg::PivotedLu): partial pivoting, `A = P·L·U`
//!   - Householder reflector generation and triangularization of `[A | B]`,
//!     with least-squares solves for tall `A`
//!   - Gaussian elimination, direct and through explicit factors
//!
//!   All failures are reported as [`LinalgError`].
//!
//! - [`mixed`]: `MixedMatrix` / `MixedVector` hold either `f64` or
//!   `Complex<f64>` and promote to complex at the call boundary when any
//!   operand is complex. Requires the `complex` feature.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`)
//!   - [`LinalgScalar`]: real floats and complex numbers, used by every solver
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Complex matrices
//!
//! With the `complex` feature every solver accepts `Complex<f32>` /
//! `Complex<f64>`. Householder reflections use the conjugate transpose;
//! norms and pivot magnitudes are real.
//!
//! ## Logging
//!
//! Factorizations emit `debug!` records on entry and on singular pivots, and
//! `trace!` records for each row swap, through the [`log`] facade. No logger
//! is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `complex` | yes     | `Complex<f32>` / `Complex<f64>` support via `num-complex`, and the [`mixed`] module |

pub mod dynmatrix;
pub mod linalg;
#[cfg(feature = "complex")]
pub mod mixed;
pub mod traits;

pub use dynmatrix::{DynMatrix, DynMatrixf32, DynMatrixf64, DynVector, DynVectorf32, DynVectorf64};
#[cfg(feature = "complex")]
pub use dynmatrix::{DynMatrixz32, DynMatrixz64, DynVectorz32, DynVectorz64};
pub use linalg::LinalgError;
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
