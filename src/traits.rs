use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point elements.
///
/// Implies `LinalgScalar<Real = Self>` since real floats are their own real type.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Trait for matrix elements that every solver in this crate accepts.
///
/// Covers both real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`). A routine instantiated with a complex `T` runs all of its
/// arithmetic in complex; there is no per-element promotion.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus: `|z|` for complex, `.abs()` for real.
    fn modulus(self) -> Self::Real;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Principal square root.
    fn lsqrt(self) -> Self;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Squared modulus, `z * conj(z)` as a real.
    #[inline]
    fn modulus_sq(self) -> Self::Real {
        (self * self.conj()).re()
    }
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn lsqrt(self) -> $t { Float::sqrt(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn lsqrt(self) -> Self {
        self.sqrt()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

/// Read-only access to a matrix-like type.
///
/// The substitution kernels are written against this trait so they run
/// unchanged on whole matrices and on index windows into them.
pub trait MatrixRef<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;

    /// Number of columns.
    fn ncols(&self) -> usize;

    /// Element at `(row, col)`. Panics when out of bounds.
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    /// Mutable element at `(row, col)`. Panics when out of bounds.
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_modulus_and_conj() {
        assert_eq!((-3.0_f64).modulus(), 3.0);
        assert_eq!(2.5_f64.conj(), 2.5);
        assert_eq!((-2.0_f32).modulus_sq(), 4.0);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_modulus_and_conj() {
        let z = Complex::new(3.0_f64, 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(LinalgScalar::conj(z), Complex::new(3.0, -4.0));
        assert!((z.modulus_sq() - 25.0).abs() < 1e-12);
        assert_eq!(<Complex<f64> as LinalgScalar>::from_real(2.0), Complex::new(2.0, 0.0));
    }
}
