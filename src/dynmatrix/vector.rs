use std::ops::{Index, IndexMut};

use crate::traits::{LinalgScalar, Scalar};

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Provides single-index access `v[i]` and slice views for the kernels.
///
/// # Examples
///
/// ```
/// use bandsolve::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            inner: DynMatrix::from_rows(1, data.len(), data),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use bandsolve::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }

    /// Unconjugated dot product.
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        dot(self.as_slice(), rhs.as_slice())
    }

    /// Swap two entries in place.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T: LinalgScalar> DynVector<T> {
    /// Hermitian inner product `selfᴴ · rhs`.
    ///
    /// ```
    /// use bandsolve::DynVector;
    /// let a = DynVector::from_slice(&[1.0_f64, 2.0]);
    /// let b = DynVector::from_slice(&[3.0, 4.0]);
    /// assert_eq!(a.dot_h(&b), 11.0);
    /// ```
    pub fn dot_h(&self, rhs: &Self) -> T {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        self.as_slice()
            .iter()
            .zip(rhs.as_slice())
            .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b)
    }
}

impl<T> DynVector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.row_slice_mut(0)
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

/// Unconjugated dot product of two equal-length slices.
#[inline]
pub(crate) fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> From<Vec<T>> for DynVector<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_vec(v)
    }
}

impl<T: Scalar> From<&[T]> for DynVector<T> {
    fn from(v: &[T]) -> Self {
        Self::from_slice(v)
    }
}

impl<T: Scalar> DynVector<T> {
    /// View as an `n x 1` column matrix.
    ///
    /// ```
    /// use bandsolve::DynVector;
    /// let v = DynVector::from_slice(&[1.0, 2.0]);
    /// let c = v.to_column();
    /// assert_eq!((c.nrows(), c.ncols()), (2, 1));
    /// ```
    pub fn to_column(&self) -> DynMatrix<T> {
        DynMatrix::from_rows(self.len(), 1, self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn zeros() {
        let v = DynVector::zeros(4, 0.0_f64);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn index_mut() {
        let mut v = DynVector::zeros(3, 0.0_f64);
        v[1] = 5.0;
        assert_eq!(v[1], 5.0);
    }

    #[test]
    fn dot_product() {
        let a = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        let b = DynVector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn swap_entries() {
        let mut v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        v.swap(0, 2);
        assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn empty() {
        let v = DynVector::<f64>::from(Vec::new());
        assert!(v.is_empty());
        let w: DynVector<f64> = [1.0, 2.0][..].into();
        assert_eq!(w.len(), 2);
    }
}
