use crate::dynmatrix::{DynMatrix, DynVector};
use crate::traits::Scalar;

/// A row permutation stored as an index array.
///
/// `perm[i]` is the row of `A` that ends up in row `i` of `Pᵀ·A`, so
/// `P[perm[i], i] = 1`. The dense matrix is only built by [`to_matrix`].
///
/// ```
/// use bandsolve::linalg::Permutation;
/// use bandsolve::DynVector;
///
/// let mut p = Permutation::identity(3);
/// p.swap(0, 2);
/// let b = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(p.apply_transpose(&b).as_slice(), &[3.0, 2.0, 1.0]);
/// assert_eq!(p.sign(), -1);
/// ```
///
/// [`to_matrix`]: Permutation::to_matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    perm: Vec<usize>,
    swaps: usize,
}

impl Permutation {
    /// The identity permutation on `n` rows.
    pub fn identity(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
            swaps: 0,
        }
    }

    /// Number of rows permuted.
    #[inline]
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// Exchange rows `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            self.perm.swap(a, b);
            self.swaps += 1;
        }
    }

    /// The underlying index array.
    pub fn as_slice(&self) -> &[usize] {
        &self.perm
    }

    /// `+1` for an even number of transpositions, `-1` for odd.
    pub fn sign(&self) -> i8 {
        if self.swaps % 2 == 0 {
            1
        } else {
            -1
        }
    }

    /// `Pᵀ·b`: entry `i` of the result is `b[perm[i]]`.
    pub fn apply_transpose<T: Scalar>(&self, b: &DynVector<T>) -> DynVector<T> {
        assert_eq!(b.len(), self.len(), "permutation length mismatch");
        DynVector::from_vec(self.perm.iter().map(|&src| b[src]).collect())
    }

    /// `P·b`: entry `perm[i]` of the result is `b[i]`.
    pub fn apply<T: Scalar>(&self, b: &DynVector<T>) -> DynVector<T> {
        assert_eq!(b.len(), self.len(), "permutation length mismatch");
        let mut out = vec![T::zero(); self.len()];
        for (i, &dst) in self.perm.iter().enumerate() {
            out[dst] = b[i];
        }
        DynVector::from_vec(out)
    }

    /// `P·M`: row `perm[i]` of the result is row `i` of `m`.
    pub fn apply_rows<T: Scalar>(&self, m: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(m.nrows(), self.len(), "permutation length mismatch");
        let mut out = DynMatrix::zeros(m.nrows(), m.ncols(), T::zero());
        for (i, &dst) in self.perm.iter().enumerate() {
            out.row_slice_mut(dst).copy_from_slice(m.row_slice(i));
        }
        out
    }

    /// Dense 0/1 matrix `P` with `P[perm[i], i] = 1`.
    ///
    /// ```
    /// use bandsolve::linalg::Permutation;
    ///
    /// let mut p = Permutation::identity(2);
    /// p.swap(0, 1);
    /// let m = p.to_matrix(0.0_f64);
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 1.0, 0.0]);
    /// ```
    pub fn to_matrix<T: Scalar>(&self, _zero: T) -> DynMatrix<T> {
        let n = self.len();
        let mut m = DynMatrix::zeros(n, n, T::zero());
        for (i, &src) in self.perm.iter().enumerate() {
            m[(src, i)] = T::one();
        }
        m
    }
}
