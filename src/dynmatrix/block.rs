use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Extract a sub-matrix of size `rows x cols` starting at `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.block(1, 1, 2, 2);
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Self {
        assert!(
            i + rows <= self.nrows && j + cols <= self.ncols,
            "block ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i, j, rows, cols, self.nrows, self.ncols,
        );
        DynMatrix::from_fn(rows, cols, |r, c| self[(i + r, j + c)])
    }

    /// Write a sub-matrix into self starting at position `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    pub fn set_block(&mut self, i: usize, j: usize, src: &DynMatrix<T>) {
        assert!(
            i + src.nrows <= self.nrows && j + src.ncols <= self.ncols,
            "set_block ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i, j, src.nrows, src.ncols, self.nrows, self.ncols,
        );
        for r in 0..src.nrows {
            let dst_start = (i + r) * self.ncols + j;
            self.data[dst_start..dst_start + src.ncols].copy_from_slice(src.row_slice(r));
        }
    }

    /// Horizontal concatenation `[self | rhs]`.
    ///
    /// Panics if the row counts differ.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let a = DynMatrix::eye(2, 0.0_f64);
    /// let b = DynMatrix::from_rows(2, 1, &[5.0, 6.0]);
    /// let ab = a.hstack(&b);
    /// assert_eq!(ab.row_slice(1), &[0.0, 1.0, 6.0]);
    /// ```
    pub fn hstack(&self, rhs: &DynMatrix<T>) -> Self {
        assert_eq!(
            self.nrows, rhs.nrows,
            "hstack row mismatch: {}x{} | {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = DynMatrix::zeros(self.nrows, self.ncols + rhs.ncols, T::zero());
        out.set_block(0, 0, self);
        out.set_block(0, self.ncols, rhs);
        out
    }

    /// Extract the first `n` columns.
    pub fn left_cols(&self, n: usize) -> Self {
        self.block(0, 0, self.nrows, n)
    }

    /// Extract the last `n` columns.
    pub fn right_cols(&self, n: usize) -> Self {
        self.block(0, self.ncols - n, self.nrows, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat4x5() -> DynMatrix<i32> {
        DynMatrix::from_fn(4, 5, |i, j| (i * 5 + j) as i32)
    }

    #[test]
    fn block_extract() {
        let m = mat4x5();
        let b = m.block(1, 2, 2, 3);
        assert_eq!(b.row_slice(0), &[7, 8, 9]);
        assert_eq!(b.row_slice(1), &[12, 13, 14]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn block_out_of_bounds() {
        let _ = mat4x5().block(3, 3, 2, 2);
    }

    #[test]
    fn set_block_roundtrip() {
        let m = mat4x5();
        let mut z = DynMatrix::zeros(4, 5, 0);
        z.set_block(1, 1, &m.block(1, 1, 3, 4));
        assert_eq!(z.block(1, 1, 3, 4), m.block(1, 1, 3, 4));
        assert_eq!(z[(0, 0)], 0);
    }

    #[test]
    fn hstack_and_split() {
        let m = mat4x5();
        let left = m.left_cols(2);
        let right = m.right_cols(3);
        assert_eq!(left.hstack(&right), m);
    }
}
