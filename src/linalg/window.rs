use std::ops::Range;

use crate::traits::MatrixRef;

/// A rectangular index window into a borrowed matrix, optionally transposed.
///
/// Banded LU solves against `U[km:k, km:k]ᵀ` and `L[km:k+1, km:k+1]` at every
/// step. A `Window` addresses those blocks in place, so no submatrix is ever
/// copied.
///
/// ```
/// use bandsolve::DynMatrix;
/// use bandsolve::linalg::Window;
/// use bandsolve::MatrixRef;
///
/// let m = DynMatrix::from_fn(4, 4, |i, j| (i * 4 + j) as f64);
/// let w = Window::new(&m, 1..3, 2..4);
/// assert_eq!((w.nrows(), w.ncols()), (2, 2));
/// assert_eq!(*w.get(0, 0), 6.0);
/// let t = w.transposed();
/// assert_eq!(*t.get(1, 0), 7.0);
/// ```
#[derive(Debug)]
pub struct Window<'a, M: ?Sized> {
    mat: &'a M,
    rows: Range<usize>,
    cols: Range<usize>,
    transposed: bool,
}

impl<M: ?Sized> Clone for Window<'_, M> {
    fn clone(&self) -> Self {
        Self {
            mat: self.mat,
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            transposed: self.transposed,
        }
    }
}

impl<'a, M: ?Sized> Window<'a, M> {
    /// Window over `rows x cols` of `mat`.
    ///
    /// Panics if the ranges are reversed or fall outside the matrix.
    pub fn new<T>(mat: &'a M, rows: Range<usize>, cols: Range<usize>) -> Self
    where
        M: MatrixRef<T>,
    {
        assert!(
            rows.start <= rows.end && rows.end <= mat.nrows(),
            "row range {:?} out of bounds for {} rows",
            rows,
            mat.nrows(),
        );
        assert!(
            cols.start <= cols.end && cols.end <= mat.ncols(),
            "column range {:?} out of bounds for {} columns",
            cols,
            mat.ncols(),
        );
        Self {
            mat,
            rows,
            cols,
            transposed: false,
        }
    }

    /// Square window `range x range`.
    pub fn square<T>(mat: &'a M, range: Range<usize>) -> Self
    where
        M: MatrixRef<T>,
    {
        Self::new(mat, range.clone(), range)
    }

    /// The same block viewed as its (unconjugated) transpose.
    pub fn transposed(&self) -> Self {
        Self {
            transposed: !self.transposed,
            ..self.clone()
        }
    }
}

impl<T, M: MatrixRef<T> + ?Sized> MatrixRef<T> for Window<'_, M> {
    #[inline]
    fn nrows(&self) -> usize {
        if self.transposed {
            self.cols.len()
        } else {
            self.rows.len()
        }
    }

    #[inline]
    fn ncols(&self) -> usize {
        if self.transposed {
            self.rows.len()
        } else {
            self.cols.len()
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < MatrixRef::<T>::nrows(self) && col < MatrixRef::<T>::ncols(self));
        if self.transposed {
            self.mat.get(self.rows.start + col, self.cols.start + row)
        } else {
            self.mat.get(self.rows.start + row, self.cols.start + col)
        }
    }
}
