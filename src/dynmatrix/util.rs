use std::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 1)], 2.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Swap the entries of rows `a` and `b` restricted to the column range `cols`.
    ///
    /// Pivoted elimination only exchanges the part of a row that has not
    /// been eliminated yet (or, for `L`, only the computed multipliers).
    pub fn swap_row_range(&mut self, a: usize, b: usize, cols: std::ops::Range<usize>) {
        if a == b {
            return;
        }
        let n = self.ncols;
        for j in cols {
            self.data.swap(a * n + j, b * n + j);
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Extract column `j` as a `DynVector`.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let c = m.col(1);
    /// assert_eq!(c[0], 2.0);
    /// assert_eq!(c[1], 4.0);
    /// ```
    pub fn col(&self, j: usize) -> DynVector<T> {
        let data = (0..self.nrows).map(|i| self[(i, j)]).collect();
        DynVector::from_vec(data)
    }

    /// Copy of the upper triangle (including the diagonal); zeros below.
    ///
    /// Works for rectangular matrices, giving an upper-trapezoidal result.
    pub fn upper_triangle(&self) -> Self {
        DynMatrix::from_fn(self.nrows, self.ncols, |i, j| {
            if j >= i {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Smallest `d` such that every nonzero entry satisfies `i - j <= d`.
    ///
    /// ```
    /// use bandsolve::DynMatrix;
    /// let m = DynMatrix::from_rows(3, 3, &[1.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 3.0, 1.0]);
    /// assert_eq!(m.lower_bandwidth(), 1);
    /// assert_eq!(m.upper_bandwidth(), 0);
    /// ```
    pub fn lower_bandwidth(&self) -> usize {
        let mut d = 0;
        for i in 0..self.nrows {
            for (j, &x) in self.row_slice(i).iter().enumerate().take(i) {
                if x != T::zero() {
                    d = d.max(i - j);
                    break;
                }
            }
        }
        d
    }

    /// Smallest `d` such that every nonzero entry satisfies `j - i <= d`.
    pub fn upper_bandwidth(&self) -> usize {
        let mut d = 0;
        for i in 0..self.nrows {
            let row = self.row_slice(i);
            for j in ((i + 1)..self.ncols).rev() {
                if row[j] != T::zero() {
                    d = d.max(j - i);
                    break;
                }
            }
        }
        d
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Measure column widths
        let mut widths: Vec<usize> = vec![0; n];
        for j in 0..n {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
