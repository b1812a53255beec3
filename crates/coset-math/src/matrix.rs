use crate::Field;
use coset_core::{CosetError, CosetResult, Shape};
use zeroize::Zeroize;

use alloc::vec::Vec;

/// Fixed-shape `rows x cols` matrix, stored row-major.
///
/// The shape never changes after construction. `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    pub fn shape(&self) -> Shape { (self.rows, self.cols) }

    pub fn row(&self, r: usize) -> CosetResult<&[T]> {
        if r >= self.rows {
            return Err(CosetError::IndexOutOfRange { index: r, len: self.rows });
        }
        Ok(&self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn row_mut(&mut self, r: usize) -> CosetResult<&mut [T]> {
        if r >= self.rows {
            return Err(CosetError::IndexOutOfRange { index: r, len: self.rows });
        }
        Ok(&mut self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Rows in order. Works for zero-width matrices too.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }
}

/// Wipes the entries and leaves an empty 0 x 0 matrix.
impl<T: Zeroize> Zeroize for Matrix<T> {
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.rows.zeroize();
        self.cols.zeroize();
    }
}

impl<T: Copy> Matrix<T> {
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        if r >= self.rows || c >= self.cols { return None; }
        Some(self.data[r * self.cols + c])
    }

    pub fn set(&mut self, r: usize, c: usize, val: T) -> CosetResult<()> {
        if c >= self.cols {
            return Err(CosetError::IndexOutOfRange { index: c, len: self.cols });
        }
        self.row_mut(r)?[c] = val;
        Ok(())
    }
}

impl<T: Field> Matrix<T> {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: alloc::vec![T::ZERO; rows * cols],
        }
    }

    /// Builds from an explicit grid. Every row must have the same length.
    pub fn from_rows(grid: Vec<Vec<T>>) -> CosetResult<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            if row.len() != cols {
                return Err(CosetError::ShapeMismatch { left: (1, cols), right: (1, row.len()) });
            }
            data.extend(row);
        }
        Ok(Self { rows, cols, data })
    }

    /// 1 x n matrix holding `values`.
    pub fn row_vector(values: &[T]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    /// `n x n` with `T::ONE` on the diagonal.
    pub fn identity(n: usize) -> Self {
        let mut res = Self::new(n, n);
        for i in 0..n {
            res.data[i * n + i] = T::ONE;
        }
        res
    }

    /// Element-wise sum. Shapes must match exactly.
    pub fn add(&self, rhs: &Self) -> CosetResult<Self> {
        if self.shape() != rhs.shape() {
            return Err(CosetError::ShapeMismatch { left: self.shape(), right: rhs.shape() });
        }
        let data = self.data.iter().zip(&rhs.data).map(|(&a, &b)| a + b).collect();
        Ok(Self { rows: self.rows, cols: self.cols, data })
    }

    /// Matrix product `self * rhs`. Requires `self.cols == rhs.rows`.
    pub fn mul(&self, rhs: &Self) -> CosetResult<Self> {
        if self.cols != rhs.rows {
            return Err(CosetError::ShapeMismatch { left: self.shape(), right: rhs.shape() });
        }
        let mut res = Self::new(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = T::ZERO;
                for k in 0..self.cols {
                    acc = acc + self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                res.data[i * rhs.cols + j] = acc;
            }
        }
        Ok(res)
    }

    /// Multiplies every entry by `k`.
    pub fn scale(&self, k: T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| k * v).collect(),
        }
    }
}

/// One `[v0 v1 ... vn]` line per row, no trailing newline.
impl<T: core::fmt::Display> core::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
