//! Dense generic matrix engine.
//!
//! [`Matrix`] stores elements of any [`Scalar`] type in a single row-major
//! buffer (`index = row * cols + col`). The same engine serves the real
//! valued DC conductance matrix and the polar phasor AC admittance matrix.
//!
//! ## Determinant and inverse
//!
//! The determinant is computed by recursive cofactor expansion, which only
//! needs `+ - * /` and exact equality from the element type. Complex numbers
//! have no ordering, so pivot selection for Gaussian elimination is not
//! available generically. Cofactor expansion costs O(n!), so the engine is
//! meant for small networks (tens of nodes at most).
//!
//! The inverse is `adjoint / determinant`.

mod cofactor;
mod ops;

use std::fmt;

use crate::error::{NodalError, Result};
use crate::scalar::Scalar;

/// A fixed-shape two dimensional array of scalars.
///
/// The shape is set at construction and never changes. Cloning performs a
/// deep copy of the backing storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Create a `rows` x `cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(NodalError::invalid_dimension(format!(
                "cols/rows of a matrix must be above 0, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self::from_raw(rows, cols, vec![T::zero(); rows * cols]))
    }

    /// Create a matrix from literal rows.
    ///
    /// Every row must be non-empty and all rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        if row_count == 0 || col_count == 0 {
            return Err(NodalError::invalid_dimension(
                "cols/rows of a matrix must be above 0",
            ));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != col_count) {
            return Err(NodalError::invalid_dimension(format!(
                "columns must all be of the same length, row {} has {} elements but row 0 has {}",
                bad,
                rows[bad].len(),
                col_count
            )));
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Self::from_raw(row_count, col_count, data))
    }

    /// Create an `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut id = Self::new(n, n)?;
        for i in 0..n {
            id.data[i * n + i] = T::one();
        }
        Ok(id)
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.index(row, col)?;
        Ok(self.data[idx])
    }

    /// Set the element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Unchecked element read for internal loops that already respect the shape.
    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(NodalError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.at(i, j));
            }
        }
        Self::from_raw(self.cols, self.rows, data)
    }

    /// New `(rows-1)` x `(cols-1)` matrix with `row` and `col` removed.
    ///
    /// Fails with [`NodalError::InvalidDimension`] on a matrix that has a
    /// single row or column, and with [`NodalError::OutOfBounds`] if the
    /// excluded coordinate lies outside the matrix.
    pub fn sub_matrix(&self, row: usize, col: usize) -> Result<Self> {
        if self.rows < 2 || self.cols < 2 {
            return Err(NodalError::invalid_dimension(format!(
                "cannot remove a row and column from a {}x{} matrix",
                self.rows, self.cols
            )));
        }
        self.index(row, col)?;

        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.at(i, j));
            }
        }
        Ok(Self::from_raw(self.rows - 1, self.cols - 1, data))
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    /// Rows top to bottom, one per line, elements joined by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
