//! Elementwise, scalar and matrix-product arithmetic.

use std::ops::Mul;

use super::Matrix;
use crate::error::{NodalError, Result};
use crate::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Elementwise sum. Both operands must have the same shape.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Matrix addition", |a, b| a + b)
    }

    /// Elementwise difference. Both operands must have the same shape.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Matrix subtraction", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product. Both operands must have the same shape.
    pub fn elementwise_mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Elementwise product", |a, b| a * b)
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: T) -> Self {
        self.map(|v| v * k)
    }

    /// Multiply every element by a bare real number.
    pub fn scale_by_real(&self, k: f64) -> Self
    where
        T: Mul<f64, Output = T>,
    {
        self.map(|v| v * k)
    }

    /// Divide every element by `k`. Division by zero is not checked.
    pub fn divide(&self, k: T) -> Self {
        self.map(|v| v / k)
    }

    /// Elementwise `1 / x`. Zero elements are not checked.
    pub fn reciprocal(&self) -> Self {
        self.map(|v| T::one() / v)
    }

    /// Standard matrix product `(m x p) * (p x n) -> (m x n)`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(NodalError::dimension_mismatch(
                "Matrix product",
                self.dimensions(),
                other.dimensions(),
            ));
        }

        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.at(i, k) * other.at(k, j);
                }
                data.push(sum);
            }
        }
        Ok(Matrix::from_raw(self.rows, other.cols, data))
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        let data = self.data.iter().map(|&v| f(v)).collect();
        Matrix::from_raw(self.rows, self.cols, data)
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(NodalError::dimension_mismatch(
                operation,
                self.dimensions(),
                other.dimensions(),
            ));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_raw(self.rows, self.cols, data))
    }
}
