//! Determinant, adjoint and inverse by cofactor expansion.

use super::Matrix;
use crate::error::{NodalError, Result};
use crate::scalar::Scalar;

impl<T: Scalar> Matrix<T> {
    /// Determinant of the sub-matrix with row `i` and column `j` removed.
    pub fn minor(&self, i: usize, j: usize) -> Result<T> {
        self.sub_matrix(i, j)?.determinant()
    }

    /// `minor(i, j) * (-1)^(i + j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T> {
        let minor = self.minor(i, j)?;
        Ok(if (i + j) % 2 == 0 { minor } else { -minor })
    }

    /// Determinant by recursive cofactor expansion.
    ///
    /// Expands along the row with the most zero entries and skips zero
    /// terms entirely. 1x1 and 2x2 matrices are evaluated directly.
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(NodalError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        match self.rows {
            1 => return Ok(self.at(0, 0)),
            2 => return Ok(self.at(0, 0) * self.at(1, 1) - self.at(1, 0) * self.at(0, 1)),
            _ => {}
        }

        let row = self.sparsest_row();
        let mut det = T::zero();
        for col in 0..self.cols {
            let value = self.at(row, col);
            if value.is_zero() {
                continue;
            }
            det = det + value * self.cofactor(row, col)?;
        }
        Ok(det)
    }

    /// Matrix of cofactors, transposed.
    pub fn adjoint(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(NodalError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        // The only minor of a 1x1 matrix is empty, with determinant 1.
        if self.rows == 1 {
            return Matrix::identity(1);
        }

        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.rows {
            for j in 0..self.cols {
                data.push(self.cofactor(i, j)?);
            }
        }
        Ok(Matrix::from_raw(self.rows, self.cols, data).transpose())
    }

    /// `adjoint / determinant`.
    ///
    /// Fails with [`NodalError::SingularMatrix`] when the determinant is
    /// exactly zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(NodalError::SingularMatrix);
        }
        Ok(self.adjoint()?.divide(det))
    }

    /// Index of the row with the most zero entries, lowest index on ties.
    fn sparsest_row(&self) -> usize {
        let mut best_row = 0;
        let mut best_count = 0;
        for i in 0..self.rows {
            let zeros = (0..self.cols).filter(|&j| self.at(i, j).is_zero()).count();
            if zeros > best_count {
                best_count = zeros;
                best_row = i;
            }
        }
        best_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Cartesian, Polar};
    use approx::assert_abs_diff_eq;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    fn assert_near_identity(product: &Matrix<f64>) {
        let n = product.rows();
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product.get(i, j).unwrap(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_determinant_base_cases() {
        assert_eq!(m(vec![vec![-4.5]]).determinant().unwrap(), -4.5);

        for (a, b, c, d) in [(1.0, 2.0, 3.0, 4.0), (0.1, -0.3, 7.25, 1e3), (2.0, 4.0, 1.0, 2.0)] {
            let det = m(vec![vec![a, b], vec![c, d]]).determinant().unwrap();
            assert_eq!(det, a * d - b * c);
        }
    }

    #[test]
    fn test_determinant_requires_square() {
        assert!(matches!(
            m(vec![vec![1.0, 2.0, 3.0]]).determinant(),
            Err(NodalError::NotSquare { rows: 1, cols: 3 })
        ));
        assert!(matches!(
            m(vec![vec![1.0, 2.0]]).inverse(),
            Err(NodalError::NotSquare { .. })
        ));
        assert!(matches!(
            m(vec![vec![1.0, 2.0]]).adjoint(),
            Err(NodalError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_determinant_3x3_and_4x4() {
        let a = m(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ]);
        assert_eq!(a.determinant().unwrap(), 49.0);

        let b = m(vec![
            vec![1.0, 0.0, 2.0, -1.0],
            vec![3.0, 0.0, 0.0, 5.0],
            vec![2.0, 1.0, 4.0, -3.0],
            vec![1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(b.determinant().unwrap(), 30.0);
    }

    #[test]
    fn test_determinant_expands_along_sparsest_row() {
        // Row 2 has two zeros and is chosen; a zero row gives a zero determinant.
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![0.0, 0.0, 0.0],
        ]);
        assert_eq!(a.sparsest_row(), 2);
        assert_eq!(a.determinant().unwrap(), 0.0);

        let no_zeros = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 10.0],
        ]);
        assert_eq!(no_zeros.sparsest_row(), 0);
        assert_eq!(no_zeros.determinant().unwrap(), -3.0);
    }

    #[test]
    fn test_minor_and_cofactor() {
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 4.0, 5.0],
            vec![1.0, 0.0, 6.0],
        ]);
        assert_eq!(a.minor(0, 1).unwrap(), -5.0);
        assert_eq!(a.cofactor(0, 1).unwrap(), 5.0);
        assert_eq!(a.cofactor(1, 1).unwrap(), 3.0);
    }

    #[test]
    fn test_adjoint() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.adjoint().unwrap(), m(vec![vec![4.0, -2.0], vec![-3.0, 1.0]]));

        assert_eq!(m(vec![vec![7.0]]).adjoint().unwrap(), m(vec![vec![1.0]]));
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        let a = m(vec![
            vec![4.0, -2.0, 1.0],
            vec![-2.0, 4.0, -2.0],
            vec![1.0, -2.0, 4.0],
        ]);
        let product = a.matmul(&a.inverse().unwrap()).unwrap();
        assert_near_identity(&product);

        let b = m(vec![
            vec![0.2, -0.1, 0.0, 0.0],
            vec![-0.1, 0.3, -0.2, 0.0],
            vec![0.0, -0.2, 0.5, -0.3],
            vec![0.0, 0.0, -0.3, 0.4],
        ]);
        assert_near_identity(&b.matmul(&b.inverse().unwrap()).unwrap());
    }

    #[test]
    fn test_inverse_of_single_element() {
        let inv = m(vec![vec![0.1]]).inverse().unwrap();
        assert_abs_diff_eq!(inv.get(0, 0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert!(matches!(a.inverse(), Err(NodalError::SingularMatrix)));
    }

    #[test]
    fn test_complex_inverse() {
        let a = Matrix::from_rows(vec![
            vec![Cartesian::new(1.0, 1.0), Cartesian::new(0.0, -1.0), Cartesian::new(0.0, 0.0)],
            vec![Cartesian::new(0.0, -1.0), Cartesian::new(2.0, 0.5), Cartesian::new(-1.0, 0.0)],
            vec![Cartesian::new(0.0, 0.0), Cartesian::new(-1.0, 0.0), Cartesian::new(1.0, -2.0)],
        ])
        .unwrap();

        let product = a.matmul(&a.inverse().unwrap()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let v = product.get(i, j).unwrap();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(v.real(), expected, epsilon = 1e-12);
                assert_abs_diff_eq!(v.imaginary(), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_polar_inverse() {
        let a = Matrix::from_rows(vec![
            vec![Polar::new(2.0, 0.3), Polar::new(1.0, -1.2)],
            vec![Polar::new(0.5, 2.0), Polar::new(3.0, 0.0)],
        ])
        .unwrap();

        let product = a.matmul(&a.inverse().unwrap()).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let v = product.get(i, j).unwrap();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(v.real(), expected, epsilon = 1e-12);
                assert_abs_diff_eq!(v.imaginary(), 0.0, epsilon = 1e-12);
            }
        }
    }
}
