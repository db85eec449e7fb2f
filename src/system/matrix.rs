//! Square complex coefficient matrix.

use num_complex::Complex64;

use crate::error::{KirchhoffError, Result};

/// Square matrix of complex coefficients (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix {
    /// Matrix entries, row-major
    data: Vec<Complex64>,
    /// Side length
    size: usize,
}

impl ComplexMatrix {
    /// Create a zero matrix of the given size.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![Complex64::new(0.0, 0.0); size * size],
            size,
        }
    }

    /// Create the identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size);
        for i in 0..size {
            matrix.set(i, i, Complex64::new(1.0, 0.0));
        }
        matrix
    }

    /// Build a matrix from rows, which must all be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(KirchhoffError::dimension_mismatch(
                    format!("row {} of the coefficient matrix", i + 1),
                    size,
                    row.len(),
                ));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Build a matrix from real entries.
    pub fn from_real_rows(rows: &[Vec<f64>]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Complex64::new(v, 0.0)).collect())
                .collect(),
        )
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) {
        self.data[row * self.size + col] = value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        // chunks_exact(0) panics; an empty matrix has no rows anyway
        self.data.chunks_exact(self.size.max(1))
    }

    pub(crate) fn as_slice(&self) -> &[Complex64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = ComplexMatrix::identity(3);
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(1, 1), Complex64::new(1.0, 0.0));
        assert_eq!(m.get(0, 2), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![
            vec![Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)],
            vec![Complex64::new(3.0, 0.0)],
        ];
        let err = ComplexMatrix::from_rows(rows).unwrap_err();
        assert!(matches!(
            err,
            KirchhoffError::DimensionMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn test_rows_iteration() {
        let m = ComplexMatrix::from_real_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let rows: Vec<&[Complex64]> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Complex64::new(3.0, 0.0));
        assert_eq!(m.row(0)[1], Complex64::new(2.0, 0.0));
        assert_eq!(ComplexMatrix::zeros(0).rows().count(), 0);
    }
}
