//! LU decomposition with partial pivoting over the complex field.

use num_complex::Complex64;
use tracing::{debug, trace};

use crate::error::{KirchhoffError, Result};
use crate::system::ComplexMatrix;

/// LU factors of a square complex matrix, `P·A = L·U`.
///
/// `L` (unit diagonal) and `U` share one row-major buffer; `pivots[i]` is the
/// original row that ended up at row `i`.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    lu: Vec<Complex64>,
    pivots: Vec<usize>,
    size: usize,
}

impl LuDecomposition {
    /// Factor `matrix`, failing when a column has no pivot with modulus of at
    /// least `tolerance`. The matrix itself is left untouched.
    pub fn new(matrix: &ComplexMatrix, tolerance: f64) -> Result<Self> {
        let n = matrix.size();
        let mut lu = matrix.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();

        for k in 0..n {
            // Find pivot
            let mut max_val = lu[k * n + k].norm();
            let mut max_row = k;

            for i in (k + 1)..n {
                let val = lu[i * n + k].norm();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < tolerance {
                debug!(column = k + 1, pivot = max_val, "no usable pivot");
                return Err(KirchhoffError::SingularMatrix { column: k + 1 });
            }

            // Swap rows if needed
            if max_row != k {
                trace!(from = max_row, to = k, "pivot row swap");
                pivots.swap(k, max_row);
                for j in 0..n {
                    lu.swap(k * n + j, max_row * n + j);
                }
            }

            // Eliminate
            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                for j in (k + 1)..n {
                    let upper = lu[k * n + j];
                    lu[i * n + j] -= factor * upper;
                }
            }
        }

        Ok(Self {
            lu,
            pivots,
            size: n,
        })
    }

    /// Side length of the factored matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Solve `A·x = b` using the factors.
    pub fn solve(&self, b: &[Complex64]) -> Result<Vec<Complex64>> {
        let n = self.size;
        if b.len() != n {
            return Err(KirchhoffError::dimension_mismatch("the source vector", n, b.len()));
        }

        // Apply pivot permutation to b
        let mut x: Vec<Complex64> = self.pivots.iter().map(|&p| b[p]).collect();

        // Forward substitution (L * y = Pb)
        for i in 0..n {
            for j in 0..i {
                let known = x[j];
                x[i] -= self.lu[i * n + j] * known;
            }
        }

        // Back substitution (U * x = y)
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let known = x[j];
                x[i] -= self.lu[i * n + j] * known;
            }
            x[i] /= self.lu[i * n + i];
        }

        if let Some(i) = x.iter().position(|v| !v.re.is_finite() || !v.im.is_finite()) {
            return Err(KirchhoffError::NumericalOverflow { variable: i + 1 });
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_factor_leaves_matrix_untouched() {
        let m = ComplexMatrix::from_real_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let before = m.clone();
        let lu = LuDecomposition::new(&m, 1e-10).unwrap();
        assert_eq!(m, before);
        assert_eq!(lu.size(), 2);
    }

    #[test]
    fn test_zero_leading_entry_needs_pivot() {
        // Without row exchange the first pivot would be zero
        let m = ComplexMatrix::from_real_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let lu = LuDecomposition::new(&m, 1e-10).unwrap();
        let x = lu
            .solve(&[Complex64::new(4.0, 0.0), Complex64::new(14.0, 0.0)])
            .unwrap();
        assert_abs_diff_eq!(x[0].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1].re, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reuse_factors() {
        let m = ComplexMatrix::from_real_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]]).unwrap();
        let lu = LuDecomposition::new(&m, 1e-10).unwrap();
        let x1 = lu.solve(&[Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)]).unwrap();
        let x2 = lu.solve(&[Complex64::new(0.0, 5.0), Complex64::new(0.0, 0.0)]).unwrap();
        assert_abs_diff_eq!(x1[0].re, 1.0 / 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x1[1].re, 7.0 / 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x2[0].im, 15.0 / 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x2[1].im, -5.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrong_vector_length() {
        let lu = LuDecomposition::new(&ComplexMatrix::identity(2), 1e-10).unwrap();
        assert!(matches!(
            lu.solve(&[Complex64::new(1.0, 0.0)]),
            Err(KirchhoffError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }
}
