//! Dense complex linear solver.
//!
//! Solves `A·x = b` for the small square systems produced by mesh analysis
//! by Gaussian elimination with partial pivoting:
//!
//! 1. Factor `P·A = L·U`, choosing in each column the remaining row whose
//!    entry has the largest modulus
//! 2. Forward-substitute `L·y = P·b`
//! 3. Back-substitute `U·x = y`
//!
//! A column whose best pivot is smaller than the tolerance means the system
//! has no unique solution, and solving stops with
//! [`KirchhoffError::SingularMatrix`](crate::KirchhoffError::SingularMatrix)
//! instead of dividing by it.

mod lu;

pub use lu::LuDecomposition;

use num_complex::Complex64;

use crate::error::Result;
use crate::system::ComplexMatrix;

/// Pivot modulus below which a column is treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solve `A·x = b` with the default pivot tolerance.
pub fn solve(a: &ComplexMatrix, b: &[Complex64]) -> Result<Vec<Complex64>> {
    solve_with_tolerance(a, b, PIVOT_TOLERANCE)
}

/// Solve `A·x = b`, treating pivots smaller than `tolerance` as zero.
pub fn solve_with_tolerance(
    a: &ComplexMatrix,
    b: &[Complex64],
    tolerance: f64,
) -> Result<Vec<Complex64>> {
    LuDecomposition::new(a, tolerance)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KirchhoffError;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_identity_solve_is_exact() {
        for n in 1..=4 {
            let b: Vec<Complex64> = (0..n).map(|i| c(i as f64 + 0.5, -(i as f64) * 2.0)).collect();
            let x = solve(&ComplexMatrix::identity(n), &b).unwrap();
            assert_eq!(x, b);
        }
    }

    #[test]
    fn test_singular_matrix() {
        let a = ComplexMatrix::from_real_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let result = solve(&a, &[c(2.0, 0.0), c(2.0, 0.0)]);
        assert!(matches!(result, Err(KirchhoffError::SingularMatrix { column: 2 })));
    }

    #[test]
    fn test_near_singular_below_tolerance() {
        let a = ComplexMatrix::from_rows(vec![vec![c(1e-12, 1e-12)]]).unwrap();
        assert!(matches!(
            solve(&a, &[c(1.0, 0.0)]),
            Err(KirchhoffError::SingularMatrix { column: 1 })
        ));
        // A looser caller-supplied tolerance accepts it
        assert!(solve_with_tolerance(&a, &[c(1.0, 0.0)], 1e-14).is_ok());
    }

    #[test]
    fn test_real_three_by_three() {
        // 2 I1 - I2 + I3 = 5, I1 + I3 = 6, 3 I1 + 2 I2 + 4 I3 = 10
        let a = ComplexMatrix::from_real_rows(&[
            vec![2.0, -1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![3.0, 2.0, 4.0],
        ])
        .unwrap();
        let b = [c(5.0, 0.0), c(6.0, 0.0), c(10.0, 0.0)];
        let x = solve(&a, &b).unwrap();

        assert_abs_diff_eq!(x[0].re, -16.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x[1].re, -15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x[2].re, 22.0, epsilon = 1e-9);
        for v in &x {
            assert_abs_diff_eq!(v.im, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_complex_two_mesh() {
        // (10 - 5j) I1 + 5j I2 = 12, 5j I1 + (8 - 3j) I2 = 0
        let a = ComplexMatrix::from_rows(vec![
            vec![c(10.0, -5.0), c(0.0, 5.0)],
            vec![c(0.0, 5.0), c(8.0, -3.0)],
        ])
        .unwrap();
        let b = [c(12.0, 0.0), c(0.0, 0.0)];
        let x = solve(&a, &b).unwrap();

        // Residual check
        for i in 0..2 {
            let lhs = a.get(i, 0) * x[0] + a.get(i, 1) * x[1];
            assert_abs_diff_eq!(lhs.re, b[i].re, epsilon = 1e-10);
            assert_abs_diff_eq!(lhs.im, b[i].im, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = ComplexMatrix::identity(2);
        let result = solve(&a, &[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert!(matches!(result, Err(KirchhoffError::DimensionMismatch { .. })));
    }
}
