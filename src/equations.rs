//! KVL equation synthesis.
//!
//! Rebuilds the text of each mesh equation from the coefficient matrix and
//! source vector, for example
//!
//! ```text
//! 2.000 Ω * I1 - 1.000 Ω * I2 + (3.000 + 4.000j) Ω * I3 = 5.000 V
//! ```
//!
//! Zero coefficients are left out. A row without any remaining term is still
//! rendered, as `= 5.000 V`.

use num_complex::Complex64;

use crate::format::{format_rectangular, CoefficientForm, Precision};
use crate::system::{ComplexMatrix, MeshIndex};
use crate::ZERO_THRESHOLD;

/// Unit written after every impedance coefficient.
pub const IMPEDANCE_UNIT: &str = "Ω";

/// Unit written after every source voltage.
pub const VOLTAGE_UNIT: &str = "V";

/// One equation line per row of `a`, with `b[i]` on the right-hand side of
/// row `i`.
pub fn synthesize(a: &ComplexMatrix, b: &[Complex64], precision: Precision) -> Vec<String> {
    a.rows()
        .zip(b)
        .map(|(row, &rhs)| synthesize_row(row, rhs, precision))
        .collect()
}

/// Render a single equation.
pub fn synthesize_row(row: &[Complex64], rhs: Complex64, precision: Precision) -> String {
    let terms: Vec<String> = row
        .iter()
        .enumerate()
        .filter(|(_, coeff)| coeff.norm() >= ZERO_THRESHOLD)
        .map(|(j, &coeff)| {
            format!(
                "{} {IMPEDANCE_UNIT} * {}",
                CoefficientForm::classify(coeff).render_grouped(precision),
                MeshIndex::from_position(j)
            )
        })
        .collect();

    let lhs = terms.join(" + ").replace("+ -", "- ");
    let rhs = format_rectangular(rhs, precision);

    if lhs.is_empty() {
        format!("= {rhs} {VOLTAGE_UNIT}")
    } else {
        format!("{lhs} = {rhs} {VOLTAGE_UNIT}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn p(digits: u8) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_zero_terms_omitted() {
        let line = synthesize_row(&[c(0.0, 0.0), c(2.0, 0.0), c(0.0, 0.0)], c(5.0, 0.0), p(3));
        assert_eq!(line, "2.000 Ω * I2 = 5.000 V");
    }

    #[test]
    fn test_negative_terms_collapse() {
        let line = synthesize_row(&[c(2.0, 0.0), c(-1.0, 0.0), c(1.0, 0.0)], c(5.0, 0.0), p(3));
        assert_eq!(line, "2.000 Ω * I1 - 1.000 Ω * I2 + 1.000 Ω * I3 = 5.000 V");
    }

    #[test]
    fn test_three_coefficient_forms() {
        let line = synthesize_row(&[c(0.0, -5.0), c(8.0, 2.0)], c(0.0, 0.0), p(1));
        assert_eq!(line, "-5.0j Ω * I1 + (8.0 + 2.0j) Ω * I2 = 0.0 V");

        let line = synthesize_row(&[c(1.0, -1.0)], c(3.0, -4.0), p(0));
        assert_eq!(line, "(1 - 1j) Ω * I1 = 3 - 4j V");
    }

    #[test]
    fn test_leading_negative_term_kept() {
        let line = synthesize_row(&[c(-3.0, 0.0), c(-4.0, 0.0)], c(-1.0, 0.0), p(0));
        assert_eq!(line, "-3 Ω * I1 - 4 Ω * I2 = -1 V");
    }

    #[test]
    fn test_empty_row_is_not_an_error() {
        let line = synthesize_row(&[c(0.0, 0.0), c(1e-12, 0.0)], c(5.0, 0.0), p(3));
        assert_eq!(line, "= 5.000 V");
    }

    #[test]
    fn test_synthesize_matrix() {
        let a = ComplexMatrix::from_real_rows(&[
            vec![2.0, -1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![3.0, 2.0, 4.0],
        ])
        .unwrap();
        let b = [c(5.0, 0.0), c(6.0, 0.0), c(10.0, 0.0)];
        let lines = synthesize(&a, &b, p(2));
        assert_eq!(
            lines,
            vec![
                "2.00 Ω * I1 - 1.00 Ω * I2 + 1.00 Ω * I3 = 5.00 V",
                "1.00 Ω * I1 + 1.00 Ω * I3 = 6.00 V",
                "3.00 Ω * I1 + 2.00 Ω * I2 + 4.00 Ω * I3 = 10.00 V",
            ]
        );
    }
}
