//! Fixed-precision rendering of complex values.
//!
//! Every number is printed in fixed-point notation with exactly the
//! configured number of fractional digits. Components smaller than
//! [`ZERO_THRESHOLD`](crate::ZERO_THRESHOLD) are treated as absent, so a
//! value is shown in one of three shapes:
//!
//! | Form | Example (precision 3) |
//! |------|-----------------------|
//! | real only | `2.500` |
//! | imaginary only | `-4.000j` |
//! | mixed | `3.000 - 4.000j` |

mod precision;

pub use precision::Precision;

use num_complex::Complex64;

use crate::literal::MARKER;
use crate::ZERO_THRESHOLD;

/// Render a real number with exactly `precision` fractional digits.
///
/// A value that rounds to zero is printed without a minus sign.
pub fn fixed(value: f64, precision: Precision) -> String {
    let text = format!("{:.*}", precision.digits(), value);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// How a complex value is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoefficientForm {
    /// Imaginary part below the zero threshold
    RealOnly(f64),
    /// Real part below the zero threshold
    ImaginaryOnly(f64),
    /// Both parts significant
    Mixed { re: f64, im: f64 },
}

impl CoefficientForm {
    /// Classify a value. The imaginary part is checked first, so zero is
    /// real-only.
    pub fn classify(z: Complex64) -> Self {
        if z.im.abs() < ZERO_THRESHOLD {
            Self::RealOnly(z.re)
        } else if z.re.abs() < ZERO_THRESHOLD {
            Self::ImaginaryOnly(z.im)
        } else {
            Self::Mixed { re: z.re, im: z.im }
        }
    }

    /// `re`, `imj` or `re ± |im|j`.
    pub fn render(&self, precision: Precision) -> String {
        match *self {
            Self::RealOnly(re) => fixed(re, precision),
            Self::ImaginaryOnly(im) => format!("{}{MARKER}", fixed(im, precision)),
            Self::Mixed { re, im } => {
                let sign = if im < 0.0 { '-' } else { '+' };
                format!(
                    "{} {sign} {}{MARKER}",
                    fixed(re, precision),
                    fixed(im.abs(), precision)
                )
            }
        }
    }

    /// Like [`render`](Self::render), with mixed values wrapped in
    /// parentheses so they can be multiplied by a variable.
    pub fn render_grouped(&self, precision: Precision) -> String {
        match self {
            Self::Mixed { .. } => format!("({})", self.render(precision)),
            _ => self.render(precision),
        }
    }
}

/// Rectangular text of a complex value.
pub fn format_rectangular(z: Complex64, precision: Precision) -> String {
    CoefficientForm::classify(z).render(precision)
}

/// Magnitude and phase angle of a complex value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Euclidean modulus
    pub magnitude: f64,
    /// `atan2(im, re)` in degrees, in (-180, 180]
    pub angle_degrees: f64,
}

impl Polar {
    /// Convert from rectangular form.
    pub fn from_complex(z: Complex64) -> Self {
        // -0.0 + 0.0 is +0.0, so values on the negative real axis read 180°
        let im = z.im + 0.0;
        Self {
            magnitude: z.norm(),
            angle_degrees: im.atan2(z.re).to_degrees(),
        }
    }
}

/// Magnitude and angle text of a complex value.
pub fn format_polar(z: Complex64, precision: Precision) -> (String, String) {
    let polar = Polar::from_complex(z);
    (
        fixed(polar.magnitude, precision),
        fixed(polar.angle_degrees, precision),
    )
}

/// `magnitude ∠ angle°`.
pub fn format_polar_text(z: Complex64, precision: Precision) -> String {
    let (magnitude, angle) = format_polar(z, precision);
    format!("{magnitude} ∠ {angle}°")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal;
    use approx::assert_abs_diff_eq;

    fn p(digits: u8) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_fixed_honors_precision() {
        assert_eq!(fixed(1.23456, p(2)), "1.23");
        assert_eq!(fixed(1.23456, p(0)), "1");
        assert_eq!(fixed(0.5, p(3)), "0.500");
        assert_eq!(fixed(-0.26, p(1)), "-0.3");
        assert_eq!(fixed(1e12, p(1)), "1000000000000.0");
    }

    #[test]
    fn test_fixed_drops_negative_zero() {
        assert_eq!(fixed(-0.0, p(3)), "0.000");
        assert_eq!(fixed(-0.0004, p(3)), "0.000");
        assert_eq!(fixed(-0.4, p(0)), "0");
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            CoefficientForm::classify(Complex64::new(2.0, 1e-12)),
            CoefficientForm::RealOnly(2.0)
        );
        assert_eq!(
            CoefficientForm::classify(Complex64::new(-1e-11, 3.0)),
            CoefficientForm::ImaginaryOnly(3.0)
        );
        assert_eq!(
            CoefficientForm::classify(Complex64::new(0.0, 0.0)),
            CoefficientForm::RealOnly(0.0)
        );
        assert!(matches!(
            CoefficientForm::classify(Complex64::new(1.0, -1.0)),
            CoefficientForm::Mixed { .. }
        ));
    }

    #[test]
    fn test_format_rectangular() {
        assert_eq!(format_rectangular(Complex64::new(3.0, 4.0), p(3)), "3.000 + 4.000j");
        assert_eq!(format_rectangular(Complex64::new(3.0, -4.0), p(3)), "3.000 - 4.000j");
        assert_eq!(format_rectangular(Complex64::new(5.0, 1e-11), p(2)), "5.00");
        assert_eq!(format_rectangular(Complex64::new(1e-11, -2.0), p(2)), "-2.00j");
        assert_eq!(format_rectangular(Complex64::new(0.0, 0.0), p(1)), "0.0");
    }

    #[test]
    fn test_render_grouped() {
        let mixed = CoefficientForm::classify(Complex64::new(-1.0, 2.0));
        assert_eq!(mixed.render_grouped(p(1)), "(-1.0 + 2.0j)");
        let real = CoefficientForm::classify(Complex64::new(-1.0, 0.0));
        assert_eq!(real.render_grouped(p(1)), "-1.0");
    }

    #[test]
    fn test_format_polar() {
        let (magnitude, angle) = format_polar(Complex64::new(3.0, 4.0), p(3));
        assert_eq!(magnitude, "5.000");
        assert_eq!(angle, "53.130");

        let (_, angle) = format_polar(Complex64::new(0.0, -2.0), p(1));
        assert_eq!(angle, "-90.0");

        let (_, angle) = format_polar(Complex64::new(-1.0, -0.0), p(0));
        assert_eq!(angle, "180");

        assert_eq!(format_polar_text(Complex64::new(1.0, 0.0), p(2)), "1.00 ∠ 0.00°");
    }

    #[test]
    fn test_polar_values() {
        let polar = Polar::from_complex(Complex64::new(1.0, 1.0));
        assert_abs_diff_eq!(polar.magnitude, 2f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(polar.angle_degrees, 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_through_parser() {
        let samples = [
            Complex64::new(1.23456, -9.87654),
            Complex64::new(-0.0004, 12345.6789),
            Complex64::new(-7.5, 0.0),
            Complex64::new(0.0, 0.333333),
            Complex64::new(1e-12, 1e-12),
        ];
        for z in samples {
            for digits in 0..=6 {
                let text = format_rectangular(z, p(digits));
                let back = literal::parse(&text).unwrap();
                let bound = 5.0 * 10f64.powi(-(digits as i32));
                assert!((back - z).norm() < bound, "{z} at {digits}: {text}");
            }
        }
    }
}
