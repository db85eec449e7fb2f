//! Solve requests and solution reports.
//!
//! This is the single entry point hosts call: raw cell text and a precision
//! go in, and either a complete [`SolutionReport`] or exactly one
//! [`KirchhoffError`](crate::KirchhoffError) comes out.
//!
//! 1. Validate the shape (1 to 4 equations, square matrix, matching vector)
//! 2. Parse every cell, empty cells being zero
//! 3. Solve the system
//! 4. Format each mesh current and rebuild the KVL equations
//!
//! The first failing step ends the call. Nothing is kept between calls.

mod render;

use num_complex::Complex64;
use tracing::debug;

use crate::equations::synthesize;
use crate::error::Result;
use crate::format::{format_polar, format_rectangular, Polar, Precision};
use crate::literal;
use crate::solver::{self, PIVOT_TOLERANCE};
use crate::system::{validate_shape, ComplexMatrix, MeshIndex};

/// Configuration for a solve call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    /// Fractional digits in all rendered numbers.
    pub precision: Precision,
    /// Pivot modulus below which the system is reported as singular.
    pub pivot_tolerance: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            pivot_tolerance: PIVOT_TOLERANCE,
        }
    }
}

impl SolveConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the pivot tolerance.
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }
}

/// Raw cell text of a mesh system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveRequest {
    /// Coefficient matrix cells, one inner vector per equation
    pub matrix: Vec<Vec<String>>,
    /// Source vector cells
    pub vector: Vec<String>,
}

impl SolveRequest {
    /// Create a request from owned cells.
    pub fn new(matrix: Vec<Vec<String>>, vector: Vec<String>) -> Self {
        Self { matrix, vector }
    }

    /// Create a request by copying borrowed cells.
    pub fn from_cells<R, S>(matrix: &[R], vector: &[S]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self {
            matrix: matrix
                .iter()
                .map(|row| row.as_ref().iter().map(|c| c.as_ref().to_string()).collect())
                .collect(),
            vector: vector.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    /// Number of equations.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }
}

/// One solved mesh current.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableResult {
    /// Which current this is
    pub index: MeshIndex,
    /// Solved value
    pub value: Complex64,
    /// Modulus of the value
    pub magnitude: f64,
    /// Phase angle in degrees
    pub angle_degrees: f64,
    /// Rectangular text
    pub rectangular_text: String,
    /// Magnitude text
    pub magnitude_text: String,
    /// Angle text, in degrees without the degree sign
    pub angle_text: String,
}

impl VariableResult {
    fn new(index: MeshIndex, value: Complex64, precision: Precision) -> Self {
        let polar = Polar::from_complex(value);
        let (magnitude_text, angle_text) = format_polar(value, precision);
        Self {
            index,
            value,
            magnitude: polar.magnitude,
            angle_degrees: polar.angle_degrees,
            rectangular_text: format_rectangular(value, precision),
            magnitude_text,
            angle_text,
        }
    }
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport {
    /// Mesh currents in order `I1..In`
    pub variables: Vec<VariableResult>,
    /// KVL equation lines in row order
    pub equations: Vec<String>,
    /// Precision every text field was rendered with
    pub precision: Precision,
}

impl SolutionReport {
    /// Solved values in order.
    pub fn values(&self) -> Vec<Complex64> {
        self.variables.iter().map(|v| v.value).collect()
    }
}

/// Parse, solve and format a request.
pub fn build_report(request: &SolveRequest, config: &SolveConfig) -> Result<SolutionReport> {
    let row_lengths: Vec<usize> = request.matrix.iter().map(Vec::len).collect();
    let size = validate_shape(&row_lengths, request.vector.len())?;
    debug!(size, precision = %config.precision, "building report");

    let rows = request
        .matrix
        .iter()
        .map(|row| row.iter().map(|cell| literal::parse(cell)).collect())
        .collect::<Result<Vec<Vec<Complex64>>>>()?;
    let a = ComplexMatrix::from_rows(rows)?;
    let b = request
        .vector
        .iter()
        .map(|cell| literal::parse(cell))
        .collect::<Result<Vec<Complex64>>>()?;

    let x = solver::solve_with_tolerance(&a, &b, config.pivot_tolerance)?;
    debug!(size, "system solved");

    let variables = x
        .iter()
        .enumerate()
        .map(|(i, &value)| VariableResult::new(MeshIndex::from_position(i), value, config.precision))
        .collect();
    let equations = synthesize(&a, &b, config.precision);

    Ok(SolutionReport {
        variables,
        equations,
        precision: config.precision,
    })
}

/// Solve a system given as cell text with a precision of 0 to 6 digits.
pub fn solve_request<R, S>(matrix_cells: &[R], vector_cells: &[S], precision: u8) -> Result<SolutionReport>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let config = SolveConfig::new().with_precision(Precision::new(precision)?);
    build_report(&SolveRequest::from_cells(matrix_cells, vector_cells), &config)
}
