//! # Kirchhoff Core
//!
//! A solver for small systems of complex mesh (KVL) equations.
//!
//! This library provides:
//! - A parser for complex coefficients written in electrical notation
//!   (`3+4j`, `j4`, `-j`, `2.5 - i1,200`)
//! - Gaussian elimination with partial pivoting over the complex field
//! - Fixed-precision rectangular and polar formatting
//! - Reconstruction of the KVL equation text from the coefficient matrix
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`literal`] - Complex literal parser
//! - [`system`] - Square complex matrix and dimension checks
//! - [`solver`] - Dense complex linear solver
//! - [`format`] - Rectangular and polar number formatting
//! - [`equations`] - KVL equation synthesis
//! - [`report`] - Solve requests and the resulting report
//! - [`input`] - Text framing used by the CLI and WASM hosts
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! printf '2,-1,1,5\n1,0,1,6\n3,2,4,10\n' | kirchhoff --precision 3
//! ```
//!
//! ### Library
//!
//! ```
//! use kirchhoff_core::solve_request;
//!
//! let matrix = vec![vec!["10", "-j5"], vec!["-j5", "8+j2"]];
//! let vector = vec!["12", "0"];
//! let report = solve_request(&matrix, &vector, 3).unwrap();
//! assert_eq!(report.variables.len(), 2);
//! println!("{report}");
//! ```
//!
//! Every call is a pure function of its inputs: no state survives between
//! calls, so the entry points may be used from several threads at once.

pub mod equations;
pub mod error;
pub mod format;
pub mod input;
pub mod literal;
pub mod report;
pub mod solver;
pub mod system;

// Re-export main types for convenience
pub use error::{ErrorKind, KirchhoffError, Result};
pub use format::Precision;
pub use report::{build_report, solve_request, SolutionReport, SolveConfig, SolveRequest};
pub use system::ComplexMatrix;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitSolver;

/// Default number of fractional digits in rendered output.
pub const DEFAULT_PRECISION: u8 = 3;

/// Largest supported number of fractional digits.
pub const MAX_PRECISION: u8 = 6;

/// Smallest supported number of equations.
pub const MIN_SYSTEM_SIZE: usize = 1;

/// Largest supported number of equations.
pub const MAX_SYSTEM_SIZE: usize = 4;

/// Magnitude below which a real or imaginary part is treated as zero.
pub const ZERO_THRESHOLD: f64 = 1e-10;
