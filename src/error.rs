//! Error types for the Kirchhoff circuit-equation engine.
//!
//! This module provides a unified error type [`KirchhoffError`] that covers
//! every way a solve call can fail: literal parsing, dimension checks,
//! singular systems, and the host-side input framing.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`KirchhoffError`].
pub type Result<T> = std::result::Result<T, KirchhoffError>;

/// Unified error type for all Kirchhoff operations.
#[derive(Error, Debug)]
pub enum KirchhoffError {
    // ============ Literal Errors ============
    /// A cell does not reduce to a valid rectangular complex literal
    #[error("Invalid complex number '{raw}': {reason}")]
    InvalidLiteral { raw: String, reason: String },

    // ============ Dimension Errors ============
    /// System size outside the supported range
    #[error("Number of equations must be between {min} and {max}, got {size}", min = crate::MIN_SYSTEM_SIZE, max = crate::MAX_SYSTEM_SIZE)]
    InvalidSize { size: usize },

    /// Matrix rows or vector length disagree with the system size
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    // ============ Solver Errors ============
    /// No usable pivot was found while eliminating a column
    #[error("Solution does not exist: singular matrix (no usable pivot in column {column})")]
    SingularMatrix { column: usize },

    /// Elimination produced a non-finite unknown
    #[error("Numerical overflow while solving for I{variable}")]
    NumericalOverflow { variable: usize },

    // ============ Configuration Errors ============
    /// Precision outside the supported range
    #[error("Decimal precision must be between 0 and {max}, got {value}", max = crate::MAX_PRECISION)]
    InvalidPrecision { value: u8 },

    // ============ Input Errors ============
    /// Malformed system text handed over by a host
    #[error("Input error at line {line}: {message}")]
    InputFormat { line: usize, message: String },

    /// Error reading a system file
    #[error("Failed to read system file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the system from a stream
    #[error("Failed to read input: {source}")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },
}

/// Coarse error category reported to hosts alongside the detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A coefficient could not be parsed
    Parse,
    /// Size or shape of the system is wrong
    Dimension,
    /// The system has no unique solution
    Singular,
    /// The solve configuration is invalid
    Config,
    /// The host could not read or frame its input
    Input,
}

impl ErrorKind {
    /// Upper-case tag used in host output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "PARSE",
            ErrorKind::Dimension => "DIMENSION",
            ErrorKind::Singular => "SINGULAR",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Input => "INPUT",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KirchhoffError {
    /// Create an invalid literal error
    pub fn invalid_literal(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLiteral {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create an input framing error
    pub fn input_format(line: usize, message: impl Into<String>) -> Self {
        Self::InputFormat {
            line,
            message: message.into(),
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLiteral { .. } => ErrorKind::Parse,
            Self::InvalidSize { .. } | Self::DimensionMismatch { .. } => ErrorKind::Dimension,
            Self::SingularMatrix { .. } | Self::NumericalOverflow { .. } => ErrorKind::Singular,
            Self::InvalidPrecision { .. } => ErrorKind::Config,
            Self::InputFormat { .. } | Self::FileReadError { .. } | Self::InputReadError { .. } => {
                ErrorKind::Input
            }
        }
    }

    /// Human-readable detail, suitable for displaying verbatim.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}
