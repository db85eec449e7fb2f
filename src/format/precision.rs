//! Decimal precision setting.

use std::fmt;

use crate::error::{KirchhoffError, Result};
use crate::{DEFAULT_PRECISION, MAX_PRECISION};

/// Number of fractional digits in rendered output, between 0 and
/// [`MAX_PRECISION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(u8);

impl Precision {
    /// Create a precision, rejecting values above [`MAX_PRECISION`].
    pub fn new(digits: u8) -> Result<Self> {
        if digits > MAX_PRECISION {
            return Err(KirchhoffError::InvalidPrecision { value: digits });
        }
        Ok(Self(digits))
    }

    /// Number of fractional digits.
    pub fn digits(&self) -> usize {
        self.0 as usize
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl TryFrom<u8> for Precision {
    type Error = KirchhoffError;

    fn try_from(digits: u8) -> Result<Self> {
        Self::new(digits)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
