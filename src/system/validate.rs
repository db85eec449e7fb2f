//! Shape validation for solve requests.

use crate::error::{KirchhoffError, Result};
use crate::{MAX_SYSTEM_SIZE, MIN_SYSTEM_SIZE};

/// Validate the shape of a system before any cell is parsed.
///
/// Checks:
/// - The number of equations is within the supported range
/// - Every matrix row has one cell per equation
/// - The source vector has one cell per equation
///
/// `row_lengths` holds the number of cells in each matrix row.
pub fn validate_shape(row_lengths: &[usize], vector_len: usize) -> Result<usize> {
    let size = row_lengths.len();
    if !(MIN_SYSTEM_SIZE..=MAX_SYSTEM_SIZE).contains(&size) {
        return Err(KirchhoffError::InvalidSize { size });
    }

    for (i, &len) in row_lengths.iter().enumerate() {
        if len != size {
            return Err(KirchhoffError::dimension_mismatch(
                format!("row {} of the coefficient matrix", i + 1),
                size,
                len,
            ));
        }
    }

    if vector_len != size {
        return Err(KirchhoffError::dimension_mismatch(
            "the source vector",
            size,
            vector_len,
        ));
    }

    Ok(size)
}
