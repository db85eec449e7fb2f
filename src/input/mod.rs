//! Text framing of a mesh system for the CLI and WASM hosts.
//!
//! The system is written as its augmented matrix, one equation per line:
//! the coefficient cells of the row followed by the source cell, all
//! separated by commas.
//!
//! ```text
//! # (10 - 5j) I1 + 5j I2 = 12
//! #  5j I1 + (8 - 3j) I2 = 0
//! 10-j5, j5,   12
//! j5,    8-j3, 0
//! ```
//!
//! Blank lines are ignored and `#` or `;` starts a comment. Cells may be left
//! empty for zero. Because commas separate cells, thousands separators cannot
//! be used in this format.

use crate::error::{KirchhoffError, Result};
use crate::report::SolveRequest;

/// Split system text into a solve request.
///
/// Only the framing is checked here; coefficient text and the overall shape
/// are checked when the request is solved.
pub fn parse_system(text: &str) -> Result<SolveRequest> {
    let mut request = SolveRequest::default();
    let mut width: Option<usize> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let mut cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();

        match width {
            None => {
                if cells.len() < 2 {
                    return Err(KirchhoffError::input_format(
                        line_no,
                        "each equation needs at least one coefficient and a source value",
                    ));
                }
                width = Some(cells.len());
            }
            Some(expected) if expected != cells.len() => {
                return Err(KirchhoffError::input_format(
                    line_no,
                    format!("expected {} cells, found {}", expected, cells.len()),
                ));
            }
            Some(_) => {}
        }

        // The last cell is the source, the rest are coefficients
        let source = cells.pop().unwrap_or_default();
        request.matrix.push(cells);
        request.vector.push(source);
    }

    Ok(request)
}

fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Read system text from a stream.
#[cfg(feature = "cli")]
pub fn read_system<R: std::io::Read>(mut reader: R) -> Result<SolveRequest> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| KirchhoffError::InputReadError { source })?;
    parse_system(&text)
}

/// Read system text from a file.
#[cfg(feature = "cli")]
pub fn read_file(path: &std::path::Path) -> Result<SolveRequest> {
    let content = std::fs::read_to_string(path).map_err(|e| KirchhoffError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_system(&content)
}
