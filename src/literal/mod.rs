//! Parser for complex coefficients written in electrical notation.
//!
//! Coefficients are short strings typed by a user into a matrix cell. The
//! parser accepts both imaginary-unit letters (`i` and `j`, any case), the
//! unit on either side of its coefficient, implicit unit coefficients and
//! thousands separators.
//!
//! # Stages
//!
//! ```text
//! raw       " -J 1,200 + 3 "        (as typed)
//! stage 1   "-J1200+3"              strip whitespace and ','
//! stage 2   "-j1200+3"              lowercase, i -> j
//! stage 3   "-1200j+3"              unit-first -> unit-last
//! stage 4   "-1200j+3"              bare unit -> 1j
//! stage 5   rectangular scan        -> rejected, imaginary part first
//! ```
//!
//! # Canonical grammar (after stage 4)
//!
//! ```text
//! literal   = [ '(' ] body [ ')' ]
//! body      = [sign] number [ 'j' ] | [sign] number sign number 'j'
//! number    = ( digit+ [ '.' digit* ] | '.' digit+ ) [ 'e' [sign] digit+ ]
//! sign      = '+' | '-'
//! ```
//!
//! # Examples
//!
//! | Input | Value |
//! |-------|-------|
//! | `3+4j`, `3+4i`, `3+j4` | 3 + 4j |
//! | `j`, `+j` | 0 + 1j |
//! | `-j` | 0 - 1j |
//! | `1,000 - j2.5` | 1000 - 2.5j |
//! | `(5-3j)` | 5 - 3j |
//! | empty | 0 |
//!
//! A unit that carries a coefficient and directly follows another number,
//! such as `3j4`, is rejected rather than guessed at.

mod normalize;
mod rectangular;

pub use normalize::{
    canonicalize_marker, expand_bare_units, move_leading_units, normalize, strip_separators,
};

use num_complex::Complex64;

use crate::error::{KirchhoffError, Result};

/// Canonical imaginary-unit marker.
pub const MARKER: char = 'j';

/// Parse one coefficient. Empty input is zero.
///
/// Errors carry the text exactly as it was passed in.
pub fn parse(raw: &str) -> Result<Complex64> {
    let normalized = normalize(raw).map_err(|reason| KirchhoffError::invalid_literal(raw, reason))?;

    if normalized.is_empty() {
        return Ok(Complex64::new(0.0, 0.0));
    }

    rectangular::parse_rectangular(&normalized)
        .map_err(|reason| KirchhoffError::invalid_literal(raw, reason))
}
