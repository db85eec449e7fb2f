//! Staged normalization of raw coefficient text.
//!
//! Each stage is a plain string-to-string function so the intermediate forms
//! can be inspected and tested on their own. After the last stage the text is
//! either a rectangular literal in canonical form or something the
//! rectangular scanner will reject.

use super::rectangular::{is_number_start, scan_number};
use super::MARKER;

/// Rejection reason for a unit marker glued to a preceding number.
pub const AMBIGUOUS_JUXTAPOSITION: &str =
    "a unit marker with a coefficient cannot directly follow another number";

/// Run every stage in order.
pub fn normalize(raw: &str) -> Result<String, &'static str> {
    let text = strip_separators(raw);
    let text = canonicalize_marker(&text);
    let text = move_leading_units(&text)?;
    Ok(expand_bare_units(&text))
}

/// Stage 1: drop whitespace and thousands separators.
pub fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .collect()
}

/// Stage 2: lowercase and fold both imaginary-unit spellings into [`MARKER`].
pub fn canonicalize_marker(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|ch| if ch == 'i' { MARKER } else { ch })
        .collect()
}

/// Stage 3: rewrite unit-first terms (`j4`) as unit-last (`4j`).
///
/// A marker that carries a coefficient but sits directly after a digit or a
/// decimal point (`3j4`) is rejected instead of being merged.
pub fn move_leading_units(text: &str) -> Result<String, &'static str> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() + 1);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == MARKER && is_number_start(&chars, i + 1) {
            if i > 0 && is_numeric_tail(chars[i - 1]) {
                return Err(AMBIGUOUS_JUXTAPOSITION);
            }
            if starts_operand(&chars, i) {
                let end = scan_number(&chars, i + 1);
                out.extend(&chars[i + 1..end]);
                out.push(MARKER);
                i = end;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }

    Ok(out)
}

/// Stage 4: give bare markers (`j`, `-j`, `4+j`) an explicit coefficient of 1.
pub fn expand_bare_units(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len() + 2);

    for (i, &ch) in chars.iter().enumerate() {
        if ch == MARKER && !is_number_start(&chars, i + 1) && starts_operand(&chars, i) {
            out.push('1');
        }
        out.push(ch);
    }

    out
}

fn is_numeric_tail(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

/// True when position `i` begins a new operand: the start of the text, just
/// inside a parenthesis, or after a sign that is not an exponent sign.
fn starts_operand(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    match chars[i - 1] {
        '(' => true,
        '+' | '-' => !(i >= 2 && chars[i - 2] == 'e'),
        _ => false,
    }
}
