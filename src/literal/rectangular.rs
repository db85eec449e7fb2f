//! Scanner for canonical rectangular literals (`re`, `imj`, `re±imj`).

use num_complex::Complex64;

use super::MARKER;

/// True when a number starts at `start`: a digit, or a decimal point
/// followed by a digit.
pub fn is_number_start(chars: &[char], start: usize) -> bool {
    match chars.get(start) {
        Some(ch) if ch.is_ascii_digit() => true,
        Some('.') => chars.get(start + 1).is_some_and(|ch| ch.is_ascii_digit()),
        _ => false,
    }
}

/// Index one past the number beginning at `start`.
///
/// Accepts `digits[.digits]`, `.digits` and an optional `e[+-]digits`
/// exponent. An `e` not followed by a well-formed exponent is not consumed.
pub fn scan_number(chars: &[char], start: usize) -> usize {
    let mut i = start;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < chars.len() && chars[i] == 'e' {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    i
}

/// Parse a normalized literal.
pub fn parse_rectangular(text: &str) -> Result<Complex64, &'static str> {
    let body = match text.strip_prefix('(') {
        Some(inner) => inner
            .strip_suffix(')')
            .ok_or("unbalanced parenthesis")?,
        None => text,
    };

    let mut scanner = Scanner::new(body);
    if scanner.at_end() {
        return Err("empty literal");
    }

    let first_sign = scanner.read_sign().unwrap_or(1.0);
    let first = scanner.read_number()?.ok_or("expected a number")?;

    if scanner.eat(MARKER) {
        scanner.expect_end()?;
        return Ok(Complex64::new(0.0, first_sign * first));
    }
    if scanner.at_end() {
        return Ok(Complex64::new(first_sign * first, 0.0));
    }

    let second_sign = scanner
        .read_sign()
        .ok_or("expected '+' or '-' before the imaginary part")?;
    let second = scanner
        .read_number()?
        .ok_or("expected a number after the sign")?;
    if !scanner.eat(MARKER) {
        return Err("the second term must be imaginary");
    }
    scanner.expect_end()?;

    Ok(Complex64::new(first_sign * first, second_sign * second))
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn read_sign(&mut self) -> Option<f64> {
        if self.eat('+') {
            Some(1.0)
        } else if self.eat('-') {
            Some(-1.0)
        } else {
            None
        }
    }

    fn read_number(&mut self) -> Result<Option<f64>, &'static str> {
        if !is_number_start(&self.chars, self.pos) {
            return Ok(None);
        }
        let end = scan_number(&self.chars, self.pos);
        let text: String = self.chars[self.pos..end].iter().collect();
        self.pos = end;

        let value: f64 = text.parse().map_err(|_| "malformed number")?;
        if !value.is_finite() {
            return Err("value out of range");
        }
        Ok(Some(value))
    }

    fn expect_end(&self) -> Result<(), &'static str> {
        if self.at_end() {
            Ok(())
        } else {
            Err("unexpected trailing characters")
        }
    }
}
