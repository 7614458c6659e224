//! Body table parsing
//!
//! Each input line carries a body name directly followed by its surface
//! gravity in g-units and a literal `g` suffix, e.g. `Earth1.00g`. Parsed
//! gravities are converted to absolute acceleration by multiplying with the
//! standard-gravity constant, in decimal arithmetic so no binary-float error
//! accumulates over the later sweep.

use crate::constants::STANDARD_GRAVITY;
use rust_decimal::Decimal;
use thiserror::Error;

/// A solar-system body with its absolute surface gravity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Body {
    /// Body name as it appears in the input table
    pub name: String,
    /// Surface gravity in absolute units (g-multiplier × 9.81)
    pub gravity: Decimal,
}

impl Body {
    /// Create a body from a name and an absolute gravity value
    pub fn new(name: impl Into<String>, gravity: Decimal) -> Self {
        Self {
            name: name.into(),
            gravity,
        }
    }
}

/// Input table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line does not match the `Name<value>g` pattern
    #[error("invalid input format at line {line}: '{text}'")]
    InvalidInputFormat { line: usize, text: String },
}

/// Parse the raw multi-line table into bodies, in source order
///
/// Every line must match the pattern: optional leading digits, one-or-more
/// letters/hyphens (together the name), a non-empty numeric literal, then a
/// literal `g`. A non-matching line aborts the whole parse; no partial
/// results are produced.
pub fn parse_bodies(text: &str) -> Result<Vec<Body>, ParseError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line).ok_or_else(|| ParseError::InvalidInputFormat {
                line: idx + 1,
                text: line.trim().to_string(),
            })
        })
        .collect()
}

/// Parse a single trimmed table line
///
/// Characters after the `g` suffix are ignored (prefix match).
fn parse_line(line: &str) -> Option<Body> {
    let s = line.trim();
    let bytes = s.as_bytes();

    // Optional leading digits belong to the name (e.g. "67P-CG")
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }

    // One-or-more letters or hyphens complete the name
    let letters_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'-') {
        i += 1;
    }
    if i == letters_start {
        return None;
    }
    let name_end = i;

    // Non-empty numeric literal in g-units
    let number_start = i;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
        i += 1;
    }
    if i == number_start {
        return None;
    }

    // Literal unit suffix
    if bytes.get(i) != Some(&b'g') {
        return None;
    }

    let multiplier: Decimal = s[number_start..i].parse().ok()?;
    Some(Body::new(&s[..name_end], multiplier * STANDARD_GRAVITY))
}
