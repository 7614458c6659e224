//! Result report rendering
//!
//! One line per candidate showing the names, the gravity values, the
//! almost-rounded and rounded forms of the result and the distance to the
//! nearest integer in scientific notation, followed by a summary block.

use crate::app::searcher::Candidate;
use crate::domain::rounding::{fixed_point, scientific};
use std::io::{self, Write};

/// Render a single candidate line
///
/// `accuracy` drives the two rendered forms of the value: almost-rounded
/// at accuracy+1 places and rounded at accuracy places.
pub fn format_candidate(candidate: &Candidate, accuracy: u32) -> String {
    let symbol = candidate.operator.symbol();
    format!(
        "{} {} {} = {} {} {} = {} (rounded {}) delta: {}",
        candidate.left.name,
        symbol,
        candidate.right.name,
        candidate.left.gravity,
        symbol,
        candidate.right.gravity,
        fixed_point(candidate.value, accuracy + 1),
        fixed_point(candidate.value, accuracy),
        scientific(candidate.distance),
    )
}

/// Write the full report: candidate lines in the order supplied, then the
/// separator and summary
///
/// The reference flow passes the candidates reversed so the best match is
/// printed last, closest to the reader's eye.
pub fn write_report<W: Write>(
    out: &mut W,
    candidates: &[Candidate],
    accuracy: u32,
) -> io::Result<()> {
    for candidate in candidates {
        writeln!(out, "{}", format_candidate(candidate, accuracy))?;
    }
    writeln!(out, "==============")?;
    writeln!(
        out,
        "nearest to integer printed last, with accuracy {}dp",
        accuracy
    )?;
    writeln!(out, "total results: {}", candidates.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::body::Body;
    use crate::domain::operator::Operator;
    use rust_decimal_macros::dec;

    fn candidate() -> Candidate {
        Candidate {
            left: Body::new("Mercury", dec!(3.7278)),
            right: Body::new("Mars", dec!(3.68856)),
            operator: Operator::Div,
            value: dec!(1.0106382978723404255319148936),
            distance: dec!(0.0106382978723404255319148936),
        }
    }

    #[test]
    fn test_format_candidate_line() {
        let line = format_candidate(&candidate(), 1);
        assert_eq!(
            line,
            "Mercury / Mars = 3.7278 / 3.68856 = 1.01 (rounded 1.0) delta: 1.1e-2"
        );
    }

    #[test]
    fn test_write_report_summary() {
        let candidates = vec![candidate(), candidate()];
        let mut out = Vec::new();
        write_report(&mut out, &candidates, 1).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "==============");
        assert_eq!(lines[3], "nearest to integer printed last, with accuracy 1dp");
        assert_eq!(lines[4], "total results: 2");
    }

    #[test]
    fn test_write_report_empty() {
        let mut out = Vec::new();
        write_report(&mut out, &[], 1).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("total results: 0\n"));
    }
}
