//! Decimal rounding and rendering helpers
//!
//! Tie-breaks round half away from zero, consistently in the sweep and in
//! the rendered report.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a value to the given number of decimal places
pub fn round_to_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a value rounded to exactly `dp` fractional digits
///
/// The value is rounded first, then the fixed-point string is truncated
/// (never re-rounded) to `dp` digits and zero-padded when the decimal
/// representation carries fewer. The truncation guards against trailing
/// artifacts from the rounding step leaking into the output.
pub fn fixed_point(value: Decimal, dp: u32) -> String {
    let rounded = round_to_dp(value, dp);
    let s = rounded.to_string();
    let dp = dp as usize;

    match s.find('.') {
        Some(idx) if dp == 0 => s[..idx].to_string(),
        Some(idx) => {
            let end = idx + 1 + dp;
            if s.len() >= end {
                s[..end].to_string()
            } else {
                let mut out = s;
                out.extend(std::iter::repeat_n('0', end - out.len()));
                out
            }
        }
        None if dp == 0 => s,
        None => {
            let mut out = s;
            out.push('.');
            out.extend(std::iter::repeat_n('0', dp));
            out
        }
    }
}

/// Render a distance in scientific notation, one digit after the point
pub fn scientific(value: Decimal) -> String {
    format!("{:.1e}", value.to_f64().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_dp(dec!(2.5), 0), dec!(3));
        assert_eq!(round_to_dp(dec!(3.05), 1), dec!(3.1));
        assert_eq!(round_to_dp(dec!(3.04999), 1), dec!(3.0));
    }

    #[test]
    fn test_fixed_point_documented_example() {
        // 3.04999 at accuracy 1: almost-rounded (2dp) and rounded (1dp) forms
        assert_eq!(fixed_point(dec!(3.04999), 2), "3.05");
        assert_eq!(fixed_point(dec!(3.04999), 1), "3.0");
    }

    #[test]
    fn test_fixed_point_pads_short_representations() {
        assert_eq!(fixed_point(dec!(3.1), 2), "3.10");
        assert_eq!(fixed_point(dec!(3), 2), "3.00");
    }

    #[test]
    fn test_fixed_point_zero_places() {
        assert_eq!(fixed_point(dec!(9.81), 0), "10");
        assert_eq!(fixed_point(dec!(2), 0), "2");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(scientific(dec!(0.0001)), "1.0e-4");
        assert_eq!(scientific(dec!(0.010638)), "1.1e-2");
        assert_eq!(scientific(dec!(0)), "0.0e0");
    }
}
