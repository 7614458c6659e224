//! Combination search implementation
//!
//! Sweeps every ordered pair of distinct bodies under the requested
//! operators and retains the results that land near a whole number. Pure
//! function over its inputs; the whole sweep is bounded (n ≤ ~25 bodies,
//! a few hundred evaluations) and runs single-threaded.

use crate::constants::{REPORT_MAX, REPORT_MIN, SWEEP_MAX, SWEEP_MIN};
use crate::domain::body::Body;
use crate::domain::operator::Operator;
use crate::domain::rounding::round_to_dp;
use rust_decimal::Decimal;

/// A retained near-integer coincidence
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Left-hand body of the ordered pair
    pub left: Body,
    /// Right-hand body of the ordered pair
    pub right: Body,
    /// Operator that produced the value
    pub operator: Operator,
    /// Operator result in absolute units
    pub value: Decimal,
    /// Absolute distance to the nearest integer
    pub distance: Decimal,
}

/// Maximum allowed distance from the nearest whole number: 5 × 10^-(accuracy+1)
///
/// Decimal scale tops out at 28 places. Past that the tolerance lies below
/// the resolution of any representable nonzero distance, so it saturates to
/// zero and only exact integers are retained.
pub fn near_integer_tolerance(accuracy: u32) -> Decimal {
    if accuracy >= 28 {
        Decimal::ZERO
    } else {
        Decimal::new(5, accuracy + 1)
    }
}

/// Search all ordered pairs of bodies for near-integer coincidences
///
/// Pair order matters since most operators are non-commutative; every one
/// of the n×(n−1) ordered pairs of distinct positions is tried under each
/// operator, pair-major. Pairs whose operator application fails (division
/// by zero, overflow) are skipped and the sweep continues.
///
/// # Arguments
/// * `bodies` - Parsed body table, in source order
/// * `accuracy` - Decimal places of near-integer tolerance
/// * `operators` - Operators to try, in order
///
/// # Returns
/// Candidates inside the [1, 10] report range, sorted ascending by distance
/// to the nearest integer; ties keep discovery order.
pub fn search_combinations(
    bodies: &[Body],
    accuracy: u32,
    operators: &[Operator],
) -> Vec<Candidate> {
    let tolerance = near_integer_tolerance(accuracy);
    let mut results = Vec::new();

    for (i, left) in bodies.iter().enumerate() {
        for (j, right) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            for &operator in operators {
                let Some(value) = operator.apply(left.gravity, right.gravity) else {
                    continue;
                };
                // Too big or small to be interesting
                if value < SWEEP_MIN || value > SWEEP_MAX {
                    continue;
                }
                let distance = (value - round_to_dp(value, 0)).abs();
                if distance <= tolerance {
                    results.push(Candidate {
                        left: left.clone(),
                        right: right.clone(),
                        operator,
                        value,
                        distance,
                    });
                }
            }
        }
    }

    // Second, stricter range filter; together with the sweep prune the
    // effective retained interval is [1, 10]
    results.retain(|c| REPORT_MIN <= c.value && c.value <= REPORT_MAX);

    // Stable sort keeps pair-then-operator discovery order on ties
    results.sort_by(|a, b| a.distance.cmp(&b.distance));

    results
}
