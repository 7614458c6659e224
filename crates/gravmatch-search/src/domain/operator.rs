//! The fixed binary-operator set
//!
//! Operators are a closed enum with an associated pure binary function,
//! not a dynamic lookup by symbol. Arithmetic is checked: division by zero
//! and decimal overflow (huge powers) yield `None` and the caller skips the
//! pair rather than aborting the sweep.

use rust_decimal::{Decimal, MathematicalOps};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary operator applied to a pair of gravity values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Div,
    Mul,
    Pow,
}

/// Requested operator symbol is not in the fixed set
///
/// This is a configuration error, reported before any computation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported operator symbol: '{0}'")]
pub struct UnsupportedOperator(pub String);

impl Operator {
    /// The full operator set, in the order the reference sweep tries them
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Div,
        Operator::Mul,
        Operator::Pow,
    ];

    /// Library-level default operator set
    pub const DEFAULT: [Operator; 2] = [Operator::Div, Operator::Mul];

    /// The operator's source symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
            Operator::Mul => "*",
            Operator::Pow => "**",
        }
    }

    /// Apply the operator to a pair of values
    ///
    /// Returns `None` on division by zero or when the result is not
    /// representable as a decimal (overflow).
    pub fn apply(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Div => lhs.checked_div(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Pow => lhs.checked_powd(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnsupportedOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "/" => Ok(Operator::Div),
            "*" => Ok(Operator::Mul),
            "**" => Ok(Operator::Pow),
            other => Err(UnsupportedOperator(other.to_string())),
        }
    }
}
