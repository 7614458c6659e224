//! gravmatch-search - Near-integer coincidence search over surface gravities
//!
//! This crate provides functionality to:
//! - Parse a "Name<value>g" surface-gravity table into absolute accelerations
//! - Sweep every ordered pair of bodies under a set of binary operators
//! - Rank the results that land near a whole number and render a report
//!
//! All arithmetic uses `rust_decimal` so tolerance comparisons are exact.

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::searcher::{Candidate, near_integer_tolerance, search_combinations};
pub use domain::body::{Body, ParseError, parse_bodies};
pub use domain::operator::{Operator, UnsupportedOperator};
