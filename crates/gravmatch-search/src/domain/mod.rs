//! Domain layer - Pure computational logic
//!
//! This module contains the body table parser, the operator set and the
//! decimal rounding helpers, all without I/O dependencies.

pub mod body;
pub mod operator;
pub mod rounding;
