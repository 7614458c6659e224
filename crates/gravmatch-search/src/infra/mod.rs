//! Infrastructure layer - Output rendering
//!
//! This module renders search results for human inspection.

pub mod report;
