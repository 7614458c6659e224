//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer to implement the combination
//! search use case.

pub mod searcher;
