//! CLI command implementations.

pub mod parse;
