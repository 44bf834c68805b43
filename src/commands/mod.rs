//! Command implementations for the postfeed CLI

pub mod completions;
pub mod generate;
