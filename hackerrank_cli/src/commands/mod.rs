//! CLI subcommand implementations.

pub mod candidate;
pub mod report;
pub mod tests;
