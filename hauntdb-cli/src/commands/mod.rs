//! CLI subcommand implementations

pub mod migrate;
pub mod rebuild;
pub mod serve;
