//! hauntdb-core: derivation logic for HauntDB's toy analytics.
//!
//! Pure functions only - the server crate feeds rows in and persists the
//! results. Keeping this free of I/O makes the derivation properties
//! testable without a database.

pub mod correlation;
pub mod dataset;

pub use correlation::{pairwise_ratios, sum_scores, CorrelationEntry};
pub use dataset::{generate, DatasetRow};
