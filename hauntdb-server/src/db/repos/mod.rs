//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and wraps parameterized
//! statements for one table family. Maybe-missing rows come back as
//! `Option` via RETURNING + `fetch_optional`, so a mutation on a
//! nonexistent id is a single statement that touches nothing.

pub mod clusters;
pub mod compounds;
pub mod correlation;
pub mod dataset;
pub mod houses;
pub mod monsters;

pub use clusters::{Cluster, ClusterRepo};
pub use compounds::{CompoundRepo, CompoundTable};
pub use correlation::{CorrelationRepo, CorrelationRow};
pub use dataset::{DatasetRepo, ReactionRow};
pub use houses::{House, HouseRepo};
pub use monsters::{Monster, MonsterRepo, MonsterWithHouse, NewMonster};

/// Database error type shared by all repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
