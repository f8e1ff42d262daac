//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, passed by reference - no global engine
//! - Every statement is parameterized
//! - Writes use RETURNING so callers see exactly the row that changed
//! - Derived tables are overwritten inside a single transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, PoolConfig};
pub use repos::*;
