//! Domain models and validation
//!
//! Input checks run here, before any statement is issued - a failed
//! validation never reaches the database.

pub mod compound;
pub mod limit;
pub mod monster;
pub mod validation;

pub use compound::CompoundName;
pub use limit::RowLimit;
pub use monster::{MonsterName, ScareLevel};
pub use validation::ValidationError;
