//! hauntdb-server: Postgres access and HTTP API for the haunted-house /
//! PTM dashboard database.
//!
//! The connection pool is built once from environment credentials and
//! passed explicitly into repositories and the HTTP state - there is no
//! ambient engine singleton.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{load_dotenv, ConfigError, PgConfig};
pub use http::{run_server, ServerConfig};
