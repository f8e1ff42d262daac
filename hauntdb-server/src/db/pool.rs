//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a per-connection
//! server-side statement timeout. The knob values mirror the original
//! dashboard's engine settings.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Executor, PgPool};

/// Pool sizing and timeout knobs.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Hard cap on open connections; there is no overflow.
    pub max_connections: u32,
    /// How long to wait for a connection before failing.
    pub acquire_timeout: Duration,
    /// Recycle connections after this age.
    pub max_lifetime: Duration,
    /// Server-side statement timeout set on every new physical connection.
    pub statement_timeout_ms: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            max_lifetime: Duration::from_secs(1800),
            statement_timeout_ms: 8_000,
        }
    }
}

/// Create a PostgreSQL connection pool with default knobs.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    create_pool_with_config(options, PoolConfig::default()).await
}

/// Create a PostgreSQL connection pool with custom knobs.
///
/// Connections are health-checked before reuse, and every new physical
/// connection gets `SET statement_timeout` before application code sees
/// it. Connection poolers reject startup options, so the timeout has to
/// be issued after connect.
pub async fn create_pool_with_config(
    options: PgConnectOptions,
    config: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    let statement_timeout_ms = config.statement_timeout_ms;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .max_lifetime(config.max_lifetime)
        .test_before_acquire(true)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                // SET does not take bind parameters; the value is a config
                // integer, not user input.
                conn.execute(format!("SET statement_timeout TO {statement_timeout_ms}").as_str())
                    .await?;
                Ok(())
            })
        })
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PgConfig;

    #[test]
    fn default_knobs_match_dashboard_engine() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.max_lifetime, Duration::from_secs(1800));
        assert_eq!(config.statement_timeout_ms, 8_000);
    }

    // Integration tests require a real database.
    // Run with: PGDATABASE=... PGUSER=... PGPASSWORD=... cargo test -p hauntdb-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let cfg = PgConfig::from_env().expect("PG* env vars required");
        let pool = create_pool(cfg.connect_options())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn statement_timeout_is_applied_per_connection() {
        let cfg = PgConfig::from_env().expect("PG* env vars required");
        let pool = create_pool_with_config(
            cfg.connect_options(),
            PoolConfig {
                statement_timeout_ms: 8_000,
                ..PoolConfig::default()
            },
        )
        .await
        .expect("pool creation failed");

        let timeout: (String,) = sqlx::query_as("SHOW statement_timeout")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(timeout.0, "8s");
    }
}
