//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use hauntdb_server::db::{create_pool, migrations};
use hauntdb_server::PgConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {}

/// Create the schema. Safe to run repeatedly.
pub async fn run_migrate(_args: MigrateArgs) -> Result<()> {
    let pg = PgConfig::from_env().context("database credentials")?;

    let pool = create_pool(pg.connect_options())
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Schema is up to date");
    Ok(())
}
