//! hauntdb CLI - HTTP API and maintenance commands for the haunted-house
//! and PTM demo database
//!
//! Subcommands:
//! - `serve`: run the HTTP API server
//! - `migrate`: create the schema (idempotent)
//! - `rebuild`: regenerate the reaction dataset and correlation matrix

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "hauntdb",
    author,
    version,
    about = "Postgres-backed API for the haunted-house and PTM demo datasets"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create or update the database schema (idempotent)
    Migrate(commands::migrate::MigrateArgs),
    /// Regenerate the reaction dataset and correlation matrix
    Rebuild(commands::rebuild::RebuildArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    hauntdb_server::load_dotenv();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
        Commands::Rebuild(args) => commands::rebuild::run_rebuild(args).await,
    }
}
