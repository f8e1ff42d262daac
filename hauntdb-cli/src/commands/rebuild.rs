//! Dataset and correlation rebuild command
//!
//! Same derivation the HTTP rebuild endpoints run, without the server:
//! cross-join ptms x drugs with fresh random scores, then recompute the
//! pairwise ratio matrix from the per-PTM sums.

use anyhow::{Context, Result};
use clap::Parser;

use hauntdb_server::db::{
    create_pool, migrations, CompoundRepo, CompoundTable, CorrelationRepo, DatasetRepo,
};
use hauntdb_server::PgConfig;

/// Arguments for the rebuild command
#[derive(Parser, Debug)]
pub struct RebuildArgs {
    /// Rebuild only the reaction dataset, not the correlation matrix
    #[arg(long)]
    pub dataset_only: bool,

    /// Rebuild only the correlation matrix from the existing dataset
    #[arg(long, conflicts_with = "dataset_only")]
    pub correlation_only: bool,
}

/// Regenerate derived tables.
pub async fn run_rebuild(args: RebuildArgs) -> Result<()> {
    let pg = PgConfig::from_env().context("database credentials")?;

    let pool = create_pool(pg.connect_options())
        .await
        .context("Failed to create database pool")?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if !args.correlation_only {
        let ptms = CompoundRepo::new(&pool, CompoundTable::Ptms)
            .all()
            .await
            .context("Failed to load ptms")?;
        let drugs = CompoundRepo::new(&pool, CompoundTable::Drugs)
            .all()
            .await
            .context("Failed to load drugs")?;

        let rows = hauntdb_core::generate(&ptms, &drugs, &mut rand::thread_rng());
        let written = DatasetRepo::new(&pool)
            .replace(&rows)
            .await
            .context("Failed to replace dataset")?;

        tracing::info!(
            rows = written,
            ptms = ptms.len(),
            drugs = drugs.len(),
            "dataset rebuilt"
        );
    }

    if !args.dataset_only {
        let repo = CorrelationRepo::new(&pool);
        let sums = repo
            .summed_scores()
            .await
            .context("Failed to sum reaction scores")?;
        let entries = hauntdb_core::pairwise_ratios(&sums);
        let written = repo
            .replace(&entries)
            .await
            .context("Failed to replace correlation matrix")?;

        tracing::info!(entries = written, ptms = sums.len(), "correlation matrix rebuilt");
    }

    Ok(())
}
