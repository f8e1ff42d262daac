//! Correlation matrix repository
//!
//! `ptm_correlation_matrix` holds the pairwise min/max ratios derived
//! from per-PTM summed reaction scores. The sums come from one GROUP BY
//! query; the pair derivation itself lives in hauntdb-core.

use std::collections::BTreeMap;

use hauntdb_core::CorrelationEntry;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::RowLimit;

use super::DbError;

/// Correlation entry from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CorrelationRow {
    pub ptm1: String,
    pub ptm2: String,
    pub spearman_score: f64,
}

pub struct CorrelationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CorrelationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List matrix entries ordered by score, as the original viewer did.
    pub async fn list(&self, limit: RowLimit) -> Result<Vec<CorrelationRow>, DbError> {
        let rows = sqlx::query_as::<_, CorrelationRow>(
            r#"
            SELECT ptm1, ptm2, spearman_score
            FROM ptm_correlation_matrix
            ORDER BY spearman_score
            LIMIT $1
            "#,
        )
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-PTM summed reaction scores from the current dataset.
    pub async fn summed_scores(&self) -> Result<BTreeMap<String, f64>, DbError> {
        let sums: Vec<(String, f64)> = sqlx::query_as(
            "SELECT ptm, SUM(reaction_score) FROM ptmdataset GROUP BY ptm",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sums.into_iter().collect())
    }

    /// Replace the whole matrix with the given entries, transactionally.
    pub async fn replace(&self, entries: &[CorrelationEntry]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ptm_correlation_matrix")
            .execute(&mut *tx)
            .await?;

        for entry in entries {
            sqlx::query(
                "INSERT INTO ptm_correlation_matrix (ptm1, ptm2, spearman_score) VALUES ($1, $2, $3)",
            )
            .bind(&entry.ptm1)
            .bind(&entry.ptm2)
            .bind(entry.spearman_score)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(entries.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PgConfig;
    use crate::db::repos::DatasetRepo;
    use crate::db::{migrations, pool::create_pool};
    use hauntdb_core::{pairwise_ratios, DatasetRow};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn sums_and_matrix_round_trip() {
        let cfg = PgConfig::from_env().expect("PG* env vars required");
        let pool = create_pool(cfg.connect_options())
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        DatasetRepo::new(&pool)
            .replace(&[
                DatasetRow {
                    ptm: "A".into(),
                    drug: "d1".into(),
                    reaction_score: 2.0,
                },
                DatasetRow {
                    ptm: "B".into(),
                    drug: "d1".into(),
                    reaction_score: 4.0,
                },
            ])
            .await
            .expect("dataset replace failed");

        let repo = CorrelationRepo::new(&pool);
        let sums = repo.summed_scores().await.expect("sums failed");
        assert_eq!(sums["A"], 2.0);
        assert_eq!(sums["B"], 4.0);

        let written = repo
            .replace(&pairwise_ratios(&sums))
            .await
            .expect("matrix replace failed");
        assert_eq!(written, 4);

        let rows = repo.list(RowLimit::default()).await.expect("list failed");
        assert_eq!(rows.len(), 4);
        // ordered by score: the two 0.5 cross pairs come first
        assert_eq!(rows[0].spearman_score, 0.5);
        assert_eq!(rows[3].spearman_score, 1.0);
    }
}
