//! Reaction dataset repository
//!
//! `ptmdataset` is derived data: the cross join of ptms x drugs with
//! generated scores. It is only ever replaced wholesale, inside a
//! transaction, by an explicit rebuild - never as a side effect of a
//! read.

use hauntdb_core::DatasetRow;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::RowLimit;

use super::DbError;

/// Reaction row from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReactionRow {
    pub ptm: String,
    pub drug: String,
    pub reaction_score: f64,
}

pub struct DatasetRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DatasetRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List dataset rows ordered by ptm, then drug.
    pub async fn list(&self, limit: RowLimit) -> Result<Vec<ReactionRow>, DbError> {
        let rows = sqlx::query_as::<_, ReactionRow>(
            r#"
            SELECT ptm, drug, reaction_score
            FROM ptmdataset
            ORDER BY ptm, drug
            LIMIT $1
            "#,
        )
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Replace the whole table with the given rows.
    ///
    /// DELETE and the inserts share one transaction, so a failure leaves
    /// the previous contents intact. Returns the number of rows written.
    pub async fn replace(&self, rows: &[DatasetRow]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ptmdataset").execute(&mut *tx).await?;

        for row in rows {
            sqlx::query("INSERT INTO ptmdataset (ptm, drug, reaction_score) VALUES ($1, $2, $3)")
                .bind(&row.ptm)
                .bind(&row.drug)
                .bind(row.reaction_score)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(rows.len() as u64)
    }
}
