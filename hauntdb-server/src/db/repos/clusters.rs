//! Cluster repository - read-only

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Cluster record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cluster {
    pub clusterid: i32,
    pub ptmsincluster: Option<String>,
}

pub struct ClusterRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ClusterRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Cluster>, DbError> {
        let clusters = sqlx::query_as::<_, Cluster>(
            "SELECT clusterid, ptmsincluster FROM common_clusters ORDER BY clusterid",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(clusters)
    }
}
