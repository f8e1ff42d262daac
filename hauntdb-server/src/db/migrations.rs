//! Database migrations for the dashboard tables
//!
//! The original schema left the monsters foreign key and scare-level
//! range unenforced; both are constraints here.

use sqlx::PgPool;

/// Run all migrations. Idempotent.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS haunted_houses (
            id SERIAL PRIMARY KEY,
            house_name TEXT,
            location TEXT,
            built_year INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS monsters (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            "type" TEXT,
            scare_level INTEGER NOT NULL CHECK (scare_level BETWEEN 1 AND 10),
            house_id INTEGER NOT NULL REFERENCES haunted_houses(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ptms (
            ptm TEXT PRIMARY KEY
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drugs (
            drug TEXT PRIMARY KEY
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Derived: cross join of ptms x drugs, overwritten on rebuild
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ptmdataset (
            ptm TEXT NOT NULL,
            drug TEXT NOT NULL,
            reaction_score DOUBLE PRECISION NOT NULL,
            PRIMARY KEY (ptm, drug)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Derived: pairwise min/max ratio of summed scores, overwritten on rebuild
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ptm_correlation_matrix (
            ptm1 TEXT NOT NULL,
            ptm2 TEXT NOT NULL,
            spearman_score DOUBLE PRECISION NOT NULL,
            PRIMARY KEY (ptm1, ptm2)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS common_clusters (
            clusterid INTEGER PRIMARY KEY,
            ptmsincluster TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_monsters_house ON monsters(house_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PgConfig;
    use crate::db::pool::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let cfg = PgConfig::from_env().expect("PG* env vars required");
        let pool = create_pool(cfg.connect_options())
            .await
            .expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
