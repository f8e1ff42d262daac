//! PTM and drug repository
//!
//! Both tables are a single text primary-key column; they share one
//! repository parameterized by table. Identifiers are interpolated from
//! the enum below, never from user input.

use sqlx::PgPool;

use crate::models::{CompoundName, RowLimit};

use super::DbError;

/// The two text-keyed compound tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundTable {
    Ptms,
    Drugs,
}

impl CompoundTable {
    pub fn table(self) -> &'static str {
        match self {
            Self::Ptms => "ptms",
            Self::Drugs => "drugs",
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Ptms => "ptm",
            Self::Drugs => "drug",
        }
    }

    /// Resource name for error messages.
    pub fn resource(self) -> &'static str {
        self.column()
    }
}

pub struct CompoundRepo<'a> {
    pool: &'a PgPool,
    table: CompoundTable,
}

impl<'a> CompoundRepo<'a> {
    pub fn new(pool: &'a PgPool, table: CompoundTable) -> Self {
        Self { pool, table }
    }

    /// List entries ordered by name.
    pub async fn list(&self, limit: RowLimit) -> Result<Vec<String>, DbError> {
        let (table, col) = (self.table.table(), self.table.column());
        let names = sqlx::query_scalar::<_, String>(&format!(
            "SELECT {col} FROM {table} ORDER BY {col} LIMIT $1"
        ))
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }

    /// All entries, for rebuild jobs that need the full key set.
    pub async fn all(&self) -> Result<Vec<String>, DbError> {
        let (table, col) = (self.table.table(), self.table.column());
        let names =
            sqlx::query_scalar::<_, String>(&format!("SELECT {col} FROM {table} ORDER BY {col}"))
                .fetch_all(self.pool)
                .await?;

        Ok(names)
    }

    /// Insert a new entry, returning the stored name.
    pub async fn create(&self, name: CompoundName) -> Result<String, DbError> {
        let (table, col) = (self.table.table(), self.table.column());
        let created = sqlx::query_scalar::<_, String>(&format!(
            "INSERT INTO {table} ({col}) VALUES ($1) RETURNING {col}"
        ))
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Rename an entry.
    ///
    /// Returns `None` when the old name does not exist; nothing is mutated.
    pub async fn rename(&self, old: &str, new: CompoundName) -> Result<Option<String>, DbError> {
        let (table, col) = (self.table.table(), self.table.column());
        let renamed = sqlx::query_scalar::<_, String>(&format!(
            "UPDATE {table} SET {col} = $1 WHERE {col} = $2 RETURNING {col}"
        ))
        .bind(new.as_str())
        .bind(old)
        .fetch_optional(self.pool)
        .await?;

        Ok(renamed)
    }

    /// Delete an entry.
    ///
    /// Returns the deleted name, or `None` when it did not exist.
    pub async fn delete(&self, name: &str) -> Result<Option<String>, DbError> {
        let (table, col) = (self.table.table(), self.table.column());
        let deleted = sqlx::query_scalar::<_, String>(&format!(
            "DELETE FROM {table} WHERE {col} = $1 RETURNING {col}"
        ))
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_fixed_identifiers() {
        assert_eq!(CompoundTable::Ptms.table(), "ptms");
        assert_eq!(CompoundTable::Ptms.column(), "ptm");
        assert_eq!(CompoundTable::Drugs.table(), "drugs");
        assert_eq!(CompoundTable::Drugs.column(), "drug");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn crud_round_trip() {
        use crate::config::PgConfig;
        use crate::db::{migrations, pool::create_pool};

        let cfg = PgConfig::from_env().expect("PG* env vars required");
        let pool = create_pool(cfg.connect_options())
            .await
            .expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let repo = CompoundRepo::new(&pool, CompoundTable::Ptms);
        let name = CompoundName::new("AARS ubi k474 (test)").expect("valid name");

        let created = repo.create(name).await.expect("insert failed");
        assert_eq!(created, "AARS ubi k474 (test)");

        let renamed = repo
            .rename(&created, CompoundName::new("AARS ubi k475 (test)").expect("valid name"))
            .await
            .expect("rename errored")
            .expect("row should exist");

        let deleted = repo.delete(&renamed).await.expect("delete errored");
        assert_eq!(deleted.as_deref(), Some("AARS ubi k475 (test)"));

        let gone = repo.delete(&renamed).await.expect("delete errored");
        assert!(gone.is_none());
    }
}
