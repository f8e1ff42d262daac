//! Haunted house repository
//!
//! Houses are reference data: listed for display and as the target of
//! the monsters foreign key, never mutated here.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// House record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct House {
    pub id: i32,
    pub house_name: Option<String>,
    pub location: Option<String>,
    pub built_year: Option<i32>,
}

pub struct HouseRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> HouseRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all houses ordered by id.
    pub async fn list(&self) -> Result<Vec<House>, DbError> {
        let houses = sqlx::query_as::<_, House>(
            "SELECT id, house_name, location, built_year FROM haunted_houses ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(houses)
    }

    /// Get a single house by id.
    pub async fn get(&self, id: i32) -> Result<House, DbError> {
        sqlx::query_as::<_, House>(
            "SELECT id, house_name, location, built_year FROM haunted_houses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "house",
            id: id.to_string(),
        })
    }
}
