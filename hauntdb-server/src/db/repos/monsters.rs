//! Monster repository - full CRUD
//!
//! The `type` column is a reserved word in the schema, so every query
//! aliases it to `monster_type`.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::{MonsterName, RowLimit, ScareLevel};

use super::DbError;

/// Monster record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Monster {
    pub id: i32,
    pub name: String,
    pub monster_type: Option<String>,
    pub scare_level: i32,
    pub house_id: i32,
}

/// Monster joined with its house for the combined view
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonsterWithHouse {
    pub id: i32,
    pub name: String,
    pub monster_type: Option<String>,
    pub scare_level: i32,
    pub house_name: Option<String>,
    pub location: Option<String>,
    pub built_year: Option<i32>,
}

/// Validated fields for an insert or update.
#[derive(Debug, Clone)]
pub struct NewMonster {
    pub name: MonsterName,
    pub monster_type: Option<String>,
    pub scare_level: ScareLevel,
    pub house_id: i32,
}

pub struct MonsterRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MonsterRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List monsters ordered by id.
    pub async fn list(&self, limit: RowLimit) -> Result<Vec<Monster>, DbError> {
        let monsters = sqlx::query_as::<_, Monster>(
            r#"
            SELECT id, name, "type" AS monster_type, scare_level, house_id
            FROM monsters
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(monsters)
    }

    /// Get a single monster by id.
    pub async fn get(&self, id: i32) -> Result<Monster, DbError> {
        sqlx::query_as::<_, Monster>(
            r#"
            SELECT id, name, "type" AS monster_type, scare_level, house_id
            FROM monsters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "monster",
            id: id.to_string(),
        })
    }

    /// Insert a monster, returning the row with its fresh id.
    pub async fn create(&self, monster: &NewMonster) -> Result<Monster, DbError> {
        let created = sqlx::query_as::<_, Monster>(
            r#"
            INSERT INTO monsters (name, "type", scare_level, house_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, "type" AS monster_type, scare_level, house_id
            "#,
        )
        .bind(monster.name.as_str())
        .bind(monster.monster_type.as_deref())
        .bind(monster.scare_level.get())
        .bind(monster.house_id)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Update a monster by id.
    ///
    /// Returns `None` when no row has that id; nothing is mutated.
    pub async fn update(&self, id: i32, monster: &NewMonster) -> Result<Option<Monster>, DbError> {
        let updated = sqlx::query_as::<_, Monster>(
            r#"
            UPDATE monsters
            SET name = $1, "type" = $2, scare_level = $3, house_id = $4
            WHERE id = $5
            RETURNING id, name, "type" AS monster_type, scare_level, house_id
            "#,
        )
        .bind(monster.name.as_str())
        .bind(monster.monster_type.as_deref())
        .bind(monster.scare_level.get())
        .bind(monster.house_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a monster by id.
    ///
    /// Returns the deleted row, or `None` when no row had that id.
    pub async fn delete(&self, id: i32) -> Result<Option<Monster>, DbError> {
        let deleted = sqlx::query_as::<_, Monster>(
            r#"
            DELETE FROM monsters
            WHERE id = $1
            RETURNING id, name, "type" AS monster_type, scare_level, house_id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }

    /// Monsters joined with their houses, ordered by monster id.
    pub async fn list_joined(&self, limit: RowLimit) -> Result<Vec<MonsterWithHouse>, DbError> {
        let rows = sqlx::query_as::<_, MonsterWithHouse>(
            r#"
            SELECT m.id, m.name, m."type" AS monster_type, m.scare_level,
                   h.house_name, h.location, h.built_year
            FROM monsters m
            JOIN haunted_houses h ON m.house_id = h.id
            ORDER BY m.id
            LIMIT $1
            "#,
        )
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
