//! Monster endpoints - full CRUD plus the joined view

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{Monster, MonsterRepo, MonsterWithHouse, NewMonster};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{MonsterName, RowLimit, ScareLevel};

use super::{empty_on_error, ensure_confirmed, ConfirmParams, LimitParams};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/monsters", get(list_monsters).post(create_monster))
        .route("/monsters/joined", get(list_joined))
        .route(
            "/monsters/{id}",
            get(get_monster).put(update_monster).delete(delete_monster),
        )
}

/// Insert/update request body
#[derive(Debug, Deserialize)]
pub struct MonsterPayload {
    pub name: String,
    #[serde(default)]
    pub monster_type: Option<String>,
    pub scare_level: i32,
    pub house_id: i32,
}

impl MonsterPayload {
    /// Validate all fields before any statement is issued.
    fn validate(self) -> Result<NewMonster, ApiError> {
        let name = MonsterName::new(&self.name)?;
        let scare_level = ScareLevel::new(self.scare_level)?;
        let monster_type = self
            .monster_type
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());

        Ok(NewMonster {
            name,
            monster_type,
            scare_level,
            house_id: self.house_id,
        })
    }
}

/// GET /monsters?limit= - empty on failure
async fn list_monsters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<Monster>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        MonsterRepo::new(&state.pool).list(limit).await,
        "monsters",
    ))
}

/// GET /monsters/joined?limit= - monsters with their houses
async fn list_joined(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<MonsterWithHouse>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        MonsterRepo::new(&state.pool).list_joined(limit).await,
        "joined monsters",
    ))
}

/// GET /monsters/{id}
async fn get_monster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Monster>, ApiError> {
    let monster = MonsterRepo::new(&state.pool).get(id).await?;
    Ok(Json(monster))
}

/// POST /monsters
async fn create_monster(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MonsterPayload>,
) -> Result<(StatusCode, Json<Monster>), ApiError> {
    let monster = payload.validate()?;
    let created = MonsterRepo::new(&state.pool).create(&monster).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /monsters/{id}
async fn update_monster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<MonsterPayload>,
) -> Result<Json<Monster>, ApiError> {
    let monster = payload.validate()?;
    MonsterRepo::new(&state.pool)
        .update(id, &monster)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: "monster",
            id: id.to_string(),
        })
}

/// DELETE /monsters/{id}?confirm=true
async fn delete_monster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(confirm): Query<ConfirmParams>,
) -> Result<Json<Monster>, ApiError> {
    ensure_confirmed(&confirm)?;

    MonsterRepo::new(&state.pool)
        .delete(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: "monster",
            id: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_validation_rejects_empty_name() {
        let payload = MonsterPayload {
            name: "   ".into(),
            monster_type: None,
            scare_level: 5,
            house_id: 1,
        };
        assert!(matches!(
            payload.validate(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn payload_validation_rejects_out_of_range_scare() {
        let payload = MonsterPayload {
            name: "Boo".into(),
            monster_type: None,
            scare_level: 11,
            house_id: 1,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn blank_type_becomes_none() {
        let payload = MonsterPayload {
            name: "Boo".into(),
            monster_type: Some("  ".into()),
            scare_level: 5,
            house_id: 1,
        };
        let monster = payload.validate().expect("valid payload");
        assert!(monster.monster_type.is_none());

        let payload = MonsterPayload {
            name: "Boo".into(),
            monster_type: Some(" ghost ".into()),
            scare_level: 5,
            house_id: 1,
        };
        let monster = payload.validate().expect("valid payload");
        assert_eq!(monster.monster_type.as_deref(), Some("ghost"));
    }
}
