//! Drug endpoints
//!
//! Same shape as the PTM routes, over the `drugs` table.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use crate::db::repos::{CompoundRepo, CompoundTable};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CompoundName, RowLimit};

use super::{empty_on_error, ensure_confirmed, ConfirmParams, LimitParams};

const TABLE: CompoundTable = CompoundTable::Drugs;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drugs", get(list_drugs).post(create_drug))
        .route("/drugs/{drug}", put(rename_drug).delete(delete_drug))
}

#[derive(Debug, Deserialize)]
pub struct DrugPayload {
    pub drug: String,
}

/// GET /drugs?limit= - empty on failure
async fn list_drugs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<String>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        CompoundRepo::new(&state.pool, TABLE).list(limit).await,
        "drugs",
    ))
}

/// POST /drugs
async fn create_drug(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DrugPayload>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    let name = CompoundName::new(&payload.drug)?;
    let created = CompoundRepo::new(&state.pool, TABLE).create(name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /drugs/{drug}
async fn rename_drug(
    State(state): State<Arc<AppState>>,
    Path(old): Path<String>,
    Json(payload): Json<DrugPayload>,
) -> Result<Json<String>, ApiError> {
    let new = CompoundName::new(&payload.drug)?;
    CompoundRepo::new(&state.pool, TABLE)
        .rename(&old, new)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: TABLE.resource(),
            id: old,
        })
}

/// DELETE /drugs/{drug}?confirm=true
async fn delete_drug(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(confirm): Query<ConfirmParams>,
) -> Result<Json<String>, ApiError> {
    ensure_confirmed(&confirm)?;

    CompoundRepo::new(&state.pool, TABLE)
        .delete(&name)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: TABLE.resource(),
            id: name,
        })
}
