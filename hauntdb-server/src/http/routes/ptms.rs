//! PTM endpoints
//!
//! Text-keyed CRUD over the `ptms` table. Rows are addressed by name,
//! not by surrogate id, so rename and delete take the name in the path.

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

const TABLE: CompoundTable = CompoundTable::Ptms;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ptms", get(list_ptms).post(create_ptm))
        .route("/ptms/{ptm}", put(rename_ptm).delete(delete_ptm))
}

#[derive(Debug, Deserialize)]
pub struct PtmPayload {
    pub ptm: String,
}

/// GET /ptms?limit= - empty on failure
async fn list_ptms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<String>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        CompoundRepo::new(&state.pool, TABLE).list(limit).await,
        "ptms",
    ))
}

/// POST /ptms
async fn create_ptm(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PtmPayload>,
) -> Result<(StatusCode, Json<String>), ApiError> {
    let name = CompoundName::new(&payload.ptm)?;
    let created = CompoundRepo::new(&state.pool, TABLE).create(name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /ptms/{ptm}
async fn rename_ptm(
    State(state): State<Arc<AppState>>,
    Path(old): Path<String>,
    Json(payload): Json<PtmPayload>,
) -> Result<Json<String>, ApiError> {
    let new = CompoundName::new(&payload.ptm)?;
    CompoundRepo::new(&state.pool, TABLE)
        .rename(&old, new)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: TABLE.resource(),
            id: old,
        })
}

/// DELETE /ptms/{ptm}?confirm=true
async fn delete_ptm(
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
