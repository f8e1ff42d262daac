//! Reaction dataset endpoints
//!
//! Viewing never regenerates anything. The dataset changes only through
//! the explicit rebuild endpoint, which cross-joins the current PTM and
//! drug lists with fresh random scores.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::{CompoundRepo, CompoundTable, DatasetRepo, ReactionRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::RowLimit;

use super::{empty_on_error, LimitParams};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dataset", get(list_dataset))
        .route("/dataset/rebuild", post(rebuild_dataset))
}

#[derive(Debug, Serialize)]
pub struct RebuildResponse {
    pub rows: u64,
}

/// GET /dataset?limit= - empty on failure
async fn list_dataset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<ReactionRow>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        DatasetRepo::new(&state.pool).list(limit).await,
        "dataset",
    ))
}

/// POST /dataset/rebuild - regenerate the cross join with fresh scores
async fn rebuild_dataset(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RebuildResponse>, ApiError> {
    let ptms = CompoundRepo::new(&state.pool, CompoundTable::Ptms)
        .all()
        .await?;
    let drugs = CompoundRepo::new(&state.pool, CompoundTable::Drugs)
        .all()
        .await?;

    let rows = hauntdb_core::generate(&ptms, &drugs, &mut rand::thread_rng());
    let written = DatasetRepo::new(&state.pool).replace(&rows).await?;

    tracing::info!(
        rows = written,
        ptms = ptms.len(),
        drugs = drugs.len(),
        "dataset rebuilt"
    );
    Ok(Json(RebuildResponse { rows: written }))
}
