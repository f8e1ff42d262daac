//! Correlation matrix endpoints
//!
//! The matrix is derived from the current dataset's per-PTM score sums
//! and replaced only by an explicit rebuild.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::{CorrelationRepo, CorrelationRow};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::RowLimit;

use super::{empty_on_error, LimitParams};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/correlation", get(list_correlation))
        .route("/correlation/rebuild", post(rebuild_correlation))
}

#[derive(Debug, Serialize)]
pub struct RebuildResponse {
    pub entries: u64,
}

/// GET /correlation?limit= - empty on failure
async fn list_correlation(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<CorrelationRow>> {
    let limit = RowLimit::from(params.limit);
    Json(empty_on_error(
        CorrelationRepo::new(&state.pool).list(limit).await,
        "correlation matrix",
    ))
}

/// POST /correlation/rebuild - recompute pairwise ratios from summed scores
async fn rebuild_correlation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RebuildResponse>, ApiError> {
    let repo = CorrelationRepo::new(&state.pool);

    let sums = repo.summed_scores().await?;
    let entries = hauntdb_core::pairwise_ratios(&sums);
    let written = repo.replace(&entries).await?;

    tracing::info!(entries = written, ptms = sums.len(), "correlation matrix rebuilt");
    Ok(Json(RebuildResponse { entries: written }))
}
