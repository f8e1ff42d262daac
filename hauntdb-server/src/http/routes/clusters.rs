//! Cluster endpoints - read-only

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::{Cluster, ClusterRepo};
use crate::http::server::AppState;

use super::empty_on_error;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/clusters", get(list_clusters))
}

/// GET /clusters - all clusters, empty on failure
async fn list_clusters(State(state): State<Arc<AppState>>) -> Json<Vec<Cluster>> {
    Json(empty_on_error(
        ClusterRepo::new(&state.pool).list().await,
        "clusters",
    ))
}
