//! Haunted house endpoints - read-only

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::{House, HouseRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

use super::empty_on_error;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/houses", get(list_houses))
        .route("/houses/{id}", get(get_house))
}

/// GET /houses - all houses, empty on failure
async fn list_houses(State(state): State<Arc<AppState>>) -> Json<Vec<House>> {
    Json(empty_on_error(
        HouseRepo::new(&state.pool).list().await,
        "houses",
    ))
}

/// GET /houses/{id}
async fn get_house(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<House>, ApiError> {
    let house = HouseRepo::new(&state.pool).get(id).await?;
    Ok(Json(house))
}
