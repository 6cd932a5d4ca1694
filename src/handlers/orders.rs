//! Order CRUD handlers.

use crate::error::AppError;
use crate::model::{NewOrder, OrderPatch};
use crate::repo;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewOrder>,
) -> Result<impl IntoResponse, AppError> {
    let order = repo::orders::create(&state.pool, &input).await?;
    Ok(response::created(order))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = repo::orders::list(&state.pool).await?;
    Ok(response::success_many(orders))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let order = repo::orders::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(response::success_one(order))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderPatch>,
) -> Result<impl IntoResponse, AppError> {
    let order = repo::orders::update(&state.pool, id, patch).await?;
    Ok(response::success_one(order))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    repo::orders::delete(&state.pool, id).await?;
    Ok(response::deleted(id))
}
