//! Product CRUD handlers.

use crate::error::AppError;
use crate::model::{NewProduct, ProductPatch};
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
    Json(input): Json<NewProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = repo::products::create(&state.pool, &input).await?;
    Ok(response::created(product))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = repo::products::list(&state.pool).await?;
    Ok(response::success_many(products))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = repo::products::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    Ok(response::success_one(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> Result<impl IntoResponse, AppError> {
    let product = repo::products::update(&state.pool, id, patch).await?;
    Ok(response::success_one(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    repo::products::delete(&state.pool, id).await?;
    Ok(response::deleted(id))
}
