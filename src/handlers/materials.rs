//! Material CRUD handlers.

use crate::error::AppError;
use crate::model::{MaterialPatch, NewMaterial};
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
    Json(input): Json<NewMaterial>,
) -> Result<impl IntoResponse, AppError> {
    let material = repo::materials::create(&state.pool, &input).await?;
    Ok(response::created(material))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let materials = repo::materials::list(&state.pool).await?;
    Ok(response::success_many(materials))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let material = repo::materials::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("material {}", id)))?;
    Ok(response::success_one(material))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<MaterialPatch>,
) -> Result<impl IntoResponse, AppError> {
    let material = repo::materials::update(&state.pool, id, patch).await?;
    Ok(response::success_one(material))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    repo::materials::delete(&state.pool, id).await?;
    Ok(response::deleted(id))
}
