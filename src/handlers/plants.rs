//! Plant CRUD handlers.

use crate::error::AppError;
use crate::model::{NewPlant, PlantPatch};
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
    Json(input): Json<NewPlant>,
) -> Result<impl IntoResponse, AppError> {
    let plant = repo::plants::create(&state.pool, &input).await?;
    Ok(response::created(plant))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plants = repo::plants::list(&state.pool).await?;
    Ok(response::success_many(plants))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let plant = repo::plants::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("plant {}", id)))?;
    Ok(response::success_one(plant))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<PlantPatch>,
) -> Result<impl IntoResponse, AppError> {
    let plant = repo::plants::update(&state.pool, id, patch).await?;
    Ok(response::success_one(plant))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    repo::plants::delete(&state.pool, id).await?;
    Ok(response::deleted(id))
}
