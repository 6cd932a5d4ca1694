//! Plant repository.

use crate::error::{map_write_err, AppError};
use crate::model::{NewPlant, Plant, PlantPatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, location, capacity";

pub async fn create(pool: &SqlitePool, input: &NewPlant) -> Result<Plant, AppError> {
    input.validate()?;
    tracing::debug!(name = %input.name, "create plant");
    sqlx::query_as::<_, Plant>(
        "INSERT INTO plants (name, location, capacity) VALUES (?, ?, ?) \
         RETURNING id, name, location, capacity",
    )
    .bind(&input.name)
    .bind(&input.location)
    .bind(input.capacity)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_err(e, "plant"))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Plant>, AppError> {
    let row = sqlx::query_as::<_, Plant>(&format!("SELECT {} FROM plants WHERE id = ?", COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Plant>, AppError> {
    let rows = sqlx::query_as::<_, Plant>(&format!("SELECT {} FROM plants", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn update(pool: &SqlitePool, id: i64, patch: PlantPatch) -> Result<Plant, AppError> {
    patch.validate()?;
    tracing::debug!(id, "update plant");
    let mut tx = pool.begin().await?;
    let mut plant =
        sqlx::query_as::<_, Plant>(&format!("SELECT {} FROM plants WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("plant {}", id)))?;
    plant.apply(patch);
    sqlx::query("UPDATE plants SET name = ?, location = ?, capacity = ? WHERE id = ?")
        .bind(&plant.name)
        .bind(&plant.location)
        .bind(plant.capacity)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "plant"))?;
    tx.commit().await?;
    Ok(plant)
}

/// Deletes a plant. Rejected while join rows still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    tracing::debug!(id, "delete plant");
    let mut tx = pool.begin().await?;
    let dependents: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM plants_products WHERE plant_id = ?1) \
              + (SELECT COUNT(*) FROM plants_materials WHERE plant_id = ?1)",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    if dependents > 0 {
        return Err(AppError::Conflict(format!(
            "plant {} is referenced by {} dependent rows",
            id, dependents
        )));
    }
    let result = sqlx::query("DELETE FROM plants WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "plant"))?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("plant {}", id)));
    }
    tx.commit().await?;
    Ok(())
}
