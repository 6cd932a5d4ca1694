//! Material repository.

use crate::error::{map_write_err, AppError};
use crate::model::{Material, MaterialPatch, NewMaterial};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, unit, cost";

pub async fn create(pool: &SqlitePool, input: &NewMaterial) -> Result<Material, AppError> {
    input.validate()?;
    tracing::debug!(name = %input.name, "create material");
    sqlx::query_as::<_, Material>(
        "INSERT INTO materials (name, description, unit, cost) VALUES (?, ?, ?, ?) \
         RETURNING id, name, description, unit, cost",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.unit)
    .bind(input.cost)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_err(e, "material"))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Material>, AppError> {
    let row =
        sqlx::query_as::<_, Material>(&format!("SELECT {} FROM materials WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Material>, AppError> {
    let rows = sqlx::query_as::<_, Material>(&format!("SELECT {} FROM materials", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    patch: MaterialPatch,
) -> Result<Material, AppError> {
    patch.validate()?;
    tracing::debug!(id, "update material");
    let mut tx = pool.begin().await?;
    let mut material =
        sqlx::query_as::<_, Material>(&format!("SELECT {} FROM materials WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("material {}", id)))?;
    material.apply(patch);
    sqlx::query("UPDATE materials SET name = ?, description = ?, unit = ?, cost = ? WHERE id = ?")
        .bind(&material.name)
        .bind(&material.description)
        .bind(&material.unit)
        .bind(material.cost)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "material"))?;
    tx.commit().await?;
    Ok(material)
}

/// Deletes a material. Rejected while join or storage rows still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    tracing::debug!(id, "delete material");
    let mut tx = pool.begin().await?;
    let dependents: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM products_materials WHERE material_id = ?1) \
              + (SELECT COUNT(*) FROM plants_materials WHERE material_id = ?1) \
              + (SELECT COUNT(*) FROM storage_materials WHERE material_id = ?1)",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    if dependents > 0 {
        return Err(AppError::Conflict(format!(
            "material {} is referenced by {} dependent rows",
            id, dependents
        )));
    }
    let result = sqlx::query("DELETE FROM materials WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "material"))?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("material {}", id)));
    }
    tx.commit().await?;
    Ok(())
}
