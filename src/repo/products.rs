//! Product repository.

use crate::error::{map_write_err, AppError};
use crate::model::{NewProduct, Product, ProductPatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, category, price";

pub async fn create(pool: &SqlitePool, input: &NewProduct) -> Result<Product, AppError> {
    input.validate()?;
    tracing::debug!(name = %input.name, "create product");
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, category, price) VALUES (?, ?, ?, ?) \
         RETURNING id, name, description, category, price",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.category)
    .bind(input.price)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_err(e, "product"))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Product>, AppError> {
    let row =
        sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, AppError> {
    let rows = sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn update(pool: &SqlitePool, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
    patch.validate()?;
    tracing::debug!(id, "update product");
    let mut tx = pool.begin().await?;
    let mut product =
        sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
    product.apply(patch);
    sqlx::query("UPDATE products SET name = ?, description = ?, category = ?, price = ? WHERE id = ?")
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "product"))?;
    tx.commit().await?;
    Ok(product)
}

/// Deletes a product. Rejected while join or storage rows still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    tracing::debug!(id, "delete product");
    let mut tx = pool.begin().await?;
    let dependents: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM plants_products WHERE product_id = ?1) \
              + (SELECT COUNT(*) FROM products_materials WHERE product_id = ?1) \
              + (SELECT COUNT(*) FROM orders_products WHERE product_id = ?1) \
              + (SELECT COUNT(*) FROM storage_products WHERE product_id = ?1)",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    if dependents > 0 {
        return Err(AppError::Conflict(format!(
            "product {} is referenced by {} dependent rows",
            id, dependents
        )));
    }
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "product"))?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("product {}", id)));
    }
    tx.commit().await?;
    Ok(())
}
