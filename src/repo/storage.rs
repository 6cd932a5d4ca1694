//! Storage repositories: stock rows for products and materials.
//!
//! Same macro approach as the join tables, with a single parent reference.

macro_rules! storage_repo {
    (
        $mod_name:ident, $table:literal, $label:literal,
        $row:ident, $new:ident, $patch:ident, $fk:ident
    ) => {
        pub mod $mod_name {
            use crate::error::{map_write_err, AppError};
            use crate::model::{$new, $patch, $row};
            use sqlx::SqlitePool;

            pub async fn create(pool: &SqlitePool, input: &$new) -> Result<$row, AppError> {
                input.validate()?;
                tracing::debug!(concat!("create ", $label));
                sqlx::query_as::<_, $row>(concat!(
                    "INSERT INTO ",
                    $table,
                    " (",
                    stringify!($fk),
                    ", quantity) VALUES (?, ?) RETURNING id, ",
                    stringify!($fk),
                    ", quantity"
                ))
                .bind(input.$fk)
                .bind(input.quantity)
                .fetch_one(pool)
                .await
                .map_err(|e| map_write_err(e, $label))
            }

            pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<$row>, AppError> {
                let row = sqlx::query_as::<_, $row>(concat!(
                    "SELECT id, ",
                    stringify!($fk),
                    ", quantity FROM ",
                    $table,
                    " WHERE id = ?"
                ))
                .bind(id)
                .fetch_optional(pool)
                .await?;
                Ok(row)
            }

            pub async fn list(pool: &SqlitePool) -> Result<Vec<$row>, AppError> {
                let rows = sqlx::query_as::<_, $row>(concat!(
                    "SELECT id, ",
                    stringify!($fk),
                    ", quantity FROM ",
                    $table
                ))
                .fetch_all(pool)
                .await?;
                Ok(rows)
            }

            pub async fn update(
                pool: &SqlitePool,
                id: i64,
                patch: $patch,
            ) -> Result<$row, AppError> {
                patch.validate()?;
                tracing::debug!(id, concat!("update ", $label));
                let mut tx = pool.begin().await?;
                let mut row = sqlx::query_as::<_, $row>(concat!(
                    "SELECT id, ",
                    stringify!($fk),
                    ", quantity FROM ",
                    $table,
                    " WHERE id = ?"
                ))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("{} {}", $label, id)))?;
                row.apply(patch);
                sqlx::query(concat!(
                    "UPDATE ",
                    $table,
                    " SET ",
                    stringify!($fk),
                    " = ?, quantity = ? WHERE id = ?"
                ))
                .bind(row.$fk)
                .bind(row.quantity)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_write_err(e, $label))?;
                tx.commit().await?;
                Ok(row)
            }

            pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
                tracing::debug!(id, concat!("delete ", $label));
                let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = ?"))
                    .bind(id)
                    .execute(pool)
                    .await?;
                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(format!("{} {}", $label, id)));
                }
                Ok(())
            }
        }
    };
}

storage_repo!(
    storage_products,
    "storage_products",
    "storage_product",
    StorageProduct,
    NewStorageProduct,
    StorageProductPatch,
    product_id
);
storage_repo!(
    storage_materials,
    "storage_materials",
    "storage_material",
    StorageMaterial,
    NewStorageMaterial,
    StorageMaterialPatch,
    material_id
);
