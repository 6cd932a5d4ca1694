//! Join-table repositories: plant↔product, product↔material, plant↔material,
//! order↔product.
//!
//! The four tables share one shape (two parent references plus a quantity),
//! so a single macro stamps out each repository. Dangling parent ids surface
//! as `Reference` through foreign-key enforcement on the insert/update
//! itself; there is no separate existence probe to race against.

macro_rules! join_repo {
    (
        $mod_name:ident, $table:literal, $label:literal,
        $row:ident, $new:ident, $patch:ident, $fk_a:ident, $fk_b:ident
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
                    stringify!($fk_a),
                    ", ",
                    stringify!($fk_b),
                    ", quantity) VALUES (?, ?, ?) RETURNING id, ",
                    stringify!($fk_a),
                    ", ",
                    stringify!($fk_b),
                    ", quantity"
                ))
                .bind(input.$fk_a)
                .bind(input.$fk_b)
                .bind(input.quantity)
                .fetch_one(pool)
                .await
                .map_err(|e| map_write_err(e, $label))
            }

            pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<$row>, AppError> {
                let row = sqlx::query_as::<_, $row>(concat!(
                    "SELECT id, ",
                    stringify!($fk_a),
                    ", ",
                    stringify!($fk_b),
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
                    stringify!($fk_a),
                    ", ",
                    stringify!($fk_b),
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
                    stringify!($fk_a),
                    ", ",
                    stringify!($fk_b),
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
                    stringify!($fk_a),
                    " = ?, ",
                    stringify!($fk_b),
                    " = ?, quantity = ? WHERE id = ?"
                ))
                .bind(row.$fk_a)
                .bind(row.$fk_b)
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

join_repo!(
    plant_products,
    "plants_products",
    "plant_product",
    PlantProduct,
    NewPlantProduct,
    PlantProductPatch,
    plant_id,
    product_id
);
join_repo!(
    product_materials,
    "products_materials",
    "product_material",
    ProductMaterial,
    NewProductMaterial,
    ProductMaterialPatch,
    product_id,
    material_id
);
join_repo!(
    plant_materials,
    "plants_materials",
    "plant_material",
    PlantMaterial,
    NewPlantMaterial,
    PlantMaterialPatch,
    plant_id,
    material_id
);
join_repo!(
    order_products,
    "orders_products",
    "order_product",
    OrderProduct,
    NewOrderProduct,
    OrderProductPatch,
    order_id,
    product_id
);
