//! HTTP handlers, one module per entity.
//!
//! The four primary entities have hand-written modules; the join and
//! storage handlers are identical in shape and are stamped out by a macro
//! over their repository modules.

pub mod materials;
pub mod orders;
pub mod plants;
pub mod products;

macro_rules! entity_handlers {
    ($mod_name:ident, $repo_parent:ident, $new:ident, $patch:ident, $label:literal) => {
        pub mod $mod_name {
            use crate::error::AppError;
            use crate::model::{$new, $patch};
            use crate::repo::$repo_parent::$mod_name as entity_repo;
            use crate::response;
            use crate::state::AppState;
            use axum::{
                extract::{Path, State},
                response::IntoResponse,
                Json,
            };

            pub async fn create(
                State(state): State<AppState>,
                Json(input): Json<$new>,
            ) -> Result<impl IntoResponse, AppError> {
                let row = entity_repo::create(&state.pool, &input).await?;
                Ok(response::created(row))
            }

            pub async fn list(
                State(state): State<AppState>,
            ) -> Result<impl IntoResponse, AppError> {
                let rows = entity_repo::list(&state.pool).await?;
                Ok(response::success_many(rows))
            }

            pub async fn get(
                State(state): State<AppState>,
                Path(id): Path<i64>,
            ) -> Result<impl IntoResponse, AppError> {
                let row = entity_repo::get(&state.pool, id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("{} {}", $label, id)))?;
                Ok(response::success_one(row))
            }

            pub async fn update(
                State(state): State<AppState>,
                Path(id): Path<i64>,
                Json(patch): Json<$patch>,
            ) -> Result<impl IntoResponse, AppError> {
                let row = entity_repo::update(&state.pool, id, patch).await?;
                Ok(response::success_one(row))
            }

            pub async fn delete(
                State(state): State<AppState>,
                Path(id): Path<i64>,
            ) -> Result<impl IntoResponse, AppError> {
                entity_repo::delete(&state.pool, id).await?;
                Ok(response::deleted(id))
            }
        }
    };
}

entity_handlers!(
    plant_products,
    joins,
    NewPlantProduct,
    PlantProductPatch,
    "plant_product"
);
entity_handlers!(
    product_materials,
    joins,
    NewProductMaterial,
    ProductMaterialPatch,
    "product_material"
);
entity_handlers!(
    plant_materials,
    joins,
    NewPlantMaterial,
    PlantMaterialPatch,
    "plant_material"
);
entity_handlers!(
    order_products,
    joins,
    NewOrderProduct,
    OrderProductPatch,
    "order_product"
);
entity_handlers!(
    storage_products,
    storage,
    NewStorageProduct,
    StorageProductPatch,
    "storage_product"
);
entity_handlers!(
    storage_materials,
    storage,
    NewStorageMaterial,
    StorageMaterialPatch,
    "storage_material"
);
