//! Entity CRUD routes: POST /{es}, GET /{es}, GET/PUT/DELETE /{es}/:id
//! for every table in the schema.

use crate::handlers::{
    materials, order_products, orders, plant_materials, plant_products, plants,
    product_materials, products, storage_materials, storage_products,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/plants", get(plants::list).post(plants::create))
        .route(
            "/plants/:id",
            get(plants::get).put(plants::update).delete(plants::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/materials", get(materials::list).post(materials::create))
        .route(
            "/materials/:id",
            get(materials::get)
                .put(materials::update)
                .delete(materials::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        .route(
            "/plant-products",
            get(plant_products::list).post(plant_products::create),
        )
        .route(
            "/plant-products/:id",
            get(plant_products::get)
                .put(plant_products::update)
                .delete(plant_products::delete),
        )
        .route(
            "/product-materials",
            get(product_materials::list).post(product_materials::create),
        )
        .route(
            "/product-materials/:id",
            get(product_materials::get)
                .put(product_materials::update)
                .delete(product_materials::delete),
        )
        .route(
            "/plant-materials",
            get(plant_materials::list).post(plant_materials::create),
        )
        .route(
            "/plant-materials/:id",
            get(plant_materials::get)
                .put(plant_materials::update)
                .delete(plant_materials::delete),
        )
        .route(
            "/order-products",
            get(order_products::list).post(order_products::create),
        )
        .route(
            "/order-products/:id",
            get(order_products::get)
                .put(order_products::update)
                .delete(order_products::delete),
        )
        .route(
            "/storage-products",
            get(storage_products::list).post(storage_products::create),
        )
        .route(
            "/storage-products/:id",
            get(storage_products::get)
                .put(storage_products::update)
                .delete(storage_products::delete),
        )
        .route(
            "/storage-materials",
            get(storage_materials::list).post(storage_materials::create),
        )
        .route(
            "/storage-materials/:id",
            get(storage_materials::get)
                .put(storage_materials::update)
                .delete(storage_materials::delete),
        )
        .with_state(state)
}
