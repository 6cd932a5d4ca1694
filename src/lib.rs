//! Manufactory: CRUD REST backend for a small manufacturing domain
//! (plants, products, materials, orders, storage) over SQLite.

pub mod db;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod repo;
pub mod response;
pub mod routes;
pub mod state;

pub use db::connect_pool;
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{common_routes, entity_routes};
pub use state::AppState;
