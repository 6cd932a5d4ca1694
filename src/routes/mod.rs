//! Router assembly.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;
