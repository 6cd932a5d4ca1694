//! Schema DDL: one table per domain entity, created if absent.
//!
//! Tables are ordered parent-first so foreign keys always point at an
//! existing table. `AUTOINCREMENT` keeps primary keys monotonic: an id is
//! never reused after its row is deleted.

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS plants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        location TEXT,
        capacity INTEGER
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT,
        category TEXT NOT NULL,
        price REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS materials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT,
        unit TEXT,
        cost REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_date TEXT NOT NULL,
        customer_name TEXT NOT NULL,
        status TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS plants_products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plant_id INTEGER NOT NULL REFERENCES plants(id),
        product_id INTEGER NOT NULL REFERENCES products(id),
        quantity REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products_materials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL REFERENCES products(id),
        material_id INTEGER NOT NULL REFERENCES materials(id),
        quantity REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS plants_materials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plant_id INTEGER NOT NULL REFERENCES plants(id),
        material_id INTEGER NOT NULL REFERENCES materials(id),
        quantity REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders_products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL REFERENCES orders(id),
        product_id INTEGER NOT NULL REFERENCES products(id),
        quantity INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS storage_products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_id INTEGER NOT NULL REFERENCES products(id),
        quantity INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS storage_materials (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        material_id INTEGER NOT NULL REFERENCES materials(id),
        quantity INTEGER NOT NULL
    )
    "#,
];

/// Create all tables if they do not exist. Idempotent; safe to run at every
/// startup.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES.iter().copied() {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("schema ensured ({} tables)", TABLES.len());
    Ok(())
}
