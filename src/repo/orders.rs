//! Order repository.

use crate::error::{map_write_err, AppError};
use crate::model::{NewOrder, Order, OrderPatch};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, order_date, customer_name, status";

pub async fn create(pool: &SqlitePool, input: &NewOrder) -> Result<Order, AppError> {
    input.validate()?;
    tracing::debug!(customer = %input.customer_name, "create order");
    sqlx::query_as::<_, Order>(
        "INSERT INTO orders (order_date, customer_name, status) VALUES (?, ?, ?) \
         RETURNING id, order_date, customer_name, status",
    )
    .bind(input.order_date)
    .bind(&input.customer_name)
    .bind(&input.status)
    .fetch_one(pool)
    .await
    .map_err(|e| map_write_err(e, "order"))
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Order>, AppError> {
    let row = sqlx::query_as::<_, Order>(&format!("SELECT {} FROM orders WHERE id = ?", COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, AppError> {
    let rows = sqlx::query_as::<_, Order>(&format!("SELECT {} FROM orders", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn update(pool: &SqlitePool, id: i64, patch: OrderPatch) -> Result<Order, AppError> {
    patch.validate()?;
    tracing::debug!(id, "update order");
    let mut tx = pool.begin().await?;
    let mut order =
        sqlx::query_as::<_, Order>(&format!("SELECT {} FROM orders WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    order.apply(patch);
    sqlx::query("UPDATE orders SET order_date = ?, customer_name = ?, status = ? WHERE id = ?")
        .bind(order.order_date)
        .bind(&order.customer_name)
        .bind(&order.status)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "order"))?;
    tx.commit().await?;
    Ok(order)
}

/// Deletes an order. Rejected while order line rows still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    tracing::debug!(id, "delete order");
    let mut tx = pool.begin().await?;
    let dependents: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM orders_products WHERE order_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
    if dependents > 0 {
        return Err(AppError::Conflict(format!(
            "order {} is referenced by {} dependent rows",
            id, dependents
        )));
    }
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_err(e, "order"))?;
    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("order {}", id)));
    }
    tx.commit().await?;
    Ok(())
}
