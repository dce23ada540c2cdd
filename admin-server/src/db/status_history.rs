use sqlx::PgPool;

use shared::models::{OrderStatusHistory, StatusHistoryRecord};

/// Append one audit row for a status change. Rows are never updated or
/// deleted here; cascade delete of the parent order is the only removal.
pub async fn insert(pool: &PgPool, record: &StatusHistoryRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO order_status_history (order_id, status, notes, updated_by)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&record.order_id)
    .bind(record.status.as_str())
    .bind(&record.notes)
    .bind(&record.updated_by)
    .execute(pool)
    .await?;
    Ok(())
}

/// Full history for one order, oldest first
pub async fn find_by_order(
    pool: &PgPool,
    order_id: &str,
) -> Result<Vec<OrderStatusHistory>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM order_status_history WHERE order_id = $1 ORDER BY created_at, id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
}
