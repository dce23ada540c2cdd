use sqlx::PgPool;

use shared::models::{Order, OrderChangeSet, OrderDetail, OrderItemDetail, Profile};

/// List orders, newest first
pub async fn find_all(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders ORDER BY created_at DESC LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Read the order joined with its customer profile and item/product data.
///
/// This is the pre-update snapshot shape: everything the notification
/// payloads need in one read.
pub async fn find_detailed(pool: &PgPool, id: &str) -> Result<Option<OrderDetail>, sqlx::Error> {
    let order: Option<Order> = sqlx::query_as("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(order) = order else {
        return Ok(None);
    };

    let customer: Option<Profile> =
        sqlx::query_as("SELECT id, name, full_name, email, phone FROM profiles WHERE id = $1")
            .bind(&order.customer_id)
            .fetch_optional(pool)
            .await?;

    let items: Vec<OrderItemDetail> = sqlx::query_as(
        "SELECT oi.product_id, p.title, oi.quantity, oi.unit_price, p.images
         FROM order_items oi
         JOIN products p ON p.id = oi.product_id
         WHERE oi.order_id = $1",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(OrderDetail {
        order,
        customer,
        items,
    }))
}

/// Apply a normalized changeset to one order.
///
/// Built dynamically because `delivery_partner_id` supports an explicit
/// NULL write (unassignment), which a static COALESCE query cannot express.
pub async fn update(pool: &PgPool, id: &str, changes: &OrderChangeSet) -> Result<(), sqlx::Error> {
    let mut qb: sqlx::QueryBuilder<sqlx::Postgres> = sqlx::QueryBuilder::new("UPDATE orders SET ");
    let mut sep = qb.separated(", ");

    if let Some(status) = changes.status {
        sep.push("status = ").push_bind_unseparated(status.as_str());
    }
    if let Some(payment_status) = changes.payment_status {
        sep.push("payment_status = ")
            .push_bind_unseparated(payment_status.as_str());
    }
    if let Some(partner_id) = &changes.delivery_partner_id {
        sep.push("delivery_partner_id = ")
            .push_bind_unseparated(partner_id.clone());
    }
    if let Some(address) = &changes.delivery_address {
        sep.push("delivery_address = ")
            .push_bind_unseparated(address.clone());
    }
    if let Some(method) = &changes.payment_method {
        sep.push("payment_method = ")
            .push_bind_unseparated(method.clone());
    }
    sep.push("updated_at = ")
        .push_bind_unseparated(changes.updated_at);

    qb.push(" WHERE id = ").push_bind(id);

    qb.build().execute(pool).await?;
    Ok(())
}
