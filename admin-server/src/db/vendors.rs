use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{Vendor, VendorCreate, VendorUpdate};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM vendors ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Vendor>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM vendors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Vendor>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM vendors WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, data: &VendorCreate) -> Result<Vendor, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO vendors (id, business_name, email, phone, status, commission_rate)
         VALUES ($1, $2, $3, $4, 'pending', $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&data.business_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.commission_rate.unwrap_or(Decimal::new(10, 0)))
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &VendorUpdate,
) -> Result<Option<Vendor>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE vendors SET
            business_name = COALESCE($1, business_name),
            email = COALESCE($2, email),
            phone = COALESCE($3, phone),
            status = COALESCE($4, status),
            commission_rate = COALESCE($5, commission_rate),
            updated_at = now()
         WHERE id = $6
         RETURNING *",
    )
    .bind(&data.business_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.status)
    .bind(data.commission_rate)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Remove a vendor and everything hanging off it.
///
/// Sequential fan-out inside one transaction, children before parents:
/// order items referencing the vendor's products, then the products,
/// earnings, coupons, and finally the vendor row itself.
pub async fn delete_cascade(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM order_items
         WHERE product_id IN (SELECT id FROM products WHERE vendor_id = $1)",
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM products WHERE vendor_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM earnings WHERE vendor_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM coupons WHERE vendor_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
