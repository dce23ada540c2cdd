use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{Coupon, CouponCreate, CouponUpdate};

/// List coupons, optionally scoped to one vendor
pub async fn find_all(pool: &PgPool, vendor_id: Option<&str>) -> Result<Vec<Coupon>, sqlx::Error> {
    match vendor_id {
        Some(vid) => {
            sqlx::query_as("SELECT * FROM coupons WHERE vendor_id = $1 ORDER BY created_at DESC")
                .bind(vid)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query_as("SELECT * FROM coupons ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn find_by_code(
    pool: &PgPool,
    vendor_id: &str,
    code: &str,
) -> Result<Option<Coupon>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM coupons WHERE vendor_id = $1 AND code = $2")
        .bind(vendor_id)
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, data: &CouponCreate) -> Result<Coupon, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO coupons
            (id, vendor_id, code, discount_type, discount_value, valid_from, valid_until, usage_limit)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&data.vendor_id)
    .bind(&data.code)
    .bind(&data.discount_type)
    .bind(data.discount_value)
    .bind(data.valid_from)
    .bind(data.valid_until)
    .bind(data.usage_limit)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &CouponUpdate,
) -> Result<Option<Coupon>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE coupons SET
            code = COALESCE($1, code),
            discount_type = COALESCE($2, discount_type),
            discount_value = COALESCE($3, discount_value),
            valid_from = COALESCE($4, valid_from),
            valid_until = COALESCE($5, valid_until),
            usage_limit = COALESCE($6, usage_limit),
            is_active = COALESCE($7, is_active)
         WHERE id = $8
         RETURNING *",
    )
    .bind(&data.code)
    .bind(&data.discount_type)
    .bind(data.discount_value)
    .bind(data.valid_from)
    .bind(data.valid_until)
    .bind(data.usage_limit)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM coupons WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
