use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{Product, ProductCreate, ProductUpdate};

/// List products, optionally scoped to one vendor
pub async fn find_all(pool: &PgPool, vendor_id: Option<&str>) -> Result<Vec<Product>, sqlx::Error> {
    match vendor_id {
        Some(vid) => {
            sqlx::query_as("SELECT * FROM products WHERE vendor_id = $1 ORDER BY created_at DESC")
                .bind(vid)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query_as("SELECT * FROM products ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, data: &ProductCreate) -> Result<Product, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO products (id, vendor_id, title, description, daily_price, images, tags, is_published)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING *",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&data.vendor_id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.daily_price)
    .bind(data.images.clone().unwrap_or_default())
    .bind(data.tags.clone().unwrap_or_default())
    .bind(data.is_published.unwrap_or(false))
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &ProductUpdate,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE products SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            daily_price = COALESCE($3, daily_price),
            images = COALESCE($4, images),
            tags = COALESCE($5, tags),
            is_published = COALESCE($6, is_published),
            updated_at = now()
         WHERE id = $7
         RETURNING *",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.daily_price)
    .bind(data.images.clone())
    .bind(data.tags.clone())
    .bind(data.is_published)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
