use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{DeliveryPartner, DeliveryPartnerCreate, DeliveryPartnerUpdate};

pub async fn find_all(pool: &PgPool) -> Result<Vec<DeliveryPartner>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM delivery_partners ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<DeliveryPartner>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM delivery_partners WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    data: &DeliveryPartnerCreate,
) -> Result<DeliveryPartner, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO delivery_partners (id, name, email, phone, vehicle_type)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.vehicle_type)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: &str,
    data: &DeliveryPartnerUpdate,
) -> Result<Option<DeliveryPartner>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE delivery_partners SET
            name = COALESCE($1, name),
            email = COALESCE($2, email),
            phone = COALESCE($3, phone),
            vehicle_type = COALESCE($4, vehicle_type),
            is_active = COALESCE($5, is_active),
            updated_at = now()
         WHERE id = $6
         RETURNING *",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.vehicle_type)
    .bind(data.is_active)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM delivery_partners WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
