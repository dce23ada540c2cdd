use sqlx::PgPool;
use uuid::Uuid;

use shared::models::{Tag, TagCreate};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tags ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tags WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, data: &TagCreate) -> Result<Tag, sqlx::Error> {
    sqlx::query_as("INSERT INTO tags (id, name) VALUES ($1, $2) RETURNING *")
        .bind(Uuid::new_v4().to_string())
        .bind(&data.name)
        .fetch_one(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tags WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
