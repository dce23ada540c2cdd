//! Tag API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::error::{AppError, ErrorCode};
use shared::models::{Tag, TagCreate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// GET /api/tags
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, ServiceError> {
    let tags = db::tags::find_all(&state.pool).await?;
    Ok(Json(tags))
}

/// POST /api/tags
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TagCreate>,
) -> Result<Json<Tag>, ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Tag name must not be empty").into());
    }

    if db::tags::find_by_name(&state.pool, &payload.name)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::TagNameExists).into());
    }

    let tag = db::tags::create(&state.pool, &payload).await?;
    Ok(Json(tag))
}

/// DELETE /api/tags/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServiceError> {
    let removed = db::tags::delete(&state.pool, &id).await?;
    Ok(Json(removed))
}
