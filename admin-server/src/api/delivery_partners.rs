//! Delivery Partner API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::error::{AppError, ErrorCode};
use shared::models::{DeliveryPartner, DeliveryPartnerCreate, DeliveryPartnerUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// GET /api/delivery-partners
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryPartner>>, ServiceError> {
    let partners = db::delivery_partners::find_all(&state.pool).await?;
    Ok(Json(partners))
}

/// GET /api/delivery-partners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeliveryPartner>, ServiceError> {
    let partner = db::delivery_partners::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DeliveryPartnerNotFound).with_detail("id", id))?;
    Ok(Json(partner))
}

/// POST /api/delivery-partners
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DeliveryPartnerCreate>,
) -> Result<Json<DeliveryPartner>, ServiceError> {
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::validation("Invalid delivery partner email").into());
    }

    let partner = db::delivery_partners::create(&state.pool, &payload).await?;
    Ok(Json(partner))
}

/// PATCH /api/delivery-partners/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryPartnerUpdate>,
) -> Result<Json<DeliveryPartner>, ServiceError> {
    let partner = db::delivery_partners::update(&state.pool, &id, &payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::DeliveryPartnerNotFound).with_detail("id", id))?;
    Ok(Json(partner))
}

/// DELETE /api/delivery-partners/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServiceError> {
    let removed = db::delivery_partners::delete(&state.pool, &id).await?;
    Ok(Json(removed))
}
