//! Coupon API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{Coupon, CouponCreate, CouponUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// Query params for listing coupons
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub vendor_id: Option<String>,
}

/// GET /api/coupons
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Coupon>>, ServiceError> {
    let coupons = db::coupons::find_all(&state.pool, query.vendor_id.as_deref()).await?;
    Ok(Json(coupons))
}

/// POST /api/coupons
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CouponCreate>,
) -> Result<Json<Coupon>, ServiceError> {
    if payload.valid_until < payload.valid_from {
        return Err(AppError::validation("Coupon validity window is inverted").into());
    }

    if db::coupons::find_by_code(&state.pool, &payload.vendor_id, &payload.code)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::CouponCodeExists).into());
    }

    let coupon = db::coupons::create(&state.pool, &payload).await?;
    Ok(Json(coupon))
}

/// PATCH /api/coupons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CouponUpdate>,
) -> Result<Json<Coupon>, ServiceError> {
    let coupon = db::coupons::update(&state.pool, &id, &payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CouponNotFound).with_detail("id", id))?;
    Ok(Json(coupon))
}

/// DELETE /api/coupons/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServiceError> {
    let removed = db::coupons::delete(&state.pool, &id).await?;
    Ok(Json(removed))
}
