//! Vendor API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::error::{AppError, ErrorCode};
use shared::models::{Vendor, VendorCreate, VendorUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// GET /api/vendors
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, ServiceError> {
    let vendors = db::vendors::find_all(&state.pool).await?;
    Ok(Json(vendors))
}

/// GET /api/vendors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ServiceError> {
    let vendor = db::vendors::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound).with_detail("id", id))?;
    Ok(Json(vendor))
}

/// POST /api/vendors
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<VendorCreate>,
) -> Result<Json<Vendor>, ServiceError> {
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::validation("Invalid vendor email").into());
    }

    if db::vendors::find_by_email(&state.pool, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::new(ErrorCode::VendorEmailExists).into());
    }

    let vendor = db::vendors::create(&state.pool, &payload).await?;

    tracing::info!(vendor_id = %vendor.id, "Vendor created");
    Ok(Json(vendor))
}

/// PATCH /api/vendors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<VendorUpdate>,
) -> Result<Json<Vendor>, ServiceError> {
    let vendor = db::vendors::update(&state.pool, &id, &payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::VendorNotFound).with_detail("id", id))?;
    Ok(Json(vendor))
}

/// DELETE /api/vendors/{id}
///
/// Fans out over the vendor's products, their order items, earnings and
/// coupons before removing the vendor row — one transaction, children
/// first.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServiceError> {
    let removed = db::vendors::delete_cascade(&state.pool, &id).await?;

    if removed {
        tracing::info!(vendor_id = %id, "Vendor deleted with cascade");
    }
    Ok(Json(removed))
}
