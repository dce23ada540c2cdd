//! Product API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::error::{AppError, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// Query params for listing products
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub vendor_id: Option<String>,
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, ServiceError> {
    let products = db::products::find_all(&state.pool, query.vendor_id.as_deref()).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ServiceError> {
    let product = db::products::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreate>,
) -> Result<Json<Product>, ServiceError> {
    if payload.daily_price.is_sign_negative() {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice).into());
    }

    if db::vendors::find_by_id(&state.pool, &payload.vendor_id)
        .await?
        .is_none()
    {
        return Err(AppError::new(ErrorCode::VendorNotFound)
            .with_detail("id", payload.vendor_id.clone())
            .into());
    }

    let product = db::products::create(&state.pool, &payload).await?;
    Ok(Json(product))
}

/// PATCH /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>, ServiceError> {
    if payload.daily_price.is_some_and(|p| p.is_sign_negative()) {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice).into());
    }

    let product = db::products::update(&state.pool, &id, &payload)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ServiceError> {
    let removed = db::products::delete(&state.pool, &id).await?;
    Ok(Json(removed))
}
