//! Order API handlers
//!
//! `PATCH /api/orders/{id}` is the entry point of the order-update core:
//! it accepts any subset of mutable order fields plus `notes`,
//! `updated_by` and `assign_delivery_partner`, and reports success once
//! persistence succeeded regardless of notification outcomes.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{Order, OrderDetail, OrderStatusHistory, OrderUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::orders::{self, PgOrderStore};
use crate::state::AppState;

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/orders — list orders (paginated)
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Order>>, ServiceError> {
    let orders = db::orders::find_all(&state.pool, query.limit, query.offset).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} — order with customer and item details
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let detail = db::orders::find_detailed(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id))?;
    Ok(Json(detail))
}

/// GET /api/orders/{id}/history — status audit trail
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<OrderStatusHistory>>, ServiceError> {
    let history = db::status_history::find_by_order(&state.pool, &id).await?;
    Ok(Json(history))
}

/// PATCH /api/orders/{id} — apply an admin update
///
/// Responds 200 once the order row is persisted; audit-log and email
/// side effects degrade silently. A persistence failure is the only 500.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let store = PgOrderStore::new(state.pool.clone());

    orders::update::apply_update(&store, state.mailer.as_ref(), &id, payload)
        .await
        .map_err(|e| {
            AppError::with_message(ErrorCode::DatabaseError, "Failed to update order")
                .with_detail("details", e.to_string())
        })?;

    Ok(Json(ApiResponse::ok_with_message(
        "Order updated successfully",
    )))
}
