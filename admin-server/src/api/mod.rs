//! API routes for admin-server

pub mod coupons;
pub mod delivery_partners;
pub mod health;
pub mod orders;
pub mod products;
pub mod tags;
pub mod vendors;

use axum::Router;
use axum::routing::{delete, get, patch};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let orders = Router::new()
        .route("/api/orders", get(orders::list))
        .route("/api/orders/{id}", get(orders::get_by_id))
        .route("/api/orders/{id}", patch(orders::update))
        .route("/api/orders/{id}/history", get(orders::get_history));

    let vendors = Router::new()
        .route("/api/vendors", get(vendors::list).post(vendors::create))
        .route(
            "/api/vendors/{id}",
            get(vendors::get_by_id)
                .patch(vendors::update)
                .delete(vendors::delete),
        );

    let products = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::get_by_id)
                .patch(products::update)
                .delete(products::delete),
        );

    let tags = Router::new()
        .route("/api/tags", get(tags::list).post(tags::create))
        .route("/api/tags/{id}", delete(tags::delete));

    let coupons = Router::new()
        .route("/api/coupons", get(coupons::list).post(coupons::create))
        .route(
            "/api/coupons/{id}",
            patch(coupons::update).delete(coupons::delete),
        );

    let delivery_partners = Router::new()
        .route(
            "/api/delivery-partners",
            get(delivery_partners::list).post(delivery_partners::create),
        )
        .route(
            "/api/delivery-partners/{id}",
            get(delivery_partners::get_by_id)
                .patch(delivery_partners::update)
                .delete(delivery_partners::delete),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .merge(orders)
        .merge(vendors)
        .merge(products)
        .merge(tags)
        .merge(coupons)
        .merge(delivery_partners)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
