//! Shared types for the Rentiva admin platform
//!
//! Domain models and the unified error stack used by the admin server:
//! business entities (orders, vendors, products, coupons, tags, delivery
//! partners, customer profiles) plus [`ErrorCode`], [`AppError`] and the
//! [`ApiResponse`] envelope.
//!
//! Enable the `db` feature to derive `sqlx::FromRow` on the entity types.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
