//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rental product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: String,
    /// Owning vendor reference
    pub vendor_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Rental price per day
    pub daily_price: Decimal,
    /// Image URLs, first one is the cover
    pub images: Vec<String>,
    /// Tag names attached to this product
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub vendor_id: String,
    pub title: String,
    pub description: Option<String>,
    pub daily_price: Decimal,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub daily_price: Option<Decimal>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}
