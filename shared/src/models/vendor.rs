//! Vendor Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Vendor {
    pub id: String,
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// pending | active | suspended
    pub status: String,
    /// Platform commission in percent
    pub commission_rate: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create vendor payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorCreate {
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub commission_rate: Option<Decimal>,
}

/// Update vendor payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorUpdate {
    pub business_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub commission_rate: Option<Decimal>,
}
