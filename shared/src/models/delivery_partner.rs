//! Delivery Partner Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery partner entity
///
/// Lifecycle is independent of orders: partners are created, updated and
/// deleted outside the order flow and referenced by at most one order at a
/// time via `orders.delivery_partner_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DeliveryPartner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create delivery partner payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryPartnerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
}

/// Update delivery partner payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryPartnerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub is_active: Option<bool>,
}
