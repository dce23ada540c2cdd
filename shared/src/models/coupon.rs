//! Coupon Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor-scoped discount coupon
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Coupon {
    pub id: String,
    pub vendor_id: String,
    pub code: String,
    /// percent | fixed
    pub discount_type: String,
    pub discount_value: Decimal,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub usage_limit: Option<i32>,
    pub times_used: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponCreate {
    pub vendor_id: String,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub usage_limit: Option<i32>,
}

/// Update coupon payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub code: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<Decimal>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub usage_limit: Option<i32>,
    pub is_active: Option<bool>,
}
