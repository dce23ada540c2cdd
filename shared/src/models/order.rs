//! Order Model
//!
//! Rental orders carry two independent lifecycles: the fulfilment `status`
//! and the `payment_status` sub-state. Status changes are audited in
//! `order_status_history` and fan out to customer / delivery-partner
//! notifications; see the admin server's order update module.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::profile::Profile;

/// Order fulfilment status
///
/// Parses case-insensitively ("Cancelled" == "cancelled") and serializes
/// lowercase. The transition graph is advisory: any status may follow any
/// other, admins correct orders manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Emoji used in customer email subject lines
    pub fn emoji(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "⏳",
            OrderStatus::Confirmed => "✓",
            OrderStatus::Processing => "⚙️",
            OrderStatus::Shipped => "🚚",
            OrderStatus::Delivered => "✅",
            OrderStatus::Cancelled | OrderStatus::Rejected => "❌",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

/// Error when parsing an unrecognized order status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct InvalidOrderStatus(pub String);

impl std::str::FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "rejected" => Ok(OrderStatus::Rejected),
            _ => Err(InvalidOrderStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = InvalidOrderStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Payment status sub-state, independent of the fulfilment status
///
/// Same parsing rules as [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

/// Error when parsing an unrecognized payment status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid payment status: {0}")]
pub struct InvalidPaymentStatus(pub String);

impl std::str::FromStr for PaymentStatus {
    type Err = InvalidPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            _ => Err(InvalidPaymentStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = InvalidPaymentStatus;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Order entity
///
/// The item list and customer reference are immutable after creation;
/// `status`, `payment_status`, `delivery_partner_id`, `delivery_address`
/// and `payment_method` are mutable through the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: OrderStatus,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub payment_status: PaymentStatus,
    pub delivery_partner_id: Option<String>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub total_amount: Decimal,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Rental duration in days, at least 1
    pub fn rental_days(&self) -> i64 {
        (self.rental_end_date - self.rental_start_date).num_days().max(1)
    }
}

/// Order item with its price snapshot
///
/// `unit_price` is the product's daily price at order time and is never
/// recomputed from the live product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Order item joined with its product, as read for the pre-update snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItemDetail {
    pub product_id: String,
    pub title: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Product image URLs; the first one (if any) goes into email payloads
    pub images: Vec<String>,
}

/// Pre-update order snapshot
///
/// The full order state joined with customer contact info and item/product
/// data, read immediately before applying a mutation. Used to compute
/// diffs and build notification payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: Order,
    pub customer: Option<Profile>,
    pub items: Vec<OrderItemDetail>,
}

impl OrderDetail {
    /// Customer email if present and non-empty
    pub fn customer_email(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(|c| c.email.as_deref())
            .filter(|e| !e.is_empty())
    }

    /// Customer display name: `name`, then `full_name`, then "Customer"
    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.display_name())
            .unwrap_or("Customer")
    }
}

/// Append-only audit log entry for a status change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderStatusHistory {
    pub id: i64,
    pub order_id: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "String"))]
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
}

/// New history row payload (`id`/`created_at` are assigned by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryRecord {
    pub order_id: String,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub updated_by: String,
}

/// PATCH /api/orders/{id} request body
///
/// Any subset of mutable order fields plus the audit/notification extras.
/// `delivery_partner_id` is doubly optional: an absent field leaves the
/// assignment untouched, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_partner_id: Option<Option<String>>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    /// Free text routed to the audit log, not persisted on the order
    pub notes: Option<String>,
    /// Audit log author, defaults to "admin"
    pub updated_by: Option<String>,
    /// Set by the dashboard when the operator picked a delivery partner
    #[serde(default)]
    pub assign_delivery_partner: bool,
}

impl OrderUpdate {
    /// True when the request carries at least one persistable order field
    pub fn has_field_updates(&self) -> bool {
        self.status.is_some()
            || self.payment_status.is_some()
            || self.delivery_partner_id.is_some()
            || self.delivery_address.is_some()
            || self.payment_method.is_some()
    }
}

/// Distinguishes an absent field from an explicit `null`
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Normalized set of order fields to persist for one update
///
/// Produced by the status transition validator; `updated_at` is always
/// refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderChangeSet {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub delivery_partner_id: Option<Option<String>>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl OrderChangeSet {
    /// True when no order field would be written
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.payment_status.is_none()
            && self.delivery_partner_id.is_none()
            && self.delivery_address.is_none()
            && self.payment_method.is_none()
    }
}
