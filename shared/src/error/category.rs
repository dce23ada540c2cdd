//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Vendor errors
/// - 2xxx: Product errors
/// - 3xxx: Order errors
/// - 4xxx: Delivery errors
/// - 5xxx: Payment errors
/// - 6xxx: Coupon errors
/// - 7xxx: Tag errors
/// - 8xxx: Notification errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Vendor errors (1xxx)
    Vendor,
    /// Product errors (2xxx)
    Product,
    /// Order errors (3xxx)
    Order,
    /// Delivery errors (4xxx)
    Delivery,
    /// Payment errors (5xxx)
    Payment,
    /// Coupon errors (6xxx)
    Coupon,
    /// Tag errors (7xxx)
    Tag,
    /// Notification errors (8xxx)
    Notification,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Vendor,
            2000..3000 => Self::Product,
            3000..4000 => Self::Order,
            4000..5000 => Self::Delivery,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Coupon,
            7000..8000 => Self::Tag,
            8000..9000 => Self::Notification,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Order => "order",
            Self::Delivery => "delivery",
            Self::Payment => "payment",
            Self::Coupon => "coupon",
            Self::Tag => "tag",
            Self::Notification => "notification",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Vendor);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Vendor);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Delivery);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Coupon);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Tag);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Notification);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::VendorNotFound.category(), ErrorCategory::Vendor);
        assert_eq!(
            ErrorCode::ProductNotFound.category(),
            ErrorCategory::Product
        );
        assert_eq!(ErrorCode::OrderNotFound.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::DeliveryPartnerNotFound.category(),
            ErrorCategory::Delivery
        );
        assert_eq!(
            ErrorCode::PaymentStatusInvalid.category(),
            ErrorCategory::Payment
        );
        assert_eq!(ErrorCode::CouponNotFound.category(), ErrorCategory::Coupon);
        assert_eq!(ErrorCode::TagNotFound.category(), ErrorCategory::Tag);
        assert_eq!(
            ErrorCode::EmailSendFailed.category(),
            ErrorCategory::Notification
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Vendor.name(), "vendor");
        assert_eq!(ErrorCategory::Product.name(), "product");
        assert_eq!(ErrorCategory::Order.name(), "order");
        assert_eq!(ErrorCategory::Delivery.name(), "delivery");
        assert_eq!(ErrorCategory::Payment.name(), "payment");
        assert_eq!(ErrorCategory::Coupon.name(), "coupon");
        assert_eq!(ErrorCategory::Tag.name(), "tag");
        assert_eq!(ErrorCategory::Notification.name(), "notification");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Vendor;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"vendor\"");

        let category = ErrorCategory::Notification;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"notification\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"vendor\"").unwrap();
        assert_eq!(category, ErrorCategory::Vendor);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
