//! Unified error codes for the Rentiva platform
//!
//! This module defines all error codes used across the admin server and its
//! dashboard clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Vendor errors
//! - 2xxx: Product errors
//! - 3xxx: Order errors
//! - 4xxx: Delivery errors
//! - 5xxx: Payment errors
//! - 6xxx: Coupon errors
//! - 7xxx: Tag errors
//! - 8xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Vendor ====================
    /// Vendor not found
    VendorNotFound = 1001,
    /// Vendor business name already exists
    VendorNameExists = 1002,
    /// Vendor is suspended
    VendorSuspended = 1003,
    /// Vendor email already registered
    VendorEmailExists = 1004,

    // ==================== 2xxx: Product ====================
    /// Product not found
    ProductNotFound = 2001,
    /// Product has invalid price
    ProductInvalidPrice = 2002,
    /// Product is not published
    ProductUnpublished = 2003,

    // ==================== 3xxx: Order ====================
    /// Order not found
    OrderNotFound = 3001,
    /// Order item not found
    OrderItemNotFound = 3002,
    /// Order status string not recognized
    OrderStatusInvalid = 3003,
    /// Attempt to change an immutable order field
    OrderImmutableField = 3004,

    // ==================== 4xxx: Delivery ====================
    /// Delivery partner not found
    DeliveryPartnerNotFound = 4001,
    /// Delivery partner is inactive
    DeliveryPartnerInactive = 4002,

    // ==================== 5xxx: Payment ====================
    /// Payment status string not recognized
    PaymentStatusInvalid = 5001,
    /// Invalid payment method
    PaymentInvalidMethod = 5002,

    // ==================== 6xxx: Coupon ====================
    /// Coupon not found
    CouponNotFound = 6001,
    /// Coupon code already exists
    CouponCodeExists = 6002,
    /// Coupon has expired
    CouponExpired = 6003,
    /// Coupon usage limit reached
    CouponLimitReached = 6004,

    // ==================== 7xxx: Tag ====================
    /// Tag not found
    TagNotFound = 7001,
    /// Tag name already exists
    TagNameExists = 7002,

    // ==================== 8xxx: Notification ====================
    /// Email send failed
    EmailSendFailed = 8001,
    /// Email recipient missing
    EmailRecipientMissing = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Vendor
            ErrorCode::VendorNotFound => "Vendor not found",
            ErrorCode::VendorNameExists => "Vendor business name already exists",
            ErrorCode::VendorSuspended => "Vendor is suspended",
            ErrorCode::VendorEmailExists => "Vendor email already registered",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::ProductUnpublished => "Product is not published",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::OrderStatusInvalid => "Order status not recognized",
            ErrorCode::OrderImmutableField => "Order field is immutable after creation",

            // Delivery
            ErrorCode::DeliveryPartnerNotFound => "Delivery partner not found",
            ErrorCode::DeliveryPartnerInactive => "Delivery partner is inactive",

            // Payment
            ErrorCode::PaymentStatusInvalid => "Payment status not recognized",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",

            // Coupon
            ErrorCode::CouponNotFound => "Coupon not found",
            ErrorCode::CouponCodeExists => "Coupon code already exists",
            ErrorCode::CouponExpired => "Coupon has expired",
            ErrorCode::CouponLimitReached => "Coupon usage limit reached",

            // Tag
            ErrorCode::TagNotFound => "Tag not found",
            ErrorCode::TagNameExists => "Tag name already exists",

            // Notification
            ErrorCode::EmailSendFailed => "Email send failed",
            ErrorCode::EmailRecipientMissing => "Email recipient missing",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Vendor
            1001 => Ok(ErrorCode::VendorNotFound),
            1002 => Ok(ErrorCode::VendorNameExists),
            1003 => Ok(ErrorCode::VendorSuspended),
            1004 => Ok(ErrorCode::VendorEmailExists),

            // Product
            2001 => Ok(ErrorCode::ProductNotFound),
            2002 => Ok(ErrorCode::ProductInvalidPrice),
            2003 => Ok(ErrorCode::ProductUnpublished),

            // Order
            3001 => Ok(ErrorCode::OrderNotFound),
            3002 => Ok(ErrorCode::OrderItemNotFound),
            3003 => Ok(ErrorCode::OrderStatusInvalid),
            3004 => Ok(ErrorCode::OrderImmutableField),

            // Delivery
            4001 => Ok(ErrorCode::DeliveryPartnerNotFound),
            4002 => Ok(ErrorCode::DeliveryPartnerInactive),

            // Payment
            5001 => Ok(ErrorCode::PaymentStatusInvalid),
            5002 => Ok(ErrorCode::PaymentInvalidMethod),

            // Coupon
            6001 => Ok(ErrorCode::CouponNotFound),
            6002 => Ok(ErrorCode::CouponCodeExists),
            6003 => Ok(ErrorCode::CouponExpired),
            6004 => Ok(ErrorCode::CouponLimitReached),

            // Tag
            7001 => Ok(ErrorCode::TagNotFound),
            7002 => Ok(ErrorCode::TagNameExists),

            // Notification
            8001 => Ok(ErrorCode::EmailSendFailed),
            8002 => Ok(ErrorCode::EmailRecipientMissing),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
