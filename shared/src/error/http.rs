//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::VendorNotFound
            | Self::ProductNotFound
            | Self::OrderNotFound
            | Self::OrderItemNotFound
            | Self::DeliveryPartnerNotFound
            | Self::CouponNotFound
            | Self::TagNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::VendorNameExists
            | Self::VendorEmailExists
            | Self::CouponCodeExists
            | Self::TagNameExists => StatusCode::CONFLICT,

            // 403 Forbidden
            Self::VendorSuspended | Self::DeliveryPartnerInactive => StatusCode::FORBIDDEN,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::EmailSendFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
