//! Status transition validator
//!
//! Normalizes a raw update request into the changeset to persist. The
//! transition graph itself is advisory — any status may follow any other,
//! admins correct orders manually — the one hard rule is that cancelling
//! an order cancels its payment. `notes` and `updated_by` never reach the
//! order row; they are routed to the audit log by the orchestrator.

use chrono::{DateTime, Utc};

use shared::models::{OrderChangeSet, OrderUpdate, PaymentStatus};

/// Produce the normalized field set to persist for one update
pub fn normalize(update: &OrderUpdate, now: DateTime<Utc>) -> OrderChangeSet {
    let mut payment_status = update.payment_status;

    // Cancelling the order overrides any explicitly supplied payment status.
    if update.status.is_some_and(|s| s.is_cancelled()) {
        payment_status = Some(PaymentStatus::Cancelled);
    }

    // An empty partner id means the same as an explicit null: unassign.
    let delivery_partner_id = update
        .delivery_partner_id
        .as_ref()
        .map(|v| v.as_deref().filter(|s| !s.is_empty()).map(String::from));

    OrderChangeSet {
        status: update.status,
        payment_status,
        delivery_partner_id,
        delivery_address: update.delivery_address.clone(),
        payment_method: update.payment_method.clone(),
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderStatus;

    #[test]
    fn test_cancel_forces_payment_cancelled() {
        let update = OrderUpdate {
            status: Some(OrderStatus::Cancelled),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.status, Some(OrderStatus::Cancelled));
        assert_eq!(changes.payment_status, Some(PaymentStatus::Cancelled));
    }

    #[test]
    fn test_cancel_without_payment_status_still_cancels_payment() {
        let update = OrderUpdate {
            status: Some(OrderStatus::Cancelled),
            ..Default::default()
        };
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.payment_status, Some(PaymentStatus::Cancelled));
    }

    #[test]
    fn test_mixed_case_cancel_from_wire() {
        // Case-insensitivity lives at the parse boundary; a "CANCELLED"
        // body arrives here as the same enum value.
        let update: OrderUpdate =
            serde_json::from_str(r#"{"status": "CANCELLED", "payment_status": "paid"}"#).unwrap();
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.payment_status, Some(PaymentStatus::Cancelled));
    }

    #[test]
    fn test_non_cancel_passes_payment_through() {
        let update = OrderUpdate {
            status: Some(OrderStatus::Confirmed),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.payment_status, Some(PaymentStatus::Paid));
    }

    #[test]
    fn test_empty_partner_id_clears_assignment() {
        let update = OrderUpdate {
            delivery_partner_id: Some(Some(String::new())),
            ..Default::default()
        };
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.delivery_partner_id, Some(None));
    }

    #[test]
    fn test_partner_id_absent_stays_absent() {
        let update = OrderUpdate::default();
        let changes = normalize(&update, Utc::now());
        assert_eq!(changes.delivery_partner_id, None);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_updated_at_stamped() {
        let now = Utc::now();
        let update = OrderUpdate {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        let changes = normalize(&update, now);
        assert_eq!(changes.updated_at, now);
        assert!(!changes.is_empty());
    }
}
