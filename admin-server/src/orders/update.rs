//! Order update orchestrator
//!
//! Sequences a single order mutation end-to-end: normalize, snapshot,
//! persist, audit, notify. Persistence is the only fatal step; the audit
//! row and both notification channels are fire-and-forget and individually
//! fault-isolated, so an email-provider outage never blocks an update.
//!
//! Each call is a fresh read-modify-write-notify cycle — no state is held
//! across requests, and two concurrent updates to the same order race at
//! the store (accepted best-effort model, no locking here).

use shared::models::{OrderUpdate, StatusHistoryRecord};

use super::notify;
use super::store::{OrderStore, StoreError};
use super::transition;
use crate::email::Mailer;

/// Apply one admin update to an order.
///
/// Returns `Err` only when persisting the changeset fails; every other
/// step degrades to a logged no-op.
pub async fn apply_update(
    store: &dyn OrderStore,
    mailer: &dyn Mailer,
    order_id: &str,
    update: OrderUpdate,
) -> Result<(), StoreError> {
    let changes = transition::normalize(&update, chrono::Utc::now());

    // The snapshot feeds the audit row and both notification payloads.
    // Read it before writing whenever this update can trigger a side
    // effect; its loss skips the side effects, never the update.
    let wants_side_effects = changes.status.is_some()
        || update.assign_delivery_partner
        || changes.delivery_partner_id.is_some()
        || changes.payment_status.is_some()
        || changes.payment_method.is_some()
        || changes.delivery_address.is_some();

    let snapshot = if wants_side_effects {
        match store.find_detailed(order_id).await {
            Ok(Some(detail)) => Some(detail),
            Ok(None) => {
                tracing::warn!(
                    order_id = %order_id,
                    "Order not found for pre-update snapshot, skipping notifications"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    order_id = %order_id,
                    error = %e,
                    "Pre-update snapshot fetch failed, skipping notifications"
                );
                None
            }
        }
    } else {
        None
    };

    // Persistence is authoritative: a failure here aborts the request and
    // no further side effects are attempted.
    if !changes.is_empty() {
        store.update_order(order_id, &changes).await?;
    }

    let Some(snapshot) = snapshot else {
        return Ok(());
    };

    // Exactly one audit row per status-changing update. Audit loss must
    // not fail the user-facing update either.
    if let Some(status) = changes.status {
        let record = StatusHistoryRecord {
            order_id: order_id.to_string(),
            status,
            notes: update.notes.clone(),
            updated_by: update
                .updated_by
                .clone()
                .unwrap_or_else(|| "admin".to_string()),
        };
        if let Err(e) = store.insert_status_history(&record).await {
            tracing::warn!(order_id = %order_id, error = %e, "Status history insert failed");
        }
    }

    // The two notification channels are independent: run them concurrently,
    // each capturing its own failure.
    let customer_side = async {
        if notify::should_notify_customer(&changes, &snapshot)
            && let Some(status) = changes.status
        {
            let email = notify::build_status_email(&snapshot, status, update.notes.as_deref());
            if let Err(e) = mailer.send_status_update(&email).await {
                tracing::warn!(order_id = %order_id, error = %e, "Customer status email failed");
            }
        }
    };

    let partner_side = async {
        let Some(partner_id) =
            notify::partner_notification_target(&changes, update.assign_delivery_partner, &snapshot)
        else {
            return;
        };
        match store.find_delivery_partner(&partner_id).await {
            Ok(Some(partner)) => {
                let email = notify::build_partner_email(&snapshot, &changes, &partner);
                if let Err(e) = mailer.send_partner_assignment(&email).await {
                    tracing::warn!(
                        order_id = %order_id,
                        partner_id = %partner_id,
                        error = %e,
                        "Delivery partner email failed"
                    );
                }
            }
            Ok(None) => {
                tracing::warn!(
                    order_id = %order_id,
                    partner_id = %partner_id,
                    "Delivery partner not found, notification skipped"
                );
            }
            Err(e) => {
                tracing::warn!(
                    order_id = %order_id,
                    partner_id = %partner_id,
                    error = %e,
                    "Delivery partner lookup failed, notification skipped"
                );
            }
        }
    };

    tokio::join!(customer_side, partner_side);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::email::{OrderStatusEmail, PartnerAssignmentEmail};
    use shared::models::{
        DeliveryPartner, Order, OrderChangeSet, OrderDetail, OrderStatus, PaymentStatus, Profile,
    };

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Default)]
    struct MockStore {
        detail: Option<OrderDetail>,
        partner: Option<DeliveryPartner>,
        fail_snapshot: bool,
        fail_update: bool,
        fail_history: bool,
        fail_partner_lookup: bool,
        updates: Mutex<Vec<OrderChangeSet>>,
        history: Mutex<Vec<StatusHistoryRecord>>,
        partner_lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl OrderStore for MockStore {
        async fn find_detailed(&self, _order_id: &str) -> Result<Option<OrderDetail>, StoreError> {
            if self.fail_snapshot {
                return Err(StoreError("snapshot read failed".to_string()));
            }
            Ok(self.detail.clone())
        }

        async fn update_order(
            &self,
            _order_id: &str,
            changes: &OrderChangeSet,
        ) -> Result<(), StoreError> {
            if self.fail_update {
                return Err(StoreError("update failed".to_string()));
            }
            self.updates.lock().unwrap().push(changes.clone());
            Ok(())
        }

        async fn insert_status_history(
            &self,
            record: &StatusHistoryRecord,
        ) -> Result<(), StoreError> {
            if self.fail_history {
                return Err(StoreError("history insert failed".to_string()));
            }
            self.history.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn find_delivery_partner(
            &self,
            id: &str,
        ) -> Result<Option<DeliveryPartner>, StoreError> {
            self.partner_lookups.lock().unwrap().push(id.to_string());
            if self.fail_partner_lookup {
                return Err(StoreError("partner lookup failed".to_string()));
            }
            Ok(self.partner.clone())
        }
    }

    #[derive(Default)]
    struct MockMailer {
        fail: bool,
        status_emails: Mutex<Vec<OrderStatusEmail>>,
        partner_emails: Mutex<Vec<PartnerAssignmentEmail>>,
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send_status_update(&self, email: &OrderStatusEmail) -> Result<(), BoxError> {
            if self.fail {
                return Err("smtp down".into());
            }
            self.status_emails.lock().unwrap().push(email.clone());
            Ok(())
        }

        async fn send_partner_assignment(
            &self,
            email: &PartnerAssignmentEmail,
        ) -> Result<(), BoxError> {
            if self.fail {
                return Err("smtp down".into());
            }
            self.partner_emails.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn detail(
        partner: Option<&str>,
        payment_status: PaymentStatus,
        email: Option<&str>,
    ) -> OrderDetail {
        OrderDetail {
            order: Order {
                id: "o1".to_string(),
                order_number: "R-1001".to_string(),
                customer_id: "c1".to_string(),
                status: OrderStatus::Pending,
                payment_status,
                delivery_partner_id: partner.map(String::from),
                delivery_address: Some("Calle Mayor 1".to_string()),
                payment_method: Some("card".to_string()),
                total_amount: Decimal::new(12000, 2),
                rental_start_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
                rental_end_date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            customer: Some(Profile {
                id: "c1".to_string(),
                name: Some("Ana".to_string()),
                full_name: None,
                email: email.map(String::from),
                phone: None,
            }),
            items: vec![],
        }
    }

    fn partner(id: &str) -> DeliveryPartner {
        DeliveryPartner {
            id: id.to_string(),
            name: "Marco".to_string(),
            email: "marco@example.com".to_string(),
            phone: None,
            vehicle_type: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_cancel_forces_payment_cancelled_and_audits() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, Some("ana@example.com"))),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Cancelled),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        let updates = store.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].status, Some(OrderStatus::Cancelled));
        assert_eq!(updates[0].payment_status, Some(PaymentStatus::Cancelled));

        let history = store.history.lock().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, OrderStatus::Cancelled);

        // Customer email fires, no partner was ever assigned
        assert_eq!(mailer.status_emails.lock().unwrap().len(), 1);
        assert!(mailer.partner_emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_defaults_author_to_admin() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Confirmed),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        let history = store.history.lock().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].updated_by, "admin");
        assert_eq!(history[0].notes, None);
    }

    #[tokio::test]
    async fn test_history_carries_supplied_author_and_notes() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Processing),
            notes: Some("customer called".to_string()),
            updated_by: Some("vendor:v1".to_string()),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        let history = store.history.lock().unwrap();
        assert_eq!(history[0].updated_by, "vendor:v1");
        assert_eq!(history[0].notes.as_deref(), Some("customer called"));
    }

    #[tokio::test]
    async fn test_duplicate_status_updates_append_two_rows() {
        // No dedup against the previous status: existing behavior.
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        for _ in 0..2 {
            let update = OrderUpdate {
                status: Some(OrderStatus::Confirmed),
                ..Default::default()
            };
            apply_update(&store, &mailer, "o1", update).await.unwrap();
        }

        assert_eq!(store.history.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_payment_only_update_sends_no_customer_email_and_no_history() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, Some("ana@example.com"))),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(store.updates.lock().unwrap().len(), 1);
        assert!(store.history.lock().unwrap().is_empty());
        assert!(mailer.status_emails.lock().unwrap().is_empty());
        // No partner assigned anywhere: partner channel silent too
        assert!(mailer.partner_emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_status_update_without_customer_email_still_audits() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(store.history.lock().unwrap().len(), 1);
        assert!(mailer.status_emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partner_email_on_new_assignment() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            partner: Some(partner("P1")),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            assign_delivery_partner: true,
            delivery_partner_id: Some(Some("P1".to_string())),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(*store.partner_lookups.lock().unwrap(), vec!["P1"]);
        let emails = mailer.partner_emails.lock().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].to, "marco@example.com");
    }

    #[tokio::test]
    async fn test_partner_email_on_payment_change_of_assigned_order() {
        let store = MockStore {
            detail: Some(detail(Some("P1"), PaymentStatus::Pending, None)),
            partner: Some(partner("P1")),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(*store.partner_lookups.lock().unwrap(), vec!["P1"]);
        let emails = mailer.partner_emails.lock().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].payment_status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn test_partner_email_on_unassignment_uses_previous_id() {
        let store = MockStore {
            detail: Some(detail(Some("P1"), PaymentStatus::Pending, None)),
            partner: Some(partner("P1")),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        // Explicit null clears the assignment
        let update: OrderUpdate =
            serde_json::from_str(r#"{"delivery_partner_id": null}"#).unwrap();
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        let updates = store.updates.lock().unwrap();
        assert_eq!(updates[0].delivery_partner_id, Some(None));
        assert_eq!(*store.partner_lookups.lock().unwrap(), vec!["P1"]);
        assert_eq!(mailer.partner_emails.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fatal_update_failure_aborts_side_effects() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, Some("ana@example.com"))),
            fail_update: true,
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Confirmed),
            ..Default::default()
        };
        let result = apply_update(&store, &mailer, "o1", update).await;

        assert!(result.is_err());
        assert!(store.history.lock().unwrap().is_empty());
        assert!(mailer.status_emails.lock().unwrap().is_empty());
        assert!(mailer.partner_emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_failure_persists_but_skips_side_effects() {
        let store = MockStore {
            fail_snapshot: true,
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        // Update went through, everything downstream was skipped
        assert_eq!(store.updates.lock().unwrap().len(), 1);
        assert!(store.history.lock().unwrap().is_empty());
        assert!(mailer.status_emails.lock().unwrap().is_empty());
        assert!(mailer.partner_emails.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_order_snapshot_behaves_like_fetch_failure() {
        let store = MockStore::default(); // find_detailed -> Ok(None)
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Shipped),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(store.updates.lock().unwrap().len(), 1);
        assert!(store.history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_email_failure_never_fails_the_request() {
        let store = MockStore {
            detail: Some(detail(Some("P1"), PaymentStatus::Pending, Some("ana@example.com"))),
            partner: Some(partner("P1")),
            ..Default::default()
        };
        let mailer = MockMailer {
            fail: true,
            ..Default::default()
        };

        let update = OrderUpdate {
            status: Some(OrderStatus::Delivered),
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert_eq!(store.updates.lock().unwrap().len(), 1);
        assert_eq!(store.history.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_failure_never_fails_the_request() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, Some("ana@example.com"))),
            fail_history: true,
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Confirmed),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        // Customer email still fires after the audit write degraded
        assert_eq!(mailer.status_emails.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_partner_lookup_failure_skips_partner_email() {
        let store = MockStore {
            detail: Some(detail(Some("P1"), PaymentStatus::Pending, None)),
            fail_partner_lookup: true,
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert!(mailer.partner_emails.lock().unwrap().is_empty());
        assert_eq!(store.updates.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_notes_only_request_persists_nothing() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, None)),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            notes: Some("just a note".to_string()),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        assert!(store.updates.lock().unwrap().is_empty());
        assert!(store.history.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_customer_email_carries_previous_status() {
        let store = MockStore {
            detail: Some(detail(None, PaymentStatus::Pending, Some("ana@example.com"))),
            ..Default::default()
        };
        let mailer = MockMailer::default();

        let update = OrderUpdate {
            status: Some(OrderStatus::Confirmed),
            notes: Some("see you Friday".to_string()),
            ..Default::default()
        };
        apply_update(&store, &mailer, "o1", update).await.unwrap();

        let emails = mailer.status_emails.lock().unwrap();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].previous_status, OrderStatus::Pending);
        assert_eq!(emails[0].new_status, OrderStatus::Confirmed);
        assert_eq!(emails[0].notes.as_deref(), Some("see you Friday"));
    }
}
