//! Notification dispatcher
//!
//! Decides which of the two email channels fire for a given update and
//! assembles their payloads. Pure functions over the pre-update snapshot
//! and the normalized changeset; all I/O stays in the orchestrator.

use shared::models::{DeliveryPartner, OrderChangeSet, OrderDetail, OrderStatus};

use crate::email::{EmailItem, OrderStatusEmail, PartnerAssignmentEmail};

/// Customer email fires when the update carries a status (any value, even
/// one equal to the previous status — no dedup) and the snapshot has a
/// non-empty customer email.
pub fn should_notify_customer(changes: &OrderChangeSet, snapshot: &OrderDetail) -> bool {
    changes.status.is_some() && snapshot.customer_email().is_some()
}

/// Evaluate the delivery-partner trigger matrix.
///
/// Returns the partner id to notify when any of these holds:
/// - a partner is being newly assigned (assign flag set, id differs from
///   the pre-update one)
/// - payment status or payment method changed and a partner is or will be
///   assigned
/// - the delivery address changed and a partner is or will be assigned
/// - a previously assigned partner is being cleared (the previous id is
///   the one notified)
///
/// The effective id is the new one if supplied, else the pre-existing one.
pub fn partner_notification_target(
    changes: &OrderChangeSet,
    assign_flag: bool,
    snapshot: &OrderDetail,
) -> Option<String> {
    let previous = snapshot
        .order
        .delivery_partner_id
        .as_deref()
        .filter(|s| !s.is_empty());

    let final_partner = match &changes.delivery_partner_id {
        Some(new) => new.as_deref(),
        None => previous,
    };

    let newly_assigned = assign_flag
        && matches!(&changes.delivery_partner_id, Some(Some(id)) if Some(id.as_str()) != previous);

    let payment_changed = changes
        .payment_status
        .is_some_and(|p| p != snapshot.order.payment_status)
        || changes
            .payment_method
            .as_deref()
            .is_some_and(|m| Some(m) != snapshot.order.payment_method.as_deref());

    let address_changed = changes
        .delivery_address
        .as_deref()
        .is_some_and(|a| Some(a) != snapshot.order.delivery_address.as_deref());

    let assigned_any = previous.is_some() || final_partner.is_some();

    let unassigned = previous.is_some() && matches!(changes.delivery_partner_id, Some(None));

    let triggered =
        newly_assigned || ((payment_changed || address_changed) && assigned_any) || unassigned;

    if !triggered {
        return None;
    }

    match &changes.delivery_partner_id {
        Some(Some(id)) if !id.is_empty() => Some(id.clone()),
        _ => previous.map(String::from),
    }
}

/// Assemble the customer status email from the pre-update snapshot
pub fn build_status_email(
    snapshot: &OrderDetail,
    new_status: OrderStatus,
    notes: Option<&str>,
) -> OrderStatusEmail {
    let order = &snapshot.order;

    OrderStatusEmail {
        to: snapshot.customer_email().unwrap_or_default().to_string(),
        customer_name: snapshot.customer_name().to_string(),
        order_number: order.order_number.clone(),
        new_status,
        previous_status: order.status,
        order_date: order.created_at.date_naive(),
        rental_start: order.rental_start_date,
        rental_end: order.rental_end_date,
        rental_days: order.rental_days(),
        total_amount: order.total_amount,
        items: snapshot
            .items
            .iter()
            .map(|item| EmailItem {
                title: item.title.clone(),
                quantity: item.quantity,
                image: item.images.first().cloned(),
            })
            .collect(),
        notes: notes.map(String::from),
    }
}

/// Assemble the delivery-partner email.
///
/// Address and payment fields carry the final values: the updated value if
/// present in this request, else the pre-update one.
pub fn build_partner_email(
    snapshot: &OrderDetail,
    changes: &OrderChangeSet,
    partner: &DeliveryPartner,
) -> PartnerAssignmentEmail {
    let order = &snapshot.order;

    PartnerAssignmentEmail {
        to: partner.email.clone(),
        partner_name: partner.name.clone(),
        order_number: order.order_number.clone(),
        customer_name: snapshot.customer_name().to_string(),
        customer_phone: snapshot.customer.as_ref().and_then(|c| c.phone.clone()),
        delivery_address: changes
            .delivery_address
            .clone()
            .or_else(|| order.delivery_address.clone()),
        payment_status: changes.payment_status.unwrap_or(order.payment_status),
        payment_method: changes
            .payment_method
            .clone()
            .or_else(|| order.payment_method.clone()),
        rental_start: order.rental_start_date,
        rental_end: order.rental_end_date,
    }
}
