//! Transactional email channel (AWS SES)
//!
//! Two email kinds leave this service: order status updates to customers
//! and assignment notices to delivery partners. Both are fire-and-forget
//! from the caller's point of view — outcomes are logged, never retried.
//!
//! The [`Mailer`] trait is the seam the order-update core depends on;
//! [`SesMailer`] is the production implementation.

use async_trait::async_trait;
use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use shared::models::{OrderStatus, PaymentStatus};
use shared::util::format_date;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One line item in a customer status email
#[derive(Debug, Clone, PartialEq)]
pub struct EmailItem {
    pub title: String,
    pub quantity: i32,
    /// First product image, if any
    pub image: Option<String>,
}

/// Payload for the customer order-status email
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatusEmail {
    pub to: String,
    pub customer_name: String,
    pub order_number: String,
    pub new_status: OrderStatus,
    pub previous_status: OrderStatus,
    pub order_date: NaiveDate,
    pub rental_start: NaiveDate,
    pub rental_end: NaiveDate,
    pub rental_days: i64,
    pub total_amount: Decimal,
    pub items: Vec<EmailItem>,
    pub notes: Option<String>,
}

/// Payload for the delivery-partner assignment email
///
/// Address and payment fields carry the *final* values of the update that
/// triggered the notification (the updated value if present in the
/// request, else the pre-update one).
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerAssignmentEmail {
    pub to: String,
    pub partner_name: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub rental_start: NaiveDate,
    pub rental_end: NaiveDate,
}

/// Email channel seam
///
/// Implementations must be cheap to clone behind an `Arc` and safe to call
/// concurrently. Errors are returned to the caller for logging only; they
/// must never abort an order update.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_status_update(&self, email: &OrderStatusEmail) -> Result<(), BoxError>;
    async fn send_partner_assignment(&self, email: &PartnerAssignmentEmail)
    -> Result<(), BoxError>;
}

/// Production mailer backed by AWS SES
pub struct SesMailer {
    ses: SesClient,
    from: String,
}

impl SesMailer {
    pub fn new(ses: SesClient, from: String) -> Self {
        Self { ses, from }
    }

    async fn send(&self, to: &str, subject: String, body_text: String) -> Result<(), BoxError> {
        let subject = Content::builder().data(subject).build()?;

        let body = Body::builder()
            .text(Content::builder().data(body_text).build()?)
            .build();

        let message = Message::builder().subject(subject).body(body).build();

        self.ses
            .send_email()
            .from_email_address(&self.from)
            .destination(Destination::builder().to_addresses(to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send_status_update(&self, email: &OrderStatusEmail) -> Result<(), BoxError> {
        let subject = status_update_subject(email);
        let body = status_update_body(email);

        self.send(&email.to, subject, body).await?;

        tracing::info!(
            to = %email.to,
            order_number = %email.order_number,
            status = %email.new_status,
            "Order status email sent"
        );
        Ok(())
    }

    async fn send_partner_assignment(
        &self,
        email: &PartnerAssignmentEmail,
    ) -> Result<(), BoxError> {
        let subject = format!(
            "Delivery update for order {} ({})",
            email.order_number, email.payment_status
        );
        let body = partner_assignment_body(email);

        self.send(&email.to, subject, body).await?;

        tracing::info!(
            to = %email.to,
            order_number = %email.order_number,
            "Delivery partner email sent"
        );
        Ok(())
    }
}

fn status_update_subject(email: &OrderStatusEmail) -> String {
    format!(
        "{} Your rental order {} is now {}",
        email.new_status.emoji(),
        email.order_number,
        email.new_status
    )
}

fn status_update_body(email: &OrderStatusEmail) -> String {
    let mut items = String::new();
    for item in &email.items {
        items.push_str(&format!("  - {} x{}\n", item.title, item.quantity));
    }

    let notes = match &email.notes {
        Some(n) if !n.is_empty() => format!("\nNote from the team: {n}\n"),
        _ => String::new(),
    };

    format!(
        "Hi {name},\n\n\
         Your rental order {number} placed on {order_date} has been updated:\n\
         {prev} -> {new}\n\n\
         Rental period: {start} to {end} ({days} days)\n\
         Items:\n{items}\
         Total: {total}\n\
         {notes}\n\
         Thank you for renting with Rentiva!",
        name = email.customer_name,
        number = email.order_number,
        order_date = format_date(email.order_date),
        prev = email.previous_status,
        new = email.new_status,
        start = format_date(email.rental_start),
        end = format_date(email.rental_end),
        days = email.rental_days,
        items = items,
        total = email.total_amount,
        notes = notes,
    )
}

fn partner_assignment_body(email: &PartnerAssignmentEmail) -> String {
    format!(
        "Hi {name},\n\n\
         Delivery details for order {number}:\n\n\
         Customer: {customer}\n\
         Phone: {phone}\n\
         Address: {address}\n\
         Rental period: {start} to {end}\n\
         Payment: {payment_status} ({payment_method})\n\n\
         Please check your dashboard for the full order sheet.",
        name = email.partner_name,
        number = email.order_number,
        customer = email.customer_name,
        phone = email.customer_phone.as_deref().unwrap_or("n/a"),
        address = email.delivery_address.as_deref().unwrap_or("n/a"),
        start = format_date(email.rental_start),
        end = format_date(email.rental_end),
        payment_status = email.payment_status,
        payment_method = email.payment_method.as_deref().unwrap_or("n/a"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_email() -> OrderStatusEmail {
        OrderStatusEmail {
            to: "ana@example.com".to_string(),
            customer_name: "Ana".to_string(),
            order_number: "R-1001".to_string(),
            new_status: OrderStatus::Shipped,
            previous_status: OrderStatus::Processing,
            order_date: NaiveDate::from_ymd_opt(2026, 7, 30).unwrap(),
            rental_start: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            rental_end: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            rental_days: 3,
            total_amount: Decimal::new(12000, 2),
            items: vec![EmailItem {
                title: "Canon EOS R5".to_string(),
                quantity: 1,
                image: None,
            }],
            notes: Some("Courier calls ahead".to_string()),
        }
    }

    #[test]
    fn test_status_subject_carries_emoji() {
        let subject = status_update_subject(&status_email());
        assert!(subject.starts_with("🚚"));
        assert!(subject.contains("R-1001"));
        assert!(subject.contains("shipped"));
    }

    #[test]
    fn test_status_body_lists_items_and_transition() {
        let body = status_update_body(&status_email());
        assert!(body.contains("processing -> shipped"));
        assert!(body.contains("Canon EOS R5 x1"));
        assert!(body.contains("3 days"));
        assert!(body.contains("Courier calls ahead"));
    }

    #[test]
    fn test_partner_body_uses_final_values() {
        let email = PartnerAssignmentEmail {
            to: "driver@example.com".to_string(),
            partner_name: "Marco".to_string(),
            order_number: "R-1001".to_string(),
            customer_name: "Ana".to_string(),
            customer_phone: None,
            delivery_address: Some("Calle Mayor 1".to_string()),
            payment_status: PaymentStatus::Paid,
            payment_method: Some("card".to_string()),
            rental_start: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            rental_end: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        };
        let body = partner_assignment_body(&email);
        assert!(body.contains("Calle Mayor 1"));
        assert!(body.contains("paid (card)"));
        assert!(body.contains("Phone: n/a"));
    }
}
