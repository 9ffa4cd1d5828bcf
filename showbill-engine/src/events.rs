//! Notification events
//!
//! Status transitions worth notifying are returned to the caller as
//! named events; an external email/notification layer subscribes and
//! decides whether and how to deliver. The engine never sends
//! anything itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event emitted by a ledger or invoicing operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationEvent {
    /// A reservation's outstanding amount reached zero
    PaidInFull {
        reservation_id: String,
        amount: Decimal,
    },
    /// An invoice left draft status
    InvoiceIssued { invoice_id: String },
    /// An invoice was settled
    InvoicePaid { invoice_id: String },
    /// An invoice passed its due date unpaid
    InvoiceOverdue {
        invoice_id: String,
        due_date: DateTime<Utc>,
    },
}

impl std::fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationEvent::PaidInFull { .. } => write!(f, "PAID_IN_FULL"),
            NotificationEvent::InvoiceIssued { .. } => write!(f, "INVOICE_ISSUED"),
            NotificationEvent::InvoicePaid { .. } => write!(f, "INVOICE_PAID"),
            NotificationEvent::InvoiceOverdue { .. } => write!(f, "INVOICE_OVERDUE"),
        }
    }
}
