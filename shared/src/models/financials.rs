//! Booking financial record and payment ledger entries

use super::line_item::{BookingTotals, LineItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Deposit,
    Partial,
    Final,
}

/// One ledger entry, immutable once created; the ledger is append-only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    pub id: Uuid,
    /// Payment amount, always positive
    pub amount: Decimal,
    /// Free-text payment channel ("pin", "bank transfer", ...)
    pub method: String,
    pub date: DateTime<Utc>,
    pub payment_type: PaymentType,
}

/// Financial state persisted on a reservation
///
/// `paid` is always the sum of `payments[].amount`; `is_paid` is
/// re-derived from `paid` against `final_total` whenever either side
/// changes, never carried forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingFinancials {
    pub total: Decimal,
    pub subtotal: Decimal,
    pub discount: Decimal,
    /// Current authoritative amount due
    pub final_total: Decimal,
    /// Sum of all registered payments
    pub paid: Decimal,
    pub is_paid: bool,
    /// Channel of the payment that settled the booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// When the booking became fully paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    pub payments: Vec<PaymentRecord>,
    pub price_breakdown: Vec<LineItem>,
}

impl BookingFinancials {
    /// Create the financial record for a fresh reservation, zero payments
    pub fn from_totals(totals: &BookingTotals) -> Self {
        Self {
            total: totals.amount_due,
            subtotal: totals.subtotal,
            discount: totals.discount_amount,
            final_total: totals.amount_due,
            paid: Decimal::ZERO,
            is_paid: false,
            payment_method: None,
            paid_at: None,
            payments: Vec::new(),
            price_breakdown: totals.items.clone(),
        }
    }

    /// Amount still owed, clamped to zero (overpayment yields zero)
    pub fn outstanding_amount(&self) -> Decimal {
        (self.final_total - self.paid).max(Decimal::ZERO)
    }
}
