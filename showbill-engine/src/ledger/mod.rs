//! Payment ledger
//!
//! Append-only payment tracking against a reservation's financial
//! record. `paid` is always recomputed from the full payment list
//! rather than incremented, which makes registration idempotent
//! against retries, and `is_paid` is re-derived from scratch whenever
//! either side of the comparison changes; it is never carried
//! forward from the previous state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{BookingFinancials, BookingTotals, PaymentRecord, PaymentType};
use uuid::Uuid;

use crate::error::EngineError;
use crate::events::NotificationEvent;
use crate::money::{is_payment_sufficient, sum_payments, validate_payment_amount};

/// Updated financials plus the notification events the change produced
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerUpdate {
    pub financials: BookingFinancials,
    pub events: Vec<NotificationEvent>,
}

/// Register a payment against a reservation
///
/// Appends a [`PaymentRecord`], recomputes `paid` from the complete
/// list and re-derives `is_paid` with ε tolerance against the current
/// `final_total`. `paid_at` and `payment_method` are stamped only on
/// the transition from unpaid to fully paid. A further payment on an
/// already-settled booking is accepted; the overpayment shows up as a
/// zero outstanding amount.
pub fn register_payment(
    reservation_id: &str,
    financials: &BookingFinancials,
    amount: Decimal,
    method: impl Into<String>,
    payment_type: PaymentType,
    now: DateTime<Utc>,
) -> Result<LedgerUpdate, EngineError> {
    validate_payment_amount(amount)?;

    let method = method.into();
    let mut updated = financials.clone();
    updated.payments.push(PaymentRecord {
        id: Uuid::new_v4(),
        amount,
        method: method.clone(),
        date: now,
        payment_type,
    });

    updated.paid = sum_payments(&updated.payments);
    let was_paid = financials.is_paid;
    updated.is_paid = is_payment_sufficient(updated.paid, updated.final_total);

    let mut events = Vec::new();
    if updated.is_paid && !was_paid {
        updated.paid_at = Some(now);
        updated.payment_method = Some(method);
        events.push(NotificationEvent::PaidInFull {
            reservation_id: reservation_id.to_string(),
            amount: updated.paid,
        });
    }

    tracing::debug!(
        reservation_id,
        paid = %updated.paid,
        is_paid = updated.is_paid,
        "payment registered"
    );

    Ok(LedgerUpdate {
        financials: updated,
        events,
    })
}

/// Re-derive payment state after the amount due changed
///
/// Invoked when a change request is approved or an admin edits the
/// booking. Replaces the totals, then re-derives `is_paid` from the
/// unchanged `paid` sum against the new `final_total`: a booking
/// that was fully paid reverts to unpaid when the new total exceeds
/// what was collected, and its settlement stamps are cleared.
pub fn recalculate_after_amount_change(
    reservation_id: &str,
    financials: &BookingFinancials,
    new_totals: &BookingTotals,
) -> LedgerUpdate {
    let mut updated = financials.clone();
    updated.subtotal = new_totals.subtotal;
    updated.discount = new_totals.discount_amount;
    updated.total = new_totals.amount_due;
    updated.final_total = new_totals.amount_due;
    updated.price_breakdown = new_totals.items.clone();

    updated.paid = sum_payments(&updated.payments);
    let was_paid = financials.is_paid;
    updated.is_paid = is_payment_sufficient(updated.paid, updated.final_total);

    let mut events = Vec::new();
    if updated.is_paid && !was_paid {
        // Settled by the recalculation itself; stamp from the ledger
        if let Some(last) = updated.payments.last() {
            updated.paid_at = Some(last.date);
            updated.payment_method = Some(last.method.clone());
        }
        events.push(NotificationEvent::PaidInFull {
            reservation_id: reservation_id.to_string(),
            amount: updated.paid,
        });
    } else if !updated.is_paid {
        updated.paid_at = None;
        updated.payment_method = None;
    }

    tracing::debug!(
        reservation_id,
        final_total = %updated.final_total,
        is_paid = updated.is_paid,
        "financials recalculated after amount change"
    );

    LedgerUpdate {
        financials: updated,
        events,
    }
}
