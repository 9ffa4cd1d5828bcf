//! Invoice lifecycle: draft editing and status transitions
//!
//! Draft items are directly editable, with totals recomputed on every
//! edit. Any other status is read-only except for the status
//! transitions below, each of which returns the notification event
//! the external dispatch layer should receive.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{Invoice, InvoiceItem, InvoiceStatus};

use super::compiler::compile_totals;
use crate::error::EngineError;
use crate::events::NotificationEvent;
use crate::money::{round_money, validate_quantity};

/// Partial update for one draft invoice line
#[derive(Debug, Clone, Default)]
pub struct InvoiceItemChanges {
    pub label: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

fn require_draft(invoice: &Invoice) -> Result<(), EngineError> {
    if invoice.is_editable() {
        Ok(())
    } else {
        Err(EngineError::validation(format!(
            "invoice {} is {:?}; items are only editable in DRAFT",
            invoice.id, invoice.status
        )))
    }
}

/// Add a line to a draft invoice
///
/// The line total is recomputed from quantity and unit price so the
/// per-item invariant holds regardless of what the caller passed.
pub fn add_item(invoice: &Invoice, mut item: InvoiceItem) -> Result<Invoice, EngineError> {
    require_draft(invoice)?;
    validate_quantity(item.quantity, "invoice item quantity")?;

    item.unit_price = round_money(item.unit_price);
    item.total = item.unit_price * Decimal::from(item.quantity);

    let mut updated = invoice.clone();
    updated.items.push(item);
    updated.totals = compile_totals(&updated.items);
    Ok(updated)
}

/// Edit a line on a draft invoice
pub fn update_item(
    invoice: &Invoice,
    item_id: &str,
    changes: InvoiceItemChanges,
) -> Result<Invoice, EngineError> {
    require_draft(invoice)?;

    let mut updated = invoice.clone();
    let item = updated
        .items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| {
            EngineError::validation(format!(
                "invoice {} has no item '{item_id}'",
                invoice.id
            ))
        })?;

    if let Some(label) = changes.label {
        item.label = label;
    }
    if let Some(quantity) = changes.quantity {
        validate_quantity(quantity, "invoice item quantity")?;
        item.quantity = quantity;
    }
    if let Some(unit_price) = changes.unit_price {
        item.unit_price = round_money(unit_price);
    }
    item.total = item.unit_price * Decimal::from(item.quantity);

    updated.totals = compile_totals(&updated.items);
    Ok(updated)
}

/// Remove a line from a draft invoice
pub fn remove_item(invoice: &Invoice, item_id: &str) -> Result<Invoice, EngineError> {
    require_draft(invoice)?;

    let mut updated = invoice.clone();
    let before = updated.items.len();
    updated.items.retain(|i| i.id != item_id);
    if updated.items.len() == before {
        return Err(EngineError::validation(format!(
            "invoice {} has no item '{item_id}'",
            invoice.id
        )));
    }

    updated.totals = compile_totals(&updated.items);
    Ok(updated)
}

/// Issue a draft invoice (DRAFT → SENT)
pub fn issue(
    invoice: &Invoice,
    now: DateTime<Utc>,
) -> Result<(Invoice, NotificationEvent), EngineError> {
    if invoice.status != InvoiceStatus::Draft {
        return Err(EngineError::validation(format!(
            "invoice {} is {:?}; only a DRAFT invoice can be issued",
            invoice.id, invoice.status
        )));
    }

    let mut updated = invoice.clone();
    updated.status = InvoiceStatus::Sent;
    updated.issued_at = Some(now);
    let event = NotificationEvent::InvoiceIssued {
        invoice_id: updated.id.clone(),
    };
    Ok((updated, event))
}

/// Settle an invoice (SENT or OVERDUE → PAID)
pub fn mark_paid(
    invoice: &Invoice,
    now: DateTime<Utc>,
) -> Result<(Invoice, NotificationEvent), EngineError> {
    match invoice.status {
        InvoiceStatus::Sent | InvoiceStatus::Overdue => {}
        status => {
            return Err(EngineError::validation(format!(
                "invoice {} is {status:?}; only a SENT or OVERDUE invoice can be paid",
                invoice.id
            )));
        }
    }

    let mut updated = invoice.clone();
    updated.status = InvoiceStatus::Paid;
    updated.paid_at = Some(now);
    let event = NotificationEvent::InvoicePaid {
        invoice_id: updated.id.clone(),
    };
    Ok((updated, event))
}

/// Flag an unpaid invoice past its due date (SENT → OVERDUE)
pub fn mark_overdue(
    invoice: &Invoice,
    now: DateTime<Utc>,
) -> Result<(Invoice, NotificationEvent), EngineError> {
    if invoice.status != InvoiceStatus::Sent {
        return Err(EngineError::validation(format!(
            "invoice {} is {:?}; only a SENT invoice can become overdue",
            invoice.id, invoice.status
        )));
    }
    if now <= invoice.due_date {
        return Err(EngineError::validation(format!(
            "invoice {} is not yet due ({})",
            invoice.id, invoice.due_date
        )));
    }

    let mut updated = invoice.clone();
    updated.status = InvoiceStatus::Overdue;
    let event = NotificationEvent::InvoiceOverdue {
        invoice_id: updated.id.clone(),
        due_date: updated.due_date,
    };
    Ok((updated, event))
}
