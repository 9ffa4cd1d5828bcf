//! VAT invoice compilation
//!
//! Converts a reservation's line items into invoice items using
//! fixed, category-driven rules for the Dutch two-band scheme.
//! Prices are VAT-inclusive throughout: the net is derived per item
//! as `total / (1 + rate/100)` and the VAT amount as the exact
//! remainder, so item net + VAT always reconciles to the cent.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::prelude::*;
use shared::models::{
    Invoice, InvoiceItem, InvoiceStatus, InvoiceTotals, ItemCategory, LineItem, VatRate,
};

use super::numbering::next_invoice_number;
use crate::error::EngineError;
use crate::money::round_money;

/// Share of a ticket's inclusive value taxed at the reduced band
/// (dinner & show); the remainder is the beverage portion at 21%.
const REDUCED_BAND_SHARE: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

/// Compile reservation line items into VAT-banded invoice items
///
/// TICKET lines split into two invoice items sharing the same
/// back-reference; ADDON, MERCH and OTHER lines map 1:1 at the
/// standard rate.
pub fn compile_invoice_items(breakdown: &[LineItem]) -> Vec<InvoiceItem> {
    let mut items = Vec::with_capacity(breakdown.len() + 1);
    for line in breakdown {
        match line.category {
            ItemCategory::Ticket => {
                let (low, high) = split_ticket_item(line);
                items.push(low);
                items.push(high);
            }
            _ => items.push(map_standard_rate(line)),
        }
    }
    items
}

/// Split a ticket line into its 9% and 21% portions
///
/// The reduced-band unit price is rounded to the cent and the
/// standard-band unit price is the exact remainder, so the two line
/// totals always sum to the original total with no leakage.
fn split_ticket_item(line: &LineItem) -> (InvoiceItem, InvoiceItem) {
    let low_unit = round_money(line.unit_price * REDUCED_BAND_SHARE);
    let high_unit = line.unit_price - low_unit;
    let quantity = Decimal::from(line.quantity);

    let low = InvoiceItem {
        id: format!("{}-vat9", line.id),
        label: format!("{} (dinner & show)", line.label),
        quantity: line.quantity,
        unit_price: low_unit,
        total: low_unit * quantity,
        category: line.category,
        vat_rate: VatRate::Reduced,
        original_reservation_item_id: Some(line.id.clone()),
    };
    let high = InvoiceItem {
        id: format!("{}-vat21", line.id),
        label: format!("{} (beverages)", line.label),
        quantity: line.quantity,
        unit_price: high_unit,
        total: line.total - low.total,
        category: line.category,
        vat_rate: VatRate::Standard,
        original_reservation_item_id: Some(line.id.clone()),
    };
    (low, high)
}

/// Map a non-ticket line 1:1 onto the standard band
fn map_standard_rate(line: &LineItem) -> InvoiceItem {
    InvoiceItem {
        id: format!("{}-vat21", line.id),
        label: line.label.clone(),
        quantity: line.quantity,
        unit_price: line.unit_price,
        total: line.total,
        category: line.category,
        vat_rate: VatRate::Standard,
        original_reservation_item_id: Some(line.id.clone()),
    }
}

/// Compile invoice totals from banded items
///
/// Per item the net is rounded to the cent and the VAT amount is the
/// exact remainder, so `total_incl` equals the sum of item totals
/// exactly, not approximately.
pub fn compile_totals(items: &[InvoiceItem]) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();
    for item in items {
        let rate = item.vat_rate.percentage();
        let net = round_money(item.total / (Decimal::ONE + rate / Decimal::ONE_HUNDRED));
        let vat = item.total - net;

        totals.subtotal_excl += net;
        match item.vat_rate {
            VatRate::Reduced => totals.vat9 += vat,
            VatRate::Standard => totals.vat21 += vat,
            VatRate::Zero => {}
        }
    }
    totals.total_incl = totals.subtotal_excl + totals.vat9 + totals.vat21;
    totals
}

/// Generate a draft invoice from a reservation's price breakdown
///
/// `existing_numbers` must be the current full set of invoice
/// numbers, including any assigned earlier in the same batch.
pub fn generate_invoice(
    breakdown: &[LineItem],
    existing_numbers: &[String],
    now: DateTime<Utc>,
    due_in_days: i64,
) -> Result<Invoice, EngineError> {
    if breakdown.is_empty() {
        return Err(EngineError::validation(
            "cannot generate an invoice from an empty price breakdown",
        ));
    }

    let items = compile_invoice_items(breakdown);
    let totals = compile_totals(&items);
    let id = next_invoice_number(
        existing_numbers.iter().map(String::as_str),
        now.year(),
    );
    tracing::debug!(invoice_id = %id, total_incl = %totals.total_incl, "invoice generated");

    Ok(Invoice {
        id,
        items,
        totals,
        status: InvoiceStatus::Draft,
        created_at: now,
        due_date: now + Duration::days(due_in_days),
        issued_at: None,
        paid_at: None,
    })
}
