//! Priced line items and booking totals

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Line item category, drives the VAT band mapping at invoicing time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemCategory {
    /// Dinner-and-show arrangement tickets
    Ticket,
    /// Bookable extras (pre-show drinks, after party)
    Addon,
    /// Merchandise sold with the booking
    Merch,
    /// Fees, adjustments, shipping
    Other,
}

/// One priced component of a booking
///
/// `total` always equals `quantity × unit_price` rounded to the cent;
/// construct via [`LineItem::new`] so the invariant holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    /// Display label
    pub label: String,
    pub quantity: i32,
    /// Per-unit price, VAT-inclusive
    pub unit_price: Decimal,
    /// Line total (quantity × unit_price)
    pub total: Decimal,
    pub category: ItemCategory,
}

impl LineItem {
    /// Create a line item with `total` derived from quantity and unit price
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
        category: ItemCategory,
    ) -> Self {
        let unit_price =
            unit_price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let total = (unit_price * Decimal::from(quantity))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            id: id.into(),
            label: label.into(),
            quantity,
            unit_price,
            total,
            category,
        }
    }

    /// Replace the unit price, recomputing the line total
    pub fn with_unit_price(&self, unit_price: Decimal) -> Self {
        Self::new(
            self.id.clone(),
            self.label.clone(),
            self.quantity,
            unit_price,
            self.category,
        )
    }
}

/// Output of the pricing pipeline, written onto the reservation's
/// financial record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingTotals {
    /// Sum of line-item totals before discount
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// subtotal − discount_amount, clamped to zero
    pub amount_due: Decimal,
    /// Resolved line items, post-override
    pub items: Vec<LineItem>,
}

impl BookingTotals {
    /// Assemble totals from resolved items and a discount amount
    pub fn new(items: Vec<LineItem>, discount_amount: Decimal) -> Self {
        let subtotal: Decimal = items.iter().map(|i| i.total).sum();
        let amount_due = (subtotal - discount_amount).max(Decimal::ZERO);
        Self {
            subtotal,
            discount_amount,
            amount_due,
            items,
        }
    }
}
