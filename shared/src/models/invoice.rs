//! VAT invoice document
//!
//! A single VAT-inclusive booking price is split across the two Dutch
//! VAT bands (9% reduced, 21% standard) at compilation time. Items
//! are editable only while the invoice is a draft.

use super::line_item::ItemCategory;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory VAT rate band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatRate {
    Zero,
    /// 9% reduced band (food, performances)
    Reduced,
    /// 21% standard band
    Standard,
}

impl VatRate {
    pub fn percentage(&self) -> Decimal {
        match self {
            VatRate::Zero => Decimal::ZERO,
            VatRate::Reduced => Decimal::from(9),
            VatRate::Standard => Decimal::from(21),
        }
    }
}

/// Invoice lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// One invoice line, VAT-inclusive amounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub id: String,
    pub label: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub category: ItemCategory,
    pub vat_rate: VatRate,
    /// Back-reference to the reservation line item this was compiled
    /// from, shared by both halves of a split ticket line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_reservation_item_id: Option<String>,
}

/// Compiled invoice totals
///
/// `total_incl` always equals both `subtotal_excl + vat9 + vat21` and
/// the sum of all item totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal_excl: Decimal,
    pub vat9: Decimal,
    pub vat21: Decimal,
    pub total_incl: Decimal,
}

/// Tax-authority-compliant billing document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Sequential year-scoped number, e.g. "2025-0001"
    pub id: String,
    pub items: Vec<InvoiceItem>,
    pub totals: InvoiceTotals,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Items are directly editable only while the invoice is a draft
    pub fn is_editable(&self) -> bool {
        self.status == InvoiceStatus::Draft
    }
}
