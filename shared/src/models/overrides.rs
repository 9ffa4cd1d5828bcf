//! Manual price corrections applied by administrators

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed discount attached to an override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideDiscount {
    pub amount: Decimal,
    /// Display label shown on the breakdown ("Import correction", ...)
    pub label: String,
}

/// Manual correction recorded on a reservation
///
/// Both fields may be stored, but a unit-price override wins in
/// effect: it replaces the per-guest ticket price and bypasses any
/// promo discount on the ticket portion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminPriceOverride {
    /// Replacement per-guest ticket price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// Fixed discount, cumulative with promo discounts unless the
    /// promo rule disallows stacking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<OverrideDiscount>,
    pub reason: String,
    pub updated_at: DateTime<Utc>,
}
