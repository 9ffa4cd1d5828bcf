//! Admin override resolution
//!
//! Overrides run after promo evaluation and win over it for the value
//! they touch. The target-total correction is deliberately
//! asymmetric (discount downward, unit-price override upward) and is
//! kept behind one named function so both branches stay individually
//! testable.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use shared::models::{AdminPriceOverride, ItemCategory, LineItem, OverrideDiscount};

use crate::error::EngineError;
use crate::money::round_money;

/// Items and total discount after override application
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideResolution {
    pub items: Vec<LineItem>,
    pub discount_amount: Decimal,
}

/// Apply a manual override on top of an evaluated promo discount
///
/// A unit-price override replaces the ticket line's price and
/// recomputes its total; the promo discount on the ticket portion is
/// bypassed entirely. A fixed override discount accumulates with the
/// promo discount, unless the promo rule disallows stacking, in which
/// case it replaces it.
pub fn apply_override(
    items: &[LineItem],
    promo_discount: Decimal,
    promo_allows_stacking: bool,
    override_: Option<&AdminPriceOverride>,
) -> OverrideResolution {
    let Some(override_) = override_ else {
        return OverrideResolution {
            items: items.to_vec(),
            discount_amount: promo_discount,
        };
    };

    if let Some(unit_price) = override_.unit_price {
        // Override wins: reprice the ticket line, drop the promo discount
        let items = items
            .iter()
            .map(|item| {
                if item.category == ItemCategory::Ticket {
                    item.with_unit_price(unit_price)
                } else {
                    item.clone()
                }
            })
            .collect();
        tracing::debug!(%unit_price, reason = %override_.reason, "ticket unit price overridden");
        return OverrideResolution {
            items,
            discount_amount: Decimal::ZERO,
        };
    }

    if let Some(discount) = &override_.discount {
        let discount_amount = if promo_allows_stacking {
            promo_discount + discount.amount
        } else {
            discount.amount
        };
        return OverrideResolution {
            items: items.to_vec(),
            discount_amount: round_money(discount_amount),
        };
    }

    OverrideResolution {
        items: items.to_vec(),
        discount_amount: promo_discount,
    }
}

/// Express a forced target total as an override
///
/// Used by bulk import and manual admin fixes. When the target is
/// below the computed subtotal the gap becomes a fixed discount; a
/// surcharge cannot be expressed as a negative discount, so a target
/// above the subtotal overrides the per-guest ticket price instead.
pub fn resolve_target_total(
    subtotal: Decimal,
    target: Decimal,
    guest_count: i32,
    reason: impl Into<String>,
    now: DateTime<Utc>,
) -> Result<AdminPriceOverride, EngineError> {
    if target < Decimal::ZERO {
        return Err(EngineError::validation(format!(
            "target total must not be negative, got {target}"
        )));
    }
    if guest_count < 1 {
        return Err(EngineError::validation(format!(
            "guest count must be at least 1, got {guest_count}"
        )));
    }

    let reason = reason.into();
    if target < subtotal {
        Ok(AdminPriceOverride {
            unit_price: None,
            discount: Some(OverrideDiscount {
                amount: round_money(subtotal - target),
                label: "Price correction".to_string(),
            }),
            reason,
            updated_at: now,
        })
    } else {
        Ok(AdminPriceOverride {
            unit_price: Some(round_money(target / Decimal::from(guest_count))),
            discount: None,
            reason,
            updated_at: now,
        })
    }
}
