//! Promotion rule evaluation
//!
//! Gate checks first (enabled, validity window, party size), then one
//! evaluation function per rule kind. Rejection is data, not an
//! error: the caller receives a machine-readable reason and decides
//! whether to surface it to the end user.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{
    EligibleArrangement, FreeArrangementsMode, InvitedConfig, ItemCategory, LineItem, PackageTier,
    PromoCodeRule, PromoKind, PromoScope,
};

use crate::money::round_money;

/// Why a promo code did not apply
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoRejection {
    /// No rule exists for the requested code
    NotFound,
    /// The rule exists but is switched off
    Disabled,
    /// Booking date falls outside the rule's validity window
    Expired,
    /// Guest count outside the rule's party-size bounds
    PartySizeOutOfRange,
}

/// Result of evaluating a promo code against a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoOutcome {
    /// The rule applied; `discount` is clamped to `[0, base]`
    Applied { code: String, discount: Decimal },
    /// The rule was rejected; discount is zero
    Rejected { reason: PromoRejection },
    /// The booking carried no promo code
    NotRequested,
}

impl PromoOutcome {
    pub fn discount(&self) -> Decimal {
        match self {
            PromoOutcome::Applied { discount, .. } => *discount,
            _ => Decimal::ZERO,
        }
    }

    /// Whether stacking with further discounts is permitted.
    /// Rejected or absent promos impose no stacking constraint.
    pub fn allows_stacking(&self, rule: Option<&PromoCodeRule>) -> bool {
        match self {
            PromoOutcome::Applied { .. } => rule.map(|r| r.allow_stacking).unwrap_or(true),
            _ => true,
        }
    }
}

/// Evaluate a promo rule against resolved line items
///
/// `rule` is `None` when the requested code was not found in the rule
/// store. A booking without any promo code should not call this;
/// the pipeline short-circuits to [`PromoOutcome::NotRequested`].
pub fn evaluate_promo(
    rule: Option<&PromoCodeRule>,
    items: &[LineItem],
    guest_count: i32,
    tier: PackageTier,
    booking_date: DateTime<Utc>,
) -> PromoOutcome {
    let Some(rule) = rule else {
        return PromoOutcome::Rejected {
            reason: PromoRejection::NotFound,
        };
    };

    if let Some(reason) = check_gates(rule, guest_count, booking_date) {
        tracing::debug!(code = %rule.code, ?reason, "promo code rejected");
        return PromoOutcome::Rejected { reason };
    }

    let base = discount_base(items, rule.scope);

    let raw = match &rule.kind {
        PromoKind::Percentage { percentage } => base * *percentage / Decimal::ONE_HUNDRED,
        PromoKind::FixedPerPerson { amount_per_person } => {
            *amount_per_person * Decimal::from(guest_count)
        }
        PromoKind::FixedTotal { amount } => *amount,
        PromoKind::InvitedComp { config } => evaluate_invited_comp(config, items, tier),
    };

    // Discount is never negative and never exceeds the base
    let discount = round_money(raw.clamp(Decimal::ZERO, base));

    PromoOutcome::Applied {
        code: rule.code.clone(),
        discount,
    }
}

/// Validity gates, checked before any discount math
fn check_gates(
    rule: &PromoCodeRule,
    guest_count: i32,
    booking_date: DateTime<Utc>,
) -> Option<PromoRejection> {
    if !rule.enabled {
        return Some(PromoRejection::Disabled);
    }

    if let Some(from) = rule.constraints.valid_from
        && booking_date < from
    {
        return Some(PromoRejection::Expired);
    }
    if let Some(until) = rule.constraints.valid_until
        && booking_date > until
    {
        return Some(PromoRejection::Expired);
    }

    if let Some(min) = rule.constraints.min_party_size
        && guest_count < min
    {
        return Some(PromoRejection::PartySizeOutOfRange);
    }
    if let Some(max) = rule.constraints.max_party_size
        && guest_count > max
    {
        return Some(PromoRejection::PartySizeOutOfRange);
    }

    None
}

/// The value a discount is computed against
fn discount_base(items: &[LineItem], scope: PromoScope) -> Decimal {
    match scope {
        PromoScope::ArrangementOnly => items
            .iter()
            .filter(|i| i.category == ItemCategory::Ticket)
            .map(|i| i.total)
            .sum(),
        PromoScope::EntireBooking => items.iter().map(|i| i.total).sum(),
    }
}

/// Invited comp: the discount equals the full price of the comped
/// ticket units. Eligibility is the rule's arrangement filter against
/// the booking's package tier; an ineligible tier comps nothing.
fn evaluate_invited_comp(config: &InvitedConfig, items: &[LineItem], tier: PackageTier) -> Decimal {
    let eligible = match config.eligible_arrangement {
        EligibleArrangement::Any => true,
        EligibleArrangement::Standard => tier == PackageTier::Standard,
        EligibleArrangement::Premium => tier == PackageTier::Premium,
    };
    if !eligible {
        return Decimal::ZERO;
    }

    let Some(ticket) = items.iter().find(|i| i.category == ItemCategory::Ticket) else {
        return Decimal::ZERO;
    };

    match config.free_arrangements_mode {
        FreeArrangementsMode::All => ticket.total,
        FreeArrangementsMode::Count => {
            let free_count = config.free_count.unwrap_or(0).max(0);
            let comped = free_count.min(ticket.quantity);
            (ticket.unit_price * Decimal::from(comped)).min(ticket.total)
        }
    }
}
