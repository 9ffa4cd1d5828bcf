//! Booking computation pipeline
//!
//! Wires the four pricing stages together: profile resolution, line
//! item building, promo evaluation and override application. The
//! result is written onto the reservation's financial record by the
//! caller; recomputing with the same inputs always yields the same
//! quote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{
    AddonSelection, AdminPriceOverride, BookingTotals, MerchSelection, PackageTier, PromoCodeRule,
    Show, ShowEvent,
};

use super::line_items::build_line_items;
use super::overrides::apply_override;
use super::promo::{PromoOutcome, evaluate_promo};
use super::resolver::resolve_price_profile;
use crate::error::EngineError;

/// Everything needed to price one booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingComputationRequest {
    pub guest_count: i32,
    pub tier: PackageTier,
    #[serde(default)]
    pub addons: Vec<AddonSelection>,
    #[serde(default)]
    pub merch: Vec<MerchSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_override: Option<AdminPriceOverride>,
    pub booking_date: DateTime<Utc>,
}

/// Pipeline output: the totals plus how the promo code fared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingQuote {
    pub totals: BookingTotals,
    pub promo: PromoOutcome,
}

/// Price a booking end to end
///
/// `rule` is the store's lookup result for `request.promo_code`;
/// pass `None` when the code was not found. Configuration errors
/// (show without profiles, dangling profile reference) propagate.
pub fn compute_booking_totals(
    request: &BookingComputationRequest,
    show: &Show,
    event: &ShowEvent,
    rule: Option<&PromoCodeRule>,
) -> Result<BookingQuote, EngineError> {
    let profile = resolve_price_profile(show, event)?;

    let items = build_line_items(
        request.guest_count,
        request.tier,
        &request.addons,
        &request.merch,
        profile,
    )?;

    let promo = match &request.promo_code {
        None => PromoOutcome::NotRequested,
        Some(code) => {
            // A rule fetched for a different code counts as not found
            let rule = rule.filter(|r| r.matches_code(code));
            evaluate_promo(
                rule,
                &items,
                request.guest_count,
                request.tier,
                request.booking_date,
            )
        }
    };

    let resolved = apply_override(
        &items,
        promo.discount(),
        promo.allows_stacking(rule),
        request.price_override.as_ref(),
    );

    let totals = BookingTotals::new(resolved.items, resolved.discount_amount);
    tracing::debug!(
        subtotal = %totals.subtotal,
        discount = %totals.discount_amount,
        amount_due = %totals.amount_due,
        "booking totals computed"
    );

    Ok(BookingQuote { totals, promo })
}
