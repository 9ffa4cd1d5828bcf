//! Promo code rules
//!
//! A rule is re-evaluated by code reference at computation time; no
//! immutable snapshot is attached to a reservation. Editing a rule
//! after use does not retroactively change past bookings unless they
//! are explicitly recomputed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount scope
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoScope {
    /// Discount base is the ticket (arrangement) value only
    ArrangementOnly,
    /// Discount base is the whole booking subtotal
    EntireBooking,
}

/// Which arrangement tiers an invited-comp rule applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibleArrangement {
    Any,
    Standard,
    Premium,
}

/// How many eligible ticket units an invited-comp rule comps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreeArrangementsMode {
    /// All eligible ticket units become free
    All,
    /// Only the first `free_count` eligible units are comped
    Count,
}

/// Invited-comp configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvitedConfig {
    pub free_arrangements_mode: FreeArrangementsMode,
    /// Required when mode is COUNT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_count: Option<i32>,
    pub eligible_arrangement: EligibleArrangement,
}

/// Discount kind with its magnitude, one variant per policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoKind {
    Percentage { percentage: Decimal },
    FixedPerPerson { amount_per_person: Decimal },
    FixedTotal { amount: Decimal },
    InvitedComp { config: InvitedConfig },
}

/// Validity constraints checked before any discount math
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromoConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// A named discount policy, created and edited by administrators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoCodeRule {
    /// Unique code, matched case-insensitively
    pub code: String,
    pub enabled: bool,
    #[serde(flatten)]
    pub kind: PromoKind,
    pub scope: PromoScope,
    #[serde(default)]
    pub constraints: PromoConstraints,
    /// Whether this rule may combine with other discounts
    pub allow_stacking: bool,
    /// Whether this rule may combine with a gift voucher
    pub allow_with_voucher: bool,
}

impl PromoCodeRule {
    /// Case-insensitive code match
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

/// Create promo rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCodeRuleCreate {
    pub code: String,
    #[serde(flatten)]
    pub kind: PromoKind,
    pub scope: PromoScope,
    #[serde(default)]
    pub constraints: PromoConstraints,
    pub allow_stacking: Option<bool>,
    pub allow_with_voucher: Option<bool>,
}

/// Update promo rule payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromoCodeRuleUpdate {
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub kind: Option<PromoKind>,
    pub scope: Option<PromoScope>,
    pub constraints: Option<PromoConstraints>,
    pub allow_stacking: Option<bool>,
    pub allow_with_voucher: Option<bool>,
}
