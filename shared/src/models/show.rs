//! Show catalog: events, price profiles and booking selections
//!
//! The engine only reads this catalog; the scheduling collaborator
//! owns it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Arrangement tier (dinner-and-show ticket package)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageTier {
    Standard,
    Premium,
}

/// Bookable add-on categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddonKind {
    PreShowDrinks,
    AfterParty,
}

impl AddonKind {
    /// Stable identifier used for deterministic line-item ids
    pub fn slug(&self) -> &'static str {
        match self {
            AddonKind::PreShowDrinks => "addon-pre-show-drinks",
            AddonKind::AfterParty => "addon-after-party",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddonKind::PreShowDrinks => "Pre-show drinks",
            AddonKind::AfterParty => "After party",
        }
    }
}

/// One pricing window for a show, all prices VAT-inclusive
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceProfile {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    pub standard_price: Decimal,
    pub premium_price: Decimal,
    pub pre_show_drinks_price: Decimal,
    pub after_party_price: Decimal,
}

impl PriceProfile {
    /// Per-guest ticket price for a tier
    pub fn tier_price(&self, tier: PackageTier) -> Decimal {
        match tier {
            PackageTier::Standard => self.standard_price,
            PackageTier::Premium => self.premium_price,
        }
    }

    /// Per-unit price for an add-on category
    pub fn addon_price(&self, kind: AddonKind) -> Decimal {
        match kind {
            AddonKind::PreShowDrinks => self.pre_show_drinks_price,
            AddonKind::AfterParty => self.after_party_price,
        }
    }
}

/// Show definition with its price profiles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: String,
    pub name: String,
    pub price_profiles: Vec<PriceProfile>,
}

/// A scheduled performance of a show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowEvent {
    pub id: String,
    pub show_id: String,
    pub starts_at: DateTime<Utc>,
    /// Explicit profile reference; falls back to the show's first
    /// profile when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_profile_id: Option<String>,
}

/// Selected add-on with its own guest/unit count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddonSelection {
    pub kind: AddonKind,
    pub quantity: i32,
}

/// Merchandise selection, quantity and unit price taken verbatim from
/// the catalog entry (already VAT-inclusive)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchSelection {
    pub sku: String,
    pub label: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}
