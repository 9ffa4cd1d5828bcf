//! Domain models

pub mod financials;
pub mod invoice;
pub mod line_item;
pub mod overrides;
pub mod promo_rule;
pub mod show;

pub use financials::{BookingFinancials, PaymentRecord, PaymentType};
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, InvoiceTotals, VatRate};
pub use line_item::{BookingTotals, ItemCategory, LineItem};
pub use overrides::{AdminPriceOverride, OverrideDiscount};
pub use promo_rule::{
    EligibleArrangement, FreeArrangementsMode, InvitedConfig, PromoCodeRule, PromoCodeRuleCreate,
    PromoCodeRuleUpdate, PromoConstraints, PromoKind, PromoScope,
};
pub use show::{
    AddonKind, AddonSelection, MerchSelection, PackageTier, PriceProfile, Show, ShowEvent,
};
