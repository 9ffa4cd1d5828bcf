//! Line item builder
//!
//! Deterministic, pure: the same guest counts and selections always
//! produce the same items, which is what makes recomputation after a
//! change request idempotent. Item ids are stable strings derived
//! from the selection, never generated.

use crate::error::EngineError;
use crate::money::validate_quantity;
use shared::models::{
    AddonSelection, ItemCategory, LineItem, MerchSelection, PackageTier, PriceProfile,
};

/// Stable id of the single ticket line
pub const TICKET_ITEM_ID: &str = "ticket";

/// Build the priced line items for a booking
///
/// One TICKET item for the whole party, one ADDON item per selected
/// add-on type, one MERCH item per merchandise selection. Merch
/// quantity and unit price are taken verbatim from the catalog entry.
pub fn build_line_items(
    guest_count: i32,
    tier: PackageTier,
    addons: &[AddonSelection],
    merch: &[MerchSelection],
    profile: &PriceProfile,
) -> Result<Vec<LineItem>, EngineError> {
    validate_quantity(guest_count, "guest_count")?;

    let mut items = Vec::with_capacity(1 + addons.len() + merch.len());

    let tier_label = match tier {
        PackageTier::Standard => "Standard arrangement",
        PackageTier::Premium => "Premium arrangement",
    };
    items.push(LineItem::new(
        TICKET_ITEM_ID,
        tier_label,
        guest_count,
        profile.tier_price(tier),
        ItemCategory::Ticket,
    ));

    for addon in addons {
        validate_quantity(addon.quantity, "addon quantity")?;
        items.push(LineItem::new(
            addon.kind.slug(),
            addon.kind.label(),
            addon.quantity,
            profile.addon_price(addon.kind),
            ItemCategory::Addon,
        ));
    }

    for selection in merch {
        validate_quantity(selection.quantity, "merch quantity")?;
        items.push(LineItem::new(
            selection.sku.clone(),
            selection.label.clone(),
            selection.quantity,
            selection.unit_price,
            ItemCategory::Merch,
        ));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::models::AddonKind;

    fn make_profile() -> PriceProfile {
        PriceProfile {
            id: "default".to_string(),
            name: "Default".to_string(),
            valid_from: None,
            valid_until: None,
            standard_price: dec!(65.00),
            premium_price: dec!(85.00),
            pre_show_drinks_price: dec!(12.50),
            after_party_price: dec!(19.50),
        }
    }

    #[test]
    fn test_ticket_item_from_guest_count_and_tier() {
        let items = build_line_items(4, PackageTier::Standard, &[], &[], &make_profile()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, TICKET_ITEM_ID);
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[0].unit_price, dec!(65.00));
        assert_eq!(items[0].total, dec!(260.00));
        assert_eq!(items[0].category, ItemCategory::Ticket);
    }

    #[test]
    fn test_addons_use_their_own_counts() {
        let addons = vec![
            AddonSelection {
                kind: AddonKind::PreShowDrinks,
                quantity: 4,
            },
            AddonSelection {
                kind: AddonKind::AfterParty,
                quantity: 2,
            },
        ];
        let items =
            build_line_items(4, PackageTier::Premium, &addons, &[], &make_profile()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].total, dec!(50.00));
        assert_eq!(items[2].total, dec!(39.00));
        assert_eq!(items[1].category, ItemCategory::Addon);
    }

    #[test]
    fn test_merch_taken_verbatim_from_catalog() {
        let merch = vec![MerchSelection {
            sku: "poster-a2".to_string(),
            label: "Show poster A2".to_string(),
            quantity: 2,
            unit_price: dec!(14.95),
        }];
        let items =
            build_line_items(2, PackageTier::Standard, &[], &merch, &make_profile()).unwrap();
        assert_eq!(items[1].id, "poster-a2");
        assert_eq!(items[1].unit_price, dec!(14.95));
        assert_eq!(items[1].total, dec!(29.90));
        assert_eq!(items[1].category, ItemCategory::Merch);
    }

    #[test]
    fn test_same_inputs_same_items() {
        let merch = vec![MerchSelection {
            sku: "cd".to_string(),
            label: "Cast recording".to_string(),
            quantity: 1,
            unit_price: dec!(17.50),
        }];
        let a = build_line_items(6, PackageTier::Premium, &[], &merch, &make_profile()).unwrap();
        let b = build_line_items(6, PackageTier::Premium, &[], &merch, &make_profile()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_guests_rejected() {
        let err = build_line_items(0, PackageTier::Standard, &[], &[], &make_profile());
        assert!(err.is_err());
    }
}
