//! End-to-end booking lifecycle: quote, payments, change request,
//! invoice generation and settlement.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::models::{
    AddonKind, AddonSelection, BookingFinancials, PackageTier, PriceProfile, PromoCodeRule,
    PromoConstraints, PromoKind, PromoScope, Show, ShowEvent,
};
use showbill_engine::invoicing::{generate_invoice, issue, mark_paid};
use showbill_engine::ledger::{recalculate_after_amount_change, register_payment};
use showbill_engine::pricing::compute_booking_totals;
use showbill_engine::{BookingComputationRequest, NotificationEvent};
use shared::models::PaymentType;

fn catalog() -> (Show, ShowEvent) {
    let show = Show {
        id: "show-1".to_string(),
        name: "Midnight Revue".to_string(),
        price_profiles: vec![PriceProfile {
            id: "season-2025".to_string(),
            name: "Season 2025".to_string(),
            valid_from: None,
            valid_until: None,
            standard_price: dec!(65.00),
            premium_price: dec!(85.00),
            pre_show_drinks_price: dec!(12.50),
            after_party_price: dec!(19.50),
        }],
    };
    let event = ShowEvent {
        id: "event-1".to_string(),
        show_id: "show-1".to_string(),
        starts_at: Utc::now() + Duration::days(30),
        price_profile_id: Some("season-2025".to_string()),
    };
    (show, event)
}

fn summer10() -> PromoCodeRule {
    PromoCodeRule {
        code: "SUMMER10".to_string(),
        enabled: true,
        kind: PromoKind::Percentage {
            percentage: dec!(10),
        },
        scope: PromoScope::ArrangementOnly,
        constraints: PromoConstraints::default(),
        allow_stacking: true,
        allow_with_voucher: true,
    }
}

#[test]
fn booking_paid_in_two_installments_then_invoiced() {
    let (show, event) = catalog();
    let rule = summer10();
    let now = Utc::now();

    let request = BookingComputationRequest {
        guest_count: 4,
        tier: PackageTier::Standard,
        addons: vec![AddonSelection {
            kind: AddonKind::PreShowDrinks,
            quantity: 4,
        }],
        merch: vec![],
        promo_code: Some("SUMMER10".to_string()),
        price_override: None,
        booking_date: now,
    };

    // 4 × €65 + 4 × €12.50 = €310, minus 10% of the ticket value
    let quote = compute_booking_totals(&request, &show, &event, Some(&rule)).unwrap();
    assert_eq!(quote.totals.subtotal, dec!(310.00));
    assert_eq!(quote.totals.discount_amount, dec!(26.00));
    assert_eq!(quote.totals.amount_due, dec!(284.00));

    let financials = BookingFinancials::from_totals(&quote.totals);

    // Deposit, then the remainder
    let deposit = register_payment(
        "res-1",
        &financials,
        dec!(100.00),
        "pin",
        PaymentType::Deposit,
        now,
    )
    .unwrap();
    assert!(!deposit.financials.is_paid);
    assert!(deposit.events.is_empty());

    let settled = register_payment(
        "res-1",
        &deposit.financials,
        dec!(184.00),
        "bank transfer",
        PaymentType::Final,
        now,
    )
    .unwrap();
    assert!(settled.financials.is_paid);
    assert_eq!(settled.events.len(), 1);
    assert!(matches!(
        settled.events[0],
        NotificationEvent::PaidInFull { .. }
    ));

    // Invoice compiled later from the persisted breakdown
    let invoice = generate_invoice(
        &settled.financials.price_breakdown,
        &[],
        now,
        14,
    )
    .unwrap();
    assert_eq!(invoice.totals.total_incl, dec!(310.00));
    let item_sum: Decimal = invoice.items.iter().map(|i| i.total).sum();
    assert_eq!(invoice.totals.total_incl, item_sum);

    let (sent, _) = issue(&invoice, now).unwrap();
    let (paid, _) = mark_paid(&sent, now).unwrap();
    assert!(paid.paid_at.is_some());
}

#[test]
fn change_request_reopens_settled_booking() {
    let (show, event) = catalog();
    let now = Utc::now();

    let mut request = BookingComputationRequest {
        guest_count: 4,
        tier: PackageTier::Standard,
        addons: vec![],
        merch: vec![],
        promo_code: None,
        price_override: None,
        booking_date: now,
    };

    let quote = compute_booking_totals(&request, &show, &event, None).unwrap();
    let financials = BookingFinancials::from_totals(&quote.totals);

    let settled = register_payment(
        "res-2",
        &financials,
        dec!(260.00),
        "pin",
        PaymentType::Final,
        now,
    )
    .unwrap();
    assert!(settled.financials.is_paid);

    // Two more guests join; the booking is recomputed and reopens
    request.guest_count = 6;
    let new_quote = compute_booking_totals(&request, &show, &event, None).unwrap();
    let update =
        recalculate_after_amount_change("res-2", &settled.financials, &new_quote.totals);

    assert_eq!(update.financials.final_total, dec!(390.00));
    assert_eq!(update.financials.paid, dec!(260.00));
    assert!(!update.financials.is_paid);
    assert_eq!(update.financials.outstanding_amount(), dec!(130.00));
    assert_eq!(update.financials.paid_at, None);
}
