//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary values are `Decimal`. Full precision is carried
//! through intermediate computation; rounding to the cent (half-up)
//! happens only when a value is written into a model field.

use crate::error::EngineError;
use rust_decimal::prelude::*;
use shared::models::PaymentRecord;

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount (€1,000,000)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: i32 = 9999;

/// Round a monetary value to the cent, half-up
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a payment amount before it enters the ledger
pub fn validate_payment_amount(amount: Decimal) -> Result<(), EngineError> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::validation(format!(
            "payment amount must be positive, got {amount}"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::validation(format!(
            "payment amount exceeds maximum allowed ({MAX_AMOUNT}), got {amount}"
        )));
    }
    Ok(())
}

/// Validate a line quantity
pub fn validate_quantity(quantity: i32, field_name: &str) -> Result<(), EngineError> {
    if quantity < 1 {
        return Err(EngineError::validation(format!(
            "{field_name} must be at least 1, got {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(EngineError::validation(format!(
            "{field_name} exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

/// Sum payment amounts from the full ledger
///
/// Always recomputed from the complete list rather than incremented,
/// which keeps payment registration idempotent against retries.
pub fn sum_payments(payments: &[PaymentRecord]) -> Decimal {
    round_money(payments.iter().map(|p| p.amount).sum())
}

/// Check if paid covers required, with ε tolerance for rounding
///
/// Returns true if paid >= required - 0.01
pub fn is_payment_sufficient(paid: Decimal, required: Decimal) -> bool {
    paid >= required - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
