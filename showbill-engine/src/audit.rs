//! Audit snapshots
//!
//! Every mutation in this crate returns a fresh value, so callers can
//! hand the external audit sink a (before, after, description) triple.
//! This module builds that triple and computes a per-field diff by
//! comparing the two states as JSON. Numbers are compared with a
//! small tolerance to absorb serialization precision loss. The
//! engine never writes audit logs itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Tolerance for numeric comparison across serialization round-trips
const FLOAT_EPSILON: f64 = 1e-9;

/// One changed field, with its old and new value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    /// Dotted field path ("totals.vat9")
    pub field: String,
    pub from: Value,
    pub to: Value,
}

/// The (before, after, description) triple consumed by the audit sink
#[derive(Debug, Clone, Serialize)]
pub struct ChangeRecord {
    pub description: String,
    pub before: Value,
    pub after: Value,
    pub changes: Vec<FieldChange>,
}

/// Build an audit record from two snapshots of the same entity
pub fn snapshot_change<T: Serialize>(
    description: impl Into<String>,
    before: &T,
    after: &T,
) -> ChangeRecord {
    let before = serde_json::to_value(before).unwrap_or(Value::Null);
    let after = serde_json::to_value(after).unwrap_or(Value::Null);
    let mut changes = Vec::new();
    diff_json_recursive(&before, &after, "", &mut changes);
    ChangeRecord {
        description: description.into(),
        before,
        after,
        changes,
    }
}

/// Compare two JSON values for equality, numbers with tolerance
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(fa), Some(fb)) => (fa - fb).abs() < FLOAT_EPSILON,
            _ => a == b,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(va, vb)| values_equal(va, vb))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, va)| b.get(key).is_some_and(|vb| values_equal(va, vb)))
        }
        _ => a == b,
    }
}

/// Recursively collect per-field differences
fn diff_json_recursive(from: &Value, to: &Value, path: &str, changes: &mut Vec<FieldChange>) {
    match (from, to) {
        (Value::Object(from_obj), Value::Object(to_obj)) => {
            let mut all_keys: BTreeSet<&String> = from_obj.keys().collect();
            all_keys.extend(to_obj.keys());

            for key in all_keys {
                let field_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };

                match (from_obj.get(key), to_obj.get(key)) {
                    (Some(f), Some(t)) => diff_json_recursive(f, t, &field_path, changes),
                    (Some(f), None) => changes.push(FieldChange {
                        field: field_path,
                        from: f.clone(),
                        to: Value::Null,
                    }),
                    (None, Some(t)) => changes.push(FieldChange {
                        field: field_path,
                        from: Value::Null,
                        to: t.clone(),
                    }),
                    (None, None) => unreachable!(),
                }
            }
        }

        // Arrays are compared wholesale, element order matters
        (Value::Array(_), Value::Array(_)) => {
            if !values_equal(from, to) {
                changes.push(FieldChange {
                    field: path.to_string(),
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        (Value::Number(from_num), Value::Number(to_num)) => {
            let are_equal = match (from_num.as_f64(), to_num.as_f64()) {
                (Some(f), Some(t)) => (f - t).abs() < FLOAT_EPSILON,
                _ => from_num == to_num,
            };
            if !are_equal {
                changes.push(FieldChange {
                    field: path.to_string(),
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }

        (f, t) => {
            if f != t {
                changes.push(FieldChange {
                    field: path.to_string(),
                    from: f.clone(),
                    to: t.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::register_payment;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use shared::models::{
        BookingFinancials, BookingTotals, ItemCategory, LineItem, PaymentType,
    };

    #[test]
    fn test_nested_field_diff() {
        let before = serde_json::json!({"totals": {"vat9": 18.25, "vat21": 11.96}});
        let after = serde_json::json!({"totals": {"vat9": 18.25, "vat21": 14.46}});
        let mut changes = Vec::new();
        diff_json_recursive(&before, &after, "", &mut changes);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "totals.vat21");
    }

    #[test]
    fn test_numeric_tolerance_suppresses_noise() {
        let before = serde_json::json!({"paid": 100.0});
        let after = serde_json::json!({"paid": 100.0000000001});
        let mut changes = Vec::new();
        diff_json_recursive(&before, &after, "", &mut changes);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_payment_registration_produces_audit_triple() {
        let items = vec![LineItem::new(
            "ticket",
            "Standard arrangement",
            2,
            dec!(65.00),
            ItemCategory::Ticket,
        )];
        let before = BookingFinancials::from_totals(&BookingTotals::new(items, dec!(0)));
        let update = register_payment(
            "res-1",
            &before,
            dec!(50.00),
            "pin",
            PaymentType::Deposit,
            Utc::now(),
        )
        .unwrap();

        let record = snapshot_change("payment registered", &before, &update.financials);
        assert_eq!(record.description, "payment registered");
        assert!(record.changes.iter().any(|c| c.field == "paid"));
        assert!(record.changes.iter().any(|c| c.field == "payments"));
    }
}
