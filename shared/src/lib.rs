//! Shared domain types for the Showbill booking platform
//!
//! Value types used across the booking engine and its collaborators:
//! line items, booking financials, promo rules, price profiles and
//! invoices. These types carry no business logic beyond cheap derived
//! accessors; all computation lives in `showbill-engine`.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
