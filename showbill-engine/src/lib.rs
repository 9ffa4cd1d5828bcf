//! Showbill booking engine
//!
//! The financial computation core of the Showbill dinner-theatre
//! platform: booking pricing, promo code evaluation, admin price
//! overrides, the payment ledger and VAT invoice compilation.
//!
//! Every operation is a pure transformation over in-memory records;
//! callers own persistence, transport and UI. Functions take the
//! current record by reference and return a fresh value, which keeps
//! recomputation (change requests, bulk import corrections) safe to
//! re-run and lets the audit layer diff before/after snapshots.

pub mod audit;
pub mod error;
pub mod events;
pub mod invoicing;
pub mod ledger;
pub mod money;
pub mod pricing;

pub use error::EngineError;
pub use events::NotificationEvent;
pub use pricing::engine::{BookingComputationRequest, BookingQuote, compute_booking_totals};
