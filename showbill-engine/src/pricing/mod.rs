//! Booking pricing pipeline
//!
//! Resolver → line item builder → promo evaluator → override resolver.
//! Every stage is a pure function of its inputs, so a booking can be
//! recomputed at any point in its lifecycle (change requests, bulk
//! import corrections) with identical results.

pub mod engine;
pub mod line_items;
pub mod overrides;
pub mod promo;
pub mod resolver;

pub use engine::{BookingComputationRequest, BookingQuote, compute_booking_totals};
pub use overrides::{OverrideResolution, apply_override, resolve_target_total};
pub use promo::{PromoOutcome, PromoRejection, evaluate_promo};
pub use resolver::resolve_price_profile;
