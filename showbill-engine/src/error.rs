//! Engine error types
//!
//! Only two failure classes surface as `Err`: broken catalog
//! configuration (no sensible default price exists, must propagate)
//! and rejected inputs (the prior state stands). Promo code
//! rejection is not an error; see [`crate::pricing::promo::PromoOutcome`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Broken show/profile configuration. Fatal, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Rejected input (negative target total, non-positive payment,
    /// edit on a non-draft invoice). The computation is not applied.
    #[error("validation error: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn configuration(message: impl Into<String>) -> Self {
        EngineError::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }
}
