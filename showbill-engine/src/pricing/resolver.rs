//! Price profile resolution
//!
//! Resolves the single price profile in effect for a scheduled event.
//! A show without profiles is broken configuration: there is no
//! sensible default price, so the error propagates to the caller.

use crate::error::EngineError;
use shared::models::{PriceProfile, Show, ShowEvent};

/// Resolve the price profile applicable to an event
///
/// An explicit profile reference on the event wins; an unknown
/// reference is a configuration error, never silently substituted.
/// Without a reference the show's first profile applies.
pub fn resolve_price_profile<'a>(
    show: &'a Show,
    event: &ShowEvent,
) -> Result<&'a PriceProfile, EngineError> {
    if show.price_profiles.is_empty() {
        return Err(EngineError::configuration(format!(
            "show '{}' has no price profiles",
            show.id
        )));
    }

    match &event.price_profile_id {
        Some(profile_id) => show
            .price_profiles
            .iter()
            .find(|p| &p.id == profile_id)
            .ok_or_else(|| {
                EngineError::configuration(format!(
                    "price profile '{}' referenced by event '{}' does not exist on show '{}'",
                    profile_id, event.id, show.id
                ))
            }),
        None => Ok(&show.price_profiles[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn make_profile(id: &str) -> PriceProfile {
        PriceProfile {
            id: id.to_string(),
            name: format!("Profile {id}"),
            valid_from: None,
            valid_until: None,
            standard_price: dec!(65.00),
            premium_price: dec!(85.00),
            pre_show_drinks_price: dec!(12.50),
            after_party_price: dec!(19.50),
        }
    }

    fn make_show(profiles: Vec<PriceProfile>) -> Show {
        Show {
            id: "show-1".to_string(),
            name: "Midnight Revue".to_string(),
            price_profiles: profiles,
        }
    }

    fn make_event(profile_id: Option<&str>) -> ShowEvent {
        ShowEvent {
            id: "event-1".to_string(),
            show_id: "show-1".to_string(),
            starts_at: Utc::now(),
            price_profile_id: profile_id.map(str::to_string),
        }
    }

    #[test]
    fn test_explicit_profile_reference_wins() {
        let show = make_show(vec![make_profile("a"), make_profile("b")]);
        let event = make_event(Some("b"));
        let profile = resolve_price_profile(&show, &event).unwrap();
        assert_eq!(profile.id, "b");
    }

    #[test]
    fn test_falls_back_to_first_profile() {
        let show = make_show(vec![make_profile("a"), make_profile("b")]);
        let event = make_event(None);
        let profile = resolve_price_profile(&show, &event).unwrap();
        assert_eq!(profile.id, "a");
    }

    #[test]
    fn test_zero_profiles_is_configuration_error() {
        let show = make_show(vec![]);
        let event = make_event(None);
        let err = resolve_price_profile(&show, &event).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_unknown_profile_reference_is_configuration_error() {
        let show = make_show(vec![make_profile("a")]);
        let event = make_event(Some("missing"));
        let err = resolve_price_profile(&show, &event).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }
}
