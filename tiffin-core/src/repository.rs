//! Lookup interface the screens read restaurant data through
//!
//! Screens only see `RestaurantRepository`, so the fixture can be swapped for
//! a real data source without touching presentation code.

use crate::model::{MenuItem, OfferListing, Restaurant, RestaurantSummary};
use thiserror::Error;

/// Identifier the mock screens used to substitute for a missing id
pub const LEGACY_DEFAULT_RESTAURANT_ID: &str = "1";

/// Why a route parameter did not resolve to a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No restaurant identifier was given")]
    MissingIdentifier,
    #[error("Restaurant '{0}' not found")]
    RestaurantNotFound(String),
    #[error("Item {item_id} not found on the menu of restaurant '{restaurant_id}'")]
    MenuItemNotFound { restaurant_id: String, item_id: u32 },
    #[error("'{0}' is not a valid menu item identifier")]
    InvalidItemIdentifier(String),
}

/// Read-only source of restaurant records
pub trait RestaurantRepository {
    fn get_restaurant(&self, id: &str) -> Result<Restaurant, LookupError>;

    fn get_menu_item(&self, restaurant_id: &str, item_id: &str) -> Result<MenuItem, LookupError>;

    /// Every restaurant, in fixture order
    fn list_restaurants(&self) -> Vec<RestaurantSummary>;

    /// Every offer of every restaurant, grouped by restaurant in fixture order
    fn list_offers(&self) -> Vec<OfferListing>;
}

/// Turn a raw restaurant route parameter into an identifier.
///
/// Empty or whitespace-only input is `MissingIdentifier` unless a fallback is
/// configured, in which case the fallback is used verbatim.
pub fn resolve_restaurant_id(
    raw: Option<&str>,
    fallback: Option<&str>,
) -> Result<String, LookupError> {
    match raw.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => Ok(id.to_string()),
        None => fallback
            .map(str::to_string)
            .ok_or(LookupError::MissingIdentifier),
    }
}

/// Parse a menu item route parameter. Item ids are unsigned integers.
pub fn parse_item_id(raw: &str) -> Result<u32, LookupError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| LookupError::InvalidItemIdentifier(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_present_id() {
        assert_eq!(resolve_restaurant_id(Some("42"), None), Ok("42".to_string()));
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        assert_eq!(resolve_restaurant_id(Some(" 7 "), None), Ok("7".to_string()));
    }

    #[test]
    fn test_resolve_missing_without_fallback() {
        assert_eq!(
            resolve_restaurant_id(None, None),
            Err(LookupError::MissingIdentifier)
        );
        assert_eq!(
            resolve_restaurant_id(Some("   "), None),
            Err(LookupError::MissingIdentifier)
        );
    }

    #[test]
    fn test_resolve_missing_with_legacy_fallback() {
        // Old mock screens silently showed restaurant "1"; kept behind config.
        let id = resolve_restaurant_id(None, Some(LEGACY_DEFAULT_RESTAURANT_ID));
        assert_eq!(id, Ok("1".to_string()));
    }

    #[test]
    fn test_fallback_ignored_when_id_present() {
        assert_eq!(
            resolve_restaurant_id(Some("3"), Some(LEGACY_DEFAULT_RESTAURANT_ID)),
            Ok("3".to_string())
        );
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("7"), Ok(7));
        assert_eq!(
            parse_item_id("seven"),
            Err(LookupError::InvalidItemIdentifier("seven".to_string()))
        );
        assert_eq!(
            parse_item_id("-1"),
            Err(LookupError::InvalidItemIdentifier("-1".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LookupError::MenuItemNotFound {
            restaurant_id: "1".to_string(),
            item_id: 9,
        };
        assert_eq!(
            err.to_string(),
            "Item 9 not found on the menu of restaurant '1'"
        );
        assert_eq!(
            LookupError::RestaurantNotFound("42".to_string()).to_string(),
            "Restaurant '42' not found"
        );
    }
}
