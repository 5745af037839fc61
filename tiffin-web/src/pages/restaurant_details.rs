//! Restaurant detail page
//!
//! Resolves the route's restaurant id through the repository and hands the
//! record to `RestaurantDetailView`. Lookup failures render the not-found view.
//! Favorite and cart state live in `RestaurantPage`, which is keyed by
//! restaurant id so moving between restaurants starts from fresh state.

use crate::context::use_app_context;
use crate::navigation::{go_back, go_home, open_menu_item, RouterNav};
use dioxus::prelude::*;
use tiffin_core::{
    resolve_restaurant_id, CartMutable, LookupError, Restaurant, RestaurantRepository,
};
use tiffin_ui::{NotFoundView, RestaurantDetailView};
use tracing::{debug, warn};

/// Resolve the route parameter, applying the configured missing-id fallback
pub fn lookup_restaurant(
    repository: &dyn RestaurantRepository,
    raw_id: &str,
    missing_id_fallback: Option<&str>,
) -> Result<Restaurant, LookupError> {
    let id = resolve_restaurant_id(Some(raw_id), missing_id_fallback)?;
    repository.get_restaurant(&id)
}

/// Add an item and return the cart total to show afterwards
pub fn add_to_cart(cart: &dyn CartMutable, restaurant_id: &str, item_id: u32) -> String {
    cart.add_item(restaurant_id, item_id);
    cart.total_label()
}

#[component]
pub fn RestaurantDetails(id: String) -> Element {
    let app = use_app_context();

    let lookup = lookup_restaurant(
        app.repository.as_ref(),
        &id,
        app.config.missing_id_fallback.as_deref(),
    );

    match lookup {
        Ok(restaurant) => {
            debug!("Showing restaurant {}", restaurant.id);
            let restaurant_id = restaurant.id.clone();
            rsx! {
                RestaurantPage { key: "{restaurant_id}", restaurant }
            }
        }
        Err(e) => {
            warn!("Restaurant page lookup failed for '{id}': {e}");
            rsx! {
                NotFoundView {
                    title: "Restaurant not found".to_string(),
                    message: Some(e.to_string()),
                    on_home: move |_| go_home(&mut RouterNav),
                }
            }
        }
    }
}

#[component]
fn RestaurantPage(restaurant: Restaurant) -> Element {
    let caps = use_app_context().capabilities;
    let restaurant_id = restaurant.id.clone();

    let mut is_favorite = use_signal(|| caps.favorites.is_favorite(&restaurant_id));
    let mut cart_total = use_signal(|| caps.cart.total_label());

    rsx! {
        RestaurantDetailView {
            restaurant,
            is_favorite: is_favorite(),
            cart_total: cart_total(),
            on_back: move |_| go_back(&mut RouterNav),
            on_share: {
                let caps = caps.clone();
                let restaurant_id = restaurant_id.clone();
                move |_| caps.share.share(&restaurant_id)
            },
            on_favorite: {
                let caps = caps.clone();
                let restaurant_id = restaurant_id.clone();
                move |_| is_favorite.set(caps.favorites.toggle_favorite(&restaurant_id))
            },
            on_item_select: {
                let restaurant_id = restaurant_id.clone();
                move |item_id: u32| open_menu_item(&mut RouterNav, &restaurant_id, item_id)
            },
            on_item_add: {
                let caps = caps.clone();
                let restaurant_id = restaurant_id.clone();
                move |item_id: u32| {
                    cart_total.set(add_to_cart(caps.cart.as_ref(), &restaurant_id, item_id))
                }
            },
            on_view_cart: |_| debug!("View cart pressed; there is no cart screen"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tiffin_core::{Capabilities, FixtureRepository, NoopActions, LEGACY_DEFAULT_RESTAURANT_ID};

    #[derive(Default)]
    struct CountingCart {
        items: RefCell<Vec<u32>>,
    }

    impl CartMutable for CountingCart {
        fn add_item(&self, _restaurant_id: &str, item_id: u32) {
            self.items.borrow_mut().push(item_id);
        }

        fn total_label(&self) -> String {
            format!("{} items", self.items.borrow().len())
        }
    }

    #[test]
    fn test_lookup_known_restaurant() {
        let repo = FixtureRepository::embedded();
        let restaurant = lookup_restaurant(&repo, "1", None).unwrap();
        assert_eq!(restaurant.id, "1");
        assert_eq!(restaurant.categories[0], "Recommended");
    }

    #[test]
    fn test_lookup_unknown_restaurant() {
        let repo = FixtureRepository::embedded();
        assert_eq!(
            lookup_restaurant(&repo, "42", None),
            Err(LookupError::RestaurantNotFound("42".to_string()))
        );
    }

    #[test]
    fn test_missing_id_is_not_found_by_default() {
        let repo = FixtureRepository::embedded();
        assert_eq!(
            lookup_restaurant(&repo, "", None),
            Err(LookupError::MissingIdentifier)
        );
    }

    #[test]
    fn test_missing_id_legacy_fallback() {
        let repo = FixtureRepository::embedded();
        let restaurant = lookup_restaurant(&repo, "", Some(LEGACY_DEFAULT_RESTAURANT_ID)).unwrap();
        assert_eq!(restaurant.id, "1");
    }

    #[test]
    fn test_add_to_cart_returns_updated_total() {
        let cart = CountingCart::default();
        assert_eq!(add_to_cart(&cart, "1", 2), "1 items");
        assert_eq!(add_to_cart(&cart, "1", 3), "2 items");
        assert_eq!(*cart.items.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_add_to_noop_cart_stays_empty() {
        let caps = Capabilities::noop();
        assert_eq!(add_to_cart(caps.cart.as_ref(), "1", 1), "₹0");
        assert_eq!(add_to_cart(&NoopActions, "2", 4), "₹0");
    }
}
