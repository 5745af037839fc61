//! Action capabilities for the share, favorite and add-to-cart controls
//!
//! Screens call these instead of owning the behavior. The shipped
//! implementation is `NoopActions`: it records nothing beyond a debug log,
//! and the cart total stays at zero.

use std::rc::Rc;
use tracing::debug;

/// Cart total shown when nothing has been added
pub const EMPTY_CART_TOTAL: &str = "₹0";

pub trait Favoritable {
    /// Flip the favorite flag. Returns the new state.
    fn toggle_favorite(&self, restaurant_id: &str) -> bool;

    fn is_favorite(&self, restaurant_id: &str) -> bool;
}

pub trait Shareable {
    fn share(&self, restaurant_id: &str);
}

pub trait CartMutable {
    fn add_item(&self, restaurant_id: &str, item_id: u32);

    /// Currency-formatted total for the cart bar
    fn total_label(&self) -> String;
}

/// Capability set handed to the screens
#[derive(Clone)]
pub struct Capabilities {
    pub favorites: Rc<dyn Favoritable>,
    pub share: Rc<dyn Shareable>,
    pub cart: Rc<dyn CartMutable>,
}

impl Capabilities {
    pub fn noop() -> Self {
        let actions = Rc::new(NoopActions);
        Self {
            favorites: actions.clone(),
            share: actions.clone(),
            cart: actions,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::noop()
    }
}

impl PartialEq for Capabilities {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.favorites, &other.favorites)
            && Rc::ptr_eq(&self.share, &other.share)
            && Rc::ptr_eq(&self.cart, &other.cart)
    }
}

/// Accepts every action and changes nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopActions;

impl Favoritable for NoopActions {
    fn toggle_favorite(&self, restaurant_id: &str) -> bool {
        debug!("Favorite toggled for restaurant {restaurant_id} (no-op)");
        false
    }

    fn is_favorite(&self, _restaurant_id: &str) -> bool {
        false
    }
}

impl Shareable for NoopActions {
    fn share(&self, restaurant_id: &str) {
        debug!("Share requested for restaurant {restaurant_id} (no-op)");
    }
}

impl CartMutable for NoopActions {
    fn add_item(&self, restaurant_id: &str, item_id: u32) {
        debug!("Add to cart requested: restaurant {restaurant_id}, item {item_id} (no-op)");
    }

    fn total_label(&self) -> String {
        EMPTY_CART_TOTAL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingCart {
        added: RefCell<Vec<(String, u32)>>,
    }

    impl CartMutable for RecordingCart {
        fn add_item(&self, restaurant_id: &str, item_id: u32) {
            self.added
                .borrow_mut()
                .push((restaurant_id.to_string(), item_id));
        }

        fn total_label(&self) -> String {
            format!("{} items", self.added.borrow().len())
        }
    }

    #[test]
    fn test_noop_cart_total_never_changes() {
        let caps = Capabilities::noop();
        assert_eq!(caps.cart.total_label(), "₹0");
        caps.cart.add_item("1", 1);
        caps.cart.add_item("1", 3);
        assert_eq!(caps.cart.total_label(), "₹0");
    }

    #[test]
    fn test_noop_favorite_stays_off() {
        let caps = Capabilities::noop();
        assert!(!caps.favorites.toggle_favorite("1"));
        assert!(!caps.favorites.is_favorite("1"));
        caps.share.share("1");
    }

    #[test]
    fn test_injected_cart_receives_items() {
        let cart = Rc::new(RecordingCart::default());
        let caps = Capabilities {
            cart: cart.clone(),
            ..Capabilities::noop()
        };

        caps.cart.add_item("1", 2);
        assert_eq!(*cart.added.borrow(), vec![("1".to_string(), 2)]);
        assert_eq!(caps.cart.total_label(), "1 items");
    }

    #[test]
    fn test_capabilities_equality_is_identity() {
        let a = Capabilities::noop();
        let b = a.clone();
        assert!(a == b);
        assert!(a != Capabilities::noop());
    }
}
