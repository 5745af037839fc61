//! Navigation actions
//!
//! Screen interactions become `NavAction` values, which a `NavSink` executes.
//! In the app the sink is `RouterNav`, which forwards to the router.

use crate::Route;
use dioxus::prelude::*;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Pop one history entry
    Back,
    GoTo(Route),
}

pub trait NavSink {
    fn dispatch(&mut self, action: NavAction);
}

/// Executes actions against the active router. Only valid inside a component
/// rendered under `Router::<Route>`.
pub struct RouterNav;

impl NavSink for RouterNav {
    fn dispatch(&mut self, action: NavAction) {
        match action {
            NavAction::Back => navigator().go_back(),
            NavAction::GoTo(route) => {
                if let Some(failure) = navigator().push(route.clone()) {
                    warn!("Navigation to {route} failed: {failure:?}");
                }
            }
        }
    }
}

/// Collects actions instead of executing them
impl NavSink for Vec<NavAction> {
    fn dispatch(&mut self, action: NavAction) {
        self.push(action);
    }
}

pub fn go_back(sink: &mut impl NavSink) {
    sink.dispatch(NavAction::Back);
}

pub fn go_home(sink: &mut impl NavSink) {
    sink.dispatch(NavAction::GoTo(Route::Home {}));
}

pub fn open_offers(sink: &mut impl NavSink) {
    sink.dispatch(NavAction::GoTo(Route::Offers {}));
}

pub fn open_restaurant(sink: &mut impl NavSink, restaurant_id: &str) {
    sink.dispatch(NavAction::GoTo(Route::RestaurantDetails {
        id: restaurant_id.to_string(),
    }));
}

pub fn open_menu_item(sink: &mut impl NavSink, restaurant_id: &str, item_id: u32) {
    sink.dispatch(NavAction::GoTo(Route::FoodItemDetails {
        restaurant_id: restaurant_id.to_string(),
        item_id: item_id.to_string(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_issues_single_action() {
        let mut log = Vec::new();
        go_back(&mut log);
        assert_eq!(log, vec![NavAction::Back]);
    }

    #[test]
    fn test_menu_item_path() {
        let mut log = Vec::new();
        open_menu_item(&mut log, "1", 3);

        assert_eq!(log.len(), 1);
        match &log[0] {
            NavAction::GoTo(route) => {
                assert_eq!(
                    *route,
                    Route::FoodItemDetails {
                        restaurant_id: "1".to_string(),
                        item_id: "3".to_string(),
                    }
                );
                assert_eq!(route.to_string(), "/restaurant/1/item/3");
            }
            other => panic!("expected GoTo, got {other:?}"),
        }
    }

    #[test]
    fn test_every_menu_item_links_to_its_restaurant() {
        let repo = tiffin_core::FixtureRepository::embedded();
        let restaurant = tiffin_core::RestaurantRepository::get_restaurant(&repo, "1").unwrap();

        let mut log = Vec::new();
        for item in &restaurant.menu_items {
            open_menu_item(&mut log, &restaurant.id, item.id);
        }

        let paths: Vec<String> = log
            .iter()
            .map(|action| match action {
                NavAction::GoTo(route) => route.to_string(),
                NavAction::Back => panic!("unexpected back action"),
            })
            .collect();
        assert_eq!(
            paths,
            vec![
                "/restaurant/1/item/1",
                "/restaurant/1/item/2",
                "/restaurant/1/item/3"
            ]
        );
    }

    #[test]
    fn test_restaurant_and_offers_targets() {
        let mut log = Vec::new();
        open_restaurant(&mut log, "2");
        open_offers(&mut log);
        go_home(&mut log);
        assert_eq!(
            log,
            vec![
                NavAction::GoTo(Route::RestaurantDetails {
                    id: "2".to_string()
                }),
                NavAction::GoTo(Route::Offers {}),
                NavAction::GoTo(Route::Home {}),
            ]
        );
    }
}
