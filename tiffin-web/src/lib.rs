pub mod context;
#[cfg(feature = "desktop")]
pub mod desktop;
pub mod logging;
pub mod navigation;
pub mod pages;

use context::{app_config, AppContext};
use dioxus::prelude::*;
use pages::{AppShell, FoodItemDetails, Home, NotFound, Offers, RestaurantDetails};

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/offers")]
    Offers {},
    #[route("/restaurant/:id")]
    RestaurantDetails { id: String },
    #[route("/restaurant/:restaurant_id/item/:item_id")]
    FoodItemDetails { restaurant_id: String, item_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| AppContext::from_config(app_config().clone()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(path: &str) -> Option<Route> {
        Route::from_str(path).ok()
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(parse("/"), Some(Route::Home {}));
    }

    #[test]
    fn test_offers() {
        assert_eq!(parse("/offers"), Some(Route::Offers {}));
    }

    #[test]
    fn test_restaurant_captures_id() {
        assert_eq!(
            parse("/restaurant/42"),
            Some(Route::RestaurantDetails {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_food_item_captures_both_ids() {
        assert_eq!(
            parse("/restaurant/42/item/7"),
            Some(Route::FoodItemDetails {
                restaurant_id: "42".to_string(),
                item_id: "7".to_string(),
            })
        );
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        for path in ["/checkout", "/restaurant/42/menu", "/offers/today/extra"] {
            assert!(
                matches!(parse(path), Some(Route::NotFound { .. })),
                "{path} should be NotFound"
            );
        }
    }

    #[test]
    fn test_not_found_keeps_segments() {
        assert_eq!(
            parse("/no/such/page"),
            Some(Route::NotFound {
                segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
            })
        );
    }

    #[test]
    fn test_routes_format_back_to_paths() {
        let cases = [
            (Route::Home {}, "/"),
            (Route::Offers {}, "/offers"),
            (
                Route::RestaurantDetails {
                    id: "42".to_string(),
                },
                "/restaurant/42",
            ),
            (
                Route::FoodItemDetails {
                    restaurant_id: "42".to_string(),
                    item_id: "7".to_string(),
                },
                "/restaurant/42/item/7",
            ),
        ];
        for (route, path) in cases {
            assert_eq!(route.to_string(), path);
            assert_eq!(parse(path), Some(route));
        }
    }
}
