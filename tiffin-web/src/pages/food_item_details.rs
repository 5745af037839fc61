//! Food item detail page

use crate::context::use_app_context;
use crate::navigation::{go_back, go_home, open_restaurant, RouterNav};
use dioxus::prelude::*;
use tiffin_core::{LookupError, MenuItem, RestaurantRepository};
use tiffin_ui::{FoodItemView, NotFoundView};
use tracing::warn;

/// Find the item and the name of the restaurant serving it
pub fn lookup_food_item(
    repository: &dyn RestaurantRepository,
    restaurant_id: &str,
    item_id: &str,
) -> Result<(String, MenuItem), LookupError> {
    let restaurant = repository.get_restaurant(restaurant_id)?;
    let item = repository.get_menu_item(restaurant_id, item_id)?;
    Ok((restaurant.name, item))
}

#[component]
pub fn FoodItemDetails(restaurant_id: String, item_id: String) -> Element {
    let app = use_app_context();

    match lookup_food_item(app.repository.as_ref(), &restaurant_id, &item_id) {
        Ok((restaurant_name, item)) => {
            let cart = app.capabilities.cart.clone();
            let rid = restaurant_id.clone();

            rsx! {
                FoodItemView {
                    item,
                    restaurant_name,
                    on_back: move |_| go_back(&mut RouterNav),
                    on_restaurant_click: move |_| open_restaurant(&mut RouterNav, &restaurant_id),
                    on_add: move |id: u32| cart.add_item(&rid, id),
                }
            }
        }
        Err(e) => {
            warn!("Food item page lookup failed for {restaurant_id}/{item_id}: {e}");
            rsx! {
                NotFoundView {
                    title: "Dish not found".to_string(),
                    message: Some(e.to_string()),
                    on_home: move |_| go_home(&mut RouterNav),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_core::FixtureRepository;

    #[test]
    fn test_lookup_item_with_restaurant_name() {
        let repo = FixtureRepository::embedded();
        let (name, item) = lookup_food_item(&repo, "1", "3").unwrap();
        assert_eq!(name, "Pasta Al Manal");
        assert_eq!(item.name, "Chicken Tikka");
        assert_eq!(item.category, "Starters");
    }

    #[test]
    fn test_lookup_failures() {
        let repo = FixtureRepository::embedded();
        assert_eq!(
            lookup_food_item(&repo, "42", "7"),
            Err(LookupError::RestaurantNotFound("42".to_string()))
        );
        assert_eq!(
            lookup_food_item(&repo, "1", "7"),
            Err(LookupError::MenuItemNotFound {
                restaurant_id: "1".to_string(),
                item_id: 7,
            })
        );
        assert_eq!(
            lookup_food_item(&repo, "1", "tikka"),
            Err(LookupError::InvalidItemIdentifier("tikka".to_string()))
        );
    }
}
