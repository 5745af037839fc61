//! Restaurant detail view component
//!
//! Pure rendering of one restaurant. The only state it owns is the chip
//! highlight, which starts on the first category for every restaurant and
//! does not filter the menu.

use super::{CartBar, CategoryChips, DeliverySummary, MenuItemCard, OffersStrip, RestaurantHeader};
use crate::components::helpers::SectionHeading;
use crate::display_types::menu_heading;
use dioxus::prelude::*;
use tiffin_core::Restaurant;

#[component]
pub fn RestaurantDetailView(
    restaurant: Restaurant,
    is_favorite: bool,
    cart_total: String,
    on_back: EventHandler<()>,
    on_share: EventHandler<()>,
    on_favorite: EventHandler<()>,
    // Called with the item id when a menu card is selected
    on_item_select: EventHandler<u32>,
    on_item_add: EventHandler<u32>,
    on_view_cart: EventHandler<()>,
) -> Element {
    let mut selected_category = use_signal(|| 0usize);

    let heading = menu_heading(&restaurant.categories);

    rsx! {
        div { "data-testid": "restaurant-detail",
            RestaurantHeader {
                restaurant: restaurant.clone(),
                is_favorite,
                on_back,
                on_share,
                on_favorite,
            }

            div { class: "px-4 pb-28",
                DeliverySummary {
                    delivery_fee: restaurant.delivery_fee.clone(),
                    delivery_time: restaurant.delivery_time.clone(),
                    address: restaurant.address.clone(),
                }

                OffersStrip { offers: restaurant.offers.clone() }

                if !restaurant.categories.is_empty() {
                    CategoryChips {
                        categories: restaurant.categories.clone(),
                        selected: selected_category(),
                        on_select: move |index| selected_category.set(index),
                    }
                }

                hr { class: "my-6 border-gray-200" }

                div { class: "space-y-4",
                    SectionHeading { title: heading }
                    for item in restaurant.menu_items.iter() {
                        MenuItemCard {
                            key: "{item.id}",
                            item: item.clone(),
                            on_select: on_item_select,
                            on_add: on_item_add,
                        }
                    }
                }
            }

            CartBar { total_label: cart_total, on_view_cart }
        }
    }
}
