//! Home view component - pure rendering, no data fetching

use crate::components::helpers::SectionHeading;
use crate::components::icons::{ChevronRightIcon, TagIcon};
use crate::components::restaurant_card::RestaurantCard;
use dioxus::prelude::*;
use tiffin_core::RestaurantSummary;

#[component]
pub fn HomeView(
    restaurants: Vec<RestaurantSummary>,
    // Called with the restaurant id
    on_restaurant_click: EventHandler<String>,
    on_offers_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "px-4 py-6 pb-10", "data-testid": "home",
            h1 { class: "text-2xl font-bold", "tiffin" }
            p { class: "text-sm text-gray-600 mb-4", "Food from restaurants near you" }

            button {
                class: "w-full flex items-center justify-between rounded-xl bg-orange-50 border border-orange-200 p-4 mb-6 text-left",
                r#type: "button",
                "data-testid": "offers-link",
                onclick: move |_| on_offers_click.call(()),
                div { class: "flex items-center gap-3",
                    TagIcon { class: "h-5 w-5 text-orange-600" }
                    div {
                        p { class: "font-semibold text-orange-600", "Offers for you" }
                        p { class: "text-xs text-gray-600", "Discounts and free delivery" }
                    }
                }
                ChevronRightIcon { class: "h-5 w-5 text-orange-600" }
            }

            SectionHeading { title: "Restaurants near you".to_string() }
            if restaurants.is_empty() {
                p { class: "text-gray-500 text-center py-12", "No restaurants available right now" }
            } else {
                div { class: "space-y-4",
                    for restaurant in restaurants.iter() {
                        RestaurantCard {
                            key: "{restaurant.id}",
                            restaurant: restaurant.clone(),
                            on_click: on_restaurant_click,
                        }
                    }
                }
            }
        }
    }
}
