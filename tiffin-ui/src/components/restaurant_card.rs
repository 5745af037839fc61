//! Restaurant card component - pure view with callbacks

use crate::components::icons::{ClockIcon, MapPinIcon, TagIcon};
use crate::components::rating::RatingBadge;
use dioxus::prelude::*;
use tiffin_core::RestaurantSummary;

/// Home listing card. Navigation is handled via on_click, called with the
/// restaurant id.
#[component]
pub fn RestaurantCard(restaurant: RestaurantSummary, on_click: EventHandler<String>) -> Element {
    let restaurant_id = restaurant.id.clone();

    rsx! {
        div {
            class: "rounded-2xl overflow-hidden border border-gray-200 shadow-sm hover:shadow-md transition-shadow cursor-pointer",
            "data-testid": "restaurant-card",
            onclick: move |_| on_click.call(restaurant_id.clone()),
            div { class: "relative h-[160px] bg-gray-100",
                img {
                    src: "{restaurant.image}",
                    alt: "{restaurant.name}",
                    class: "w-full h-full object-cover",
                }
                if let Some(offer) = &restaurant.headline_offer {
                    div { class: "absolute bottom-2 left-2 flex items-center gap-1 bg-orange-500 text-white text-xs font-semibold px-2 py-1 rounded",
                        TagIcon { class: "h-3 w-3" }
                        "{offer.text}"
                    }
                }
            }
            div { class: "p-4",
                div { class: "flex items-center justify-between",
                    h3 { class: "font-bold text-lg truncate", "{restaurant.name}" }
                    RatingBadge { rating: restaurant.rating.clone() }
                }
                p { class: "text-sm text-gray-600", "{restaurant.cuisine}" }
                div { class: "flex items-center gap-4 text-sm text-gray-500 mt-2",
                    div { class: "flex items-center gap-1",
                        ClockIcon { class: "h-4 w-4" }
                        span { "{restaurant.delivery_time}" }
                    }
                    div { class: "flex items-center gap-1",
                        MapPinIcon { class: "h-4 w-4" }
                        span { "{restaurant.distance}" }
                    }
                }
            }
        }
    }
}
