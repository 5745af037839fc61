//! Header image with navigation controls and restaurant overlay

use crate::components::icons::{ArrowLeftIcon, ClockIcon, HeartIcon, MapPinIcon, ShareIcon};
use crate::components::rating::RatingBadge;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tiffin_core::Restaurant;

#[component]
pub fn RestaurantHeader(
    restaurant: Restaurant,
    is_favorite: bool,
    on_back: EventHandler<()>,
    on_share: EventHandler<()>,
    on_favorite: EventHandler<()>,
) -> Element {
    let heart_class = if is_favorite {
        "h-5 w-5 fill-red-500 text-red-500"
    } else {
        "h-5 w-5"
    };
    let favorite_label = if is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        div { class: "relative h-[250px] overflow-hidden",
            img {
                src: "{restaurant.image}",
                alt: "{restaurant.name}",
                class: "w-full h-full object-cover",
            }

            div { class: "absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-black/30" }

            // Top navigation
            div { class: "absolute top-4 left-4 right-4 flex justify-between items-center",
                Button {
                    variant: ButtonVariant::Overlay,
                    size: ButtonSize::Icon,
                    aria_label: Some("Go back".to_string()),
                    test_id: Some("back-button".to_string()),
                    onclick: move |_| on_back.call(()),
                    ArrowLeftIcon { class: "h-5 w-5" }
                }
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Overlay,
                        size: ButtonSize::Icon,
                        aria_label: Some("Share".to_string()),
                        test_id: Some("share-button".to_string()),
                        onclick: move |_| on_share.call(()),
                        ShareIcon { class: "h-5 w-5" }
                    }
                    Button {
                        variant: ButtonVariant::Overlay,
                        size: ButtonSize::Icon,
                        aria_label: Some(favorite_label.to_string()),
                        test_id: Some("favorite-button".to_string()),
                        onclick: move |_| on_favorite.call(()),
                        HeartIcon { class: heart_class }
                    }
                }
            }

            // Restaurant info overlay
            div { class: "absolute bottom-4 left-4 right-4 text-white",
                h1 { class: "text-2xl font-bold mb-1", "{restaurant.name}" }
                p { class: "text-sm opacity-90 mb-2", "{restaurant.cuisine}" }
                div { class: "flex items-center gap-4 text-sm",
                    RatingBadge { rating: restaurant.rating.clone() }
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
