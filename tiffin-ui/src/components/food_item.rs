//! Food item detail view component

use crate::components::helpers::BackButton;
use crate::components::icons::ChevronRightIcon;
use crate::components::rating::RatingBadge;
use crate::components::veg_indicator::VegIndicator;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tiffin_core::MenuItem;

#[component]
pub fn FoodItemView(
    item: MenuItem,
    restaurant_name: String,
    on_back: EventHandler<()>,
    on_restaurant_click: EventHandler<()>,
    on_add: EventHandler<u32>,
) -> Element {
    let item_id = item.id;

    rsx! {
        div { "data-testid": "food-item",
            div { class: "relative h-[300px] bg-gray-100",
                img {
                    src: "{item.image}",
                    alt: "{item.name}",
                    class: "w-full h-full object-cover",
                }
                div { class: "absolute top-4 left-4 bg-white/90 rounded-full p-2",
                    BackButton { on_click: on_back }
                }
            }

            div { class: "px-4 py-6",
                div { class: "flex items-start gap-2",
                    VegIndicator { is_veg: item.is_veg }
                    div { class: "flex-1",
                        h1 { class: "text-2xl font-bold", "{item.name}" }
                        p { class: "text-sm text-gray-500 mt-1", "{item.category}" }
                    }
                    RatingBadge { rating: item.rating.clone() }
                }

                p { class: "text-gray-700 mt-4", "{item.description}" }

                div { class: "flex items-center justify-between mt-6",
                    div { class: "flex items-center gap-2",
                        span { class: "font-semibold text-2xl", "{item.price}" }
                        span { class: "text-gray-500 line-through", "{item.original_price}" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        test_id: Some("add-button".to_string()),
                        onclick: move |_| on_add.call(item_id),
                        "ADD"
                    }
                }

                button {
                    class: "w-full flex items-center justify-between mt-8 rounded-xl border border-gray-200 p-4 text-left hover:bg-gray-50",
                    r#type: "button",
                    "data-testid": "restaurant-link",
                    onclick: move |_| on_restaurant_click.call(()),
                    div {
                        p { class: "text-xs text-gray-500", "From" }
                        p { class: "font-semibold", "{restaurant_name}" }
                    }
                    ChevronRightIcon { class: "h-5 w-5 text-gray-400" }
                }
            }
        }
    }
}
