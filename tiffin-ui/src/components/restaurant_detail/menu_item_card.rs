//! Menu item card - pure view with callbacks

use crate::components::rating::RatingBadge;
use crate::components::veg_indicator::VegIndicator;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tiffin_core::MenuItem;

/// Selecting the card reports the item id through `on_select`. The ADD
/// control reports through `on_add` and does not select the card.
#[component]
pub fn MenuItemCard(
    item: MenuItem,
    on_select: EventHandler<u32>,
    on_add: EventHandler<u32>,
) -> Element {
    let item_id = item.id;

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 hover:shadow-md transition-shadow cursor-pointer",
            "data-testid": "menu-item-card",
            onclick: move |_| on_select.call(item_id),
            div { class: "flex",
                div { class: "flex-1 p-4",
                    div { class: "flex items-start gap-2 mb-2",
                        VegIndicator { is_veg: item.is_veg }
                        div { class: "flex-1",
                            h4 { class: "font-semibold text-base", "{item.name}" }
                            p { class: "text-sm text-gray-600 mt-1 line-clamp-2", "{item.description}" }
                        }
                    }
                    div { class: "mb-3",
                        RatingBadge { rating: item.rating.clone(), small: true }
                    }
                    div { class: "flex items-center gap-2",
                        span { class: "font-semibold text-lg", "{item.price}" }
                        span { class: "text-sm text-gray-500 line-through", "{item.original_price}" }
                    }
                }
                div { class: "relative w-[120px] h-[120px] p-4",
                    img {
                        src: "{item.image}",
                        alt: "{item.name}",
                        class: "w-full h-full object-cover rounded-lg",
                    }
                    div { class: "absolute -bottom-2 left-1/2 transform -translate-x-1/2",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            test_id: Some("add-button".to_string()),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_add.call(item_id);
                            },
                            "ADD"
                        }
                    }
                }
            }
        }
    }
}
