use crate::components::icons::ShoppingBagIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Fixed bottom bar with the cart total
#[component]
pub fn CartBar(total_label: String, on_view_cart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fixed bottom-0 left-1/2 transform -translate-x-1/2 w-[430px] bg-white border-t border-gray-200 p-4 rounded-b-3xl",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                class: Some("w-full".to_string()),
                test_id: Some("view-cart".to_string()),
                onclick: move |_| on_view_cart.call(()),
                ShoppingBagIcon { class: "h-5 w-5" }
                "View Cart • {total_label}"
            }
            // Home indicator
            div { class: "flex justify-center pt-2",
                div { class: "w-[134px] h-[5px] bg-black rounded-full" }
            }
        }
    }
}
