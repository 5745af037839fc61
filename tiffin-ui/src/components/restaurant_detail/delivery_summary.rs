use crate::components::icons::MapPinIcon;
use dioxus::prelude::*;

/// Delivery fee and time panel, with the pickup address underneath
#[component]
pub fn DeliverySummary(delivery_fee: String, delivery_time: String, address: String) -> Element {
    rsx! {
        div { class: "mt-4 rounded-xl bg-white shadow-sm p-4",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "font-medium text-sm", "Delivery Fee" }
                    p { class: "text-green-600 font-semibold", "{delivery_fee}" }
                }
                div { class: "text-right",
                    p { class: "font-medium text-sm", "Delivery Time" }
                    p { class: "text-gray-600", "{delivery_time}" }
                }
            }
            div { class: "flex items-center gap-1 mt-3 text-xs text-gray-500",
                MapPinIcon { class: "h-3 w-3" }
                span { "{address}" }
            }
        }
    }
}
