use crate::components::helpers::SectionHeading;
use dioxus::prelude::*;
use tiffin_core::Offer;

/// Horizontally scrolling offer cards. Renders nothing without offers.
#[component]
pub fn OffersStrip(offers: Vec<Offer>) -> Element {
    if offers.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "mt-4",
            SectionHeading { title: "Offers".to_string() }
            div { class: "flex gap-3 overflow-x-auto pb-2",
                for (index , offer) in offers.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "flex-none w-[200px] rounded-xl border border-orange-200 bg-orange-50 p-3",
                        "data-testid": "offer-card",
                        p { class: "font-semibold text-orange-600 text-sm", "{offer.text}" }
                        p { class: "text-xs text-gray-600 mt-1", "{offer.subtext}" }
                    }
                }
            }
        }
    }
}
