//! Offers view component - every offer, grouped by the restaurant running it

use crate::components::helpers::BackButton;
use crate::components::icons::{ChevronRightIcon, TagIcon};
use dioxus::prelude::*;
use tiffin_core::OfferListing;

#[component]
pub fn OffersView(
    offers: Vec<OfferListing>,
    on_back: EventHandler<()>,
    // Called with the restaurant id of the selected offer
    on_offer_click: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "px-4 py-6", "data-testid": "offers",
            div { class: "flex items-center gap-3 mb-6",
                BackButton { on_click: on_back }
                h1 { class: "text-2xl font-bold", "Offers" }
            }

            if offers.is_empty() {
                p { class: "text-gray-500 text-center py-12", "No offers right now" }
            } else {
                div { class: "space-y-3",
                    for (index , listing) in offers.iter().enumerate() {
                        OfferRow {
                            key: "{index}",
                            listing: listing.clone(),
                            on_click: on_offer_click,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OfferRow(listing: OfferListing, on_click: EventHandler<String>) -> Element {
    let restaurant_id = listing.restaurant_id.clone();

    rsx! {
        div {
            class: "flex items-center justify-between rounded-xl border border-orange-200 bg-orange-50 p-4 cursor-pointer",
            "data-testid": "offer-listing",
            onclick: move |_| on_click.call(restaurant_id.clone()),
            div { class: "flex items-start gap-3",
                TagIcon { class: "h-5 w-5 text-orange-600 mt-0.5" }
                div {
                    p { class: "font-semibold text-orange-600", "{listing.offer.text}" }
                    p { class: "text-xs text-gray-600 mt-1", "{listing.offer.subtext}" }
                    p { class: "text-sm font-medium mt-2", "{listing.restaurant_name}" }
                }
            }
            ChevronRightIcon { class: "h-5 w-5 text-gray-400" }
        }
    }
}
