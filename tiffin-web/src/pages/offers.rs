use crate::context::use_app_context;
use crate::navigation::{go_back, open_restaurant, RouterNav};
use dioxus::prelude::*;
use tiffin_ui::OffersView;

#[component]
pub fn Offers() -> Element {
    let app = use_app_context();
    let offers = app.repository.list_offers();

    rsx! {
        OffersView {
            offers,
            on_back: move |_| go_back(&mut RouterNav),
            on_offer_click: move |restaurant_id: String| {
                open_restaurant(&mut RouterNav, &restaurant_id);
            },
        }
    }
}
