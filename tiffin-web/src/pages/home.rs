use crate::context::use_app_context;
use crate::navigation::{open_offers, open_restaurant, RouterNav};
use dioxus::prelude::*;
use tiffin_ui::HomeView;

#[component]
pub fn Home() -> Element {
    let app = use_app_context();
    let restaurants = app.repository.list_restaurants();

    rsx! {
        HomeView {
            restaurants,
            on_restaurant_click: move |restaurant_id: String| {
                open_restaurant(&mut RouterNav, &restaurant_id);
            },
            on_offers_click: move |_| open_offers(&mut RouterNav),
        }
    }
}
