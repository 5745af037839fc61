use crate::display_types::DietMarker;
use dioxus::prelude::*;

/// Square veg/non-veg marker with a center dot
#[component]
pub fn VegIndicator(is_veg: bool) -> Element {
    let marker = DietMarker::from_is_veg(is_veg);
    let box_class = marker.box_class();
    let dot_class = marker.dot_class();
    let label = marker.label();

    rsx! {
        div {
            class: "w-3 h-3 rounded-sm border-2 flex-none mt-1 {box_class}",
            title: "{label}",
            "data-testid": "veg-indicator",
            div { class: "w-1.5 h-1.5 rounded-full mx-auto mt-0.5 {dot_class}" }
        }
    }
}
