use crate::components::icons::StarIcon;
use dioxus::prelude::*;

/// Filled star followed by the rating text
#[component]
pub fn RatingBadge(rating: String, #[props(default)] small: bool) -> Element {
    let icon_class = if small {
        "h-3 w-3 fill-yellow-400 text-yellow-400"
    } else {
        "h-4 w-4 fill-yellow-400 text-yellow-400"
    };

    rsx! {
        div { class: "flex items-center gap-1",
            StarIcon { class: icon_class }
            span { class: "text-sm font-medium", "{rating}" }
        }
    }
}
