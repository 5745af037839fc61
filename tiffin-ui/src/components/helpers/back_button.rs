//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Icon-only back button. Issues `on_click` once per press.
#[component]
pub fn BackButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center text-gray-700 hover:text-gray-900 transition-colors",
            r#type: "button",
            aria_label: "Go back",
            "data-testid": "back-button",
            onclick: move |_| on_click.call(()),
            ArrowLeftIcon { class: "h-5 w-5" }
        }
    }
}
