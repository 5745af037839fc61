//! Not-found view component
//!
//! Shown for unmatched paths and for route params that resolve to no record.

use crate::components::icons::ImageIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(
    #[props(default = "Page not found".to_string())] title: String,
    /// Detail line, e.g. the lookup error
    #[props(default)]
    message: Option<String>,
    on_home: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "px-4 py-16 text-center", "data-testid": "not-found",
            div { class: "text-gray-300 mb-4",
                ImageIcon { class: "w-16 h-16 mx-auto" }
            }
            h1 { class: "text-2xl font-bold text-gray-800 mb-4", "{title}" }
            if let Some(message) = message {
                p {
                    class: "text-sm text-gray-500 mb-6",
                    "data-testid": "not-found-detail",
                    "{message}"
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                test_id: Some("home-button".to_string()),
                onclick: move |_| on_home.call(()),
                "Back to restaurants"
            }
        }
    }
}
