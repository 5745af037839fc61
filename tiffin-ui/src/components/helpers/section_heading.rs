use dioxus::prelude::*;

#[component]
pub fn SectionHeading(title: String) -> Element {
    rsx! {
        h3 { class: "font-semibold text-lg mb-3", "{title}" }
    }
}
