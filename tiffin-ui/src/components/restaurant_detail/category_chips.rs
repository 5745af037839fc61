//! Category chip row
//!
//! Selection is owned by the parent view. Selecting a chip only moves the
//! highlight; the menu list is not filtered.

use crate::display_types::chip_states;
use dioxus::prelude::*;

const SELECTED_CHIP: &str = "bg-red-600 hover:bg-red-700 text-white border-red-600";
const UNSELECTED_CHIP: &str = "border-gray-300 hover:bg-gray-50 text-gray-700";

#[component]
pub fn CategoryChips(
    categories: Vec<String>,
    selected: usize,
    on_select: EventHandler<usize>,
) -> Element {
    let chips = chip_states(&categories, selected);

    rsx! {
        div { class: "mt-6",
            div { class: "flex gap-2 overflow-x-auto pb-2", role: "tablist",
                for (index , chip) in chips.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        role: "tab",
                        aria_selected: if chip.selected { "true" } else { "false" },
                        class: format!(
                            "flex-none px-4 py-2 rounded-full border text-sm font-medium {}",
                            if chip.selected { SELECTED_CHIP } else { UNSELECTED_CHIP },
                        ),
                        "data-testid": "category-chip",
                        onclick: move |_| on_select.call(index),
                        "{chip.label}"
                    }
                }
            }
        }
    }
}
