//! App layout view component
//!
//! Centers every screen in a phone-sized frame.

use dioxus::prelude::*;

/// Phone frame layout (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Screen content (typically the router outlet)
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 flex justify-center items-start",
            div { class: "w-[430px] max-w-[430px] min-h-screen bg-white shadow-2xl rounded-3xl overflow-hidden relative",
                {children}
            }
        }
    }
}
