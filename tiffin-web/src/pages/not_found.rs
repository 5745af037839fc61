use crate::navigation::{go_home, RouterNav};
use dioxus::prelude::*;
use tiffin_ui::NotFoundView;

/// Catch-all for paths no route matches
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!("No route matches {path}");

    rsx! {
        NotFoundView {
            message: Some(format!("Nothing lives at {path}")),
            on_home: move |_| go_home(&mut RouterNav),
        }
    }
}
