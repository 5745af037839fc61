use crate::Route;
use dioxus::prelude::*;
use tiffin_ui::AppLayoutView;

#[component]
pub fn AppShell() -> Element {
    rsx! {
        AppLayoutView { Outlet::<Route> {} }
    }
}
