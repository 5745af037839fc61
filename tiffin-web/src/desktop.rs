//! Native window launch

use crate::App;
use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

/// Phone-sized window around the app frame
fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("tiffin")
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(480, 900))
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

pub fn launch_app() {
    LaunchBuilder::desktop().with_cfg(make_config()).launch(App);
}
