//! tiffin - food delivery browsing app
//!
//! `cargo run -p tiffin-web --features desktop` opens a native window.
//! `dx serve --platform web --features web` for the browser build.

use tiffin_web::context::app_config;
use tiffin_web::logging::configure_logging;
use tracing::info;

fn main() {
    let config = app_config();
    configure_logging(config);
    if let Some(path) = &config.env_file {
        info!("Loaded {}", path.display());
    }
    info!(
        "Starting tiffin (missing id fallback: {:?})",
        config.missing_id_fallback
    );

    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    tiffin_web::desktop::launch_app();
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn launch() {
    dioxus::launch(tiffin_web::App);
}

#[cfg(not(any(feature = "desktop", feature = "web")))]
fn launch() {
    tracing::error!(
        "No renderer compiled in. Rebuild with `--features desktop` for a native window \
         or `--features web` for the browser"
    );
    std::process::exit(2);
}
