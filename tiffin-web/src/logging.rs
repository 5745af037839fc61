use tiffin_core::Config;

/// Install the global tracing subscriber. `RUST_LOG` overrides the configured
/// level when set.
#[cfg(not(target_arch = "wasm32"))]
pub fn configure_logging(config: &Config) {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Browser console logging through the Dioxus logger
#[cfg(target_arch = "wasm32")]
pub fn configure_logging(config: &Config) {
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        tracing::warn!("Logger already initialized: {e}");
    }
}
