//! App-wide context: configuration, data source and action capabilities

use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::OnceLock;
use tiffin_core::{Capabilities, Config, FixtureRepository, RestaurantRepository};
use tracing::{error, info};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process configuration, loaded on first use
pub fn app_config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Shared by every screen via Dioxus context
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub repository: Rc<dyn RestaurantRepository>,
    pub capabilities: Capabilities,
}

impl AppContext {
    pub fn from_config(config: Config) -> Self {
        let repository = load_repository(&config);
        Self {
            config,
            repository: Rc::new(repository),
            capabilities: Capabilities::noop(),
        }
    }
}

fn load_repository(config: &Config) -> FixtureRepository {
    if let Some(path) = &config.fixture_path {
        match FixtureRepository::from_path(path) {
            Ok(repository) => return repository,
            Err(e) => error!(
                "Failed to load fixture from {}: {e}; using embedded fixture",
                path.display()
            ),
        }
    }
    info!("Using embedded fixture");
    FixtureRepository::embedded()
}

/// Read the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_context_uses_embedded_fixture() {
        let context = AppContext::from_config(Config::default());
        let restaurant = context.repository.get_restaurant("1").unwrap();
        assert_eq!(restaurant.name, "Pasta Al Manal");
        assert_eq!(context.capabilities.cart.total_label(), "₹0");
    }

    #[test]
    fn test_bad_fixture_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            fixture_path: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        let context = AppContext::from_config(config);
        assert!(context.repository.get_restaurant("1").is_ok());
    }

    #[test]
    fn test_fixture_path_replaces_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "restaurants": [{
                "id": "z", "name": "Zaika", "cuisine": "Awadhi", "rating": "4.9",
                "deliveryTime": "40-50 mins", "deliveryFee": "Free", "image": "/z.png",
                "address": "Lucknow", "distance": "0.5 km"
            }] }"#,
        )
        .unwrap();

        let config = Config {
            fixture_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let context = AppContext::from_config(config);
        assert_eq!(context.repository.list_restaurants().len(), 1);
        assert!(context.repository.get_restaurant("1").is_err());
        assert_eq!(context.repository.get_restaurant("z").unwrap().name, "Zaika");
    }
}
