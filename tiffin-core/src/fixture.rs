//! Fixture-backed repository
//!
//! Serves restaurant data from a JSON document instead of a data service.
//! The default document is compiled into the binary; native builds can point
//! `TIFFIN_FIXTURE_PATH` at a replacement file.

use crate::model::{MenuItem, OfferListing, Restaurant, RestaurantSummary};
use crate::repository::{parse_item_id, LookupError, RestaurantRepository};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{debug, info};

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/restaurants.json");

static EMBEDDED: OnceLock<Arc<Vec<Restaurant>>> = OnceLock::new();

/// Errors from loading a fixture document
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Restaurant '{0}' appears more than once")]
    DuplicateRestaurant(String),
    #[error("Restaurant '{restaurant_id}' has more than one menu item with id {item_id}")]
    DuplicateMenuItem { restaurant_id: String, item_id: u32 },
}

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    restaurants: Vec<Restaurant>,
}

/// Repository over an in-memory list of restaurants
#[derive(Clone, Debug)]
pub struct FixtureRepository {
    restaurants: Arc<Vec<Restaurant>>,
}

impl FixtureRepository {
    /// Repository over the fixture compiled into the binary. Parsed once.
    pub fn embedded() -> Self {
        let restaurants = EMBEDDED.get_or_init(|| {
            let restaurants =
                parse_document(FIXTURE_JSON).expect("Embedded fixture JSON is invalid");
            debug!("Parsed embedded fixture: {} restaurants", restaurants.len());
            Arc::new(restaurants)
        });
        Self {
            restaurants: Arc::clone(restaurants),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            restaurants: Arc::new(parse_document(json)?),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let json = std::fs::read_to_string(path)?;
        let repository = Self::from_json(&json)?;
        info!(
            "Loaded fixture from {}: {} restaurants",
            path.display(),
            repository.restaurants.len()
        );
        Ok(repository)
    }

    fn find(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }
}

fn parse_document(json: &str) -> Result<Vec<Restaurant>, FixtureError> {
    let document: FixtureDocument = serde_json::from_str(json)?;

    let mut restaurant_ids = HashSet::new();
    for restaurant in &document.restaurants {
        if !restaurant_ids.insert(restaurant.id.as_str()) {
            return Err(FixtureError::DuplicateRestaurant(restaurant.id.clone()));
        }
        let mut item_ids = HashSet::new();
        for item in &restaurant.menu_items {
            if !item_ids.insert(item.id) {
                return Err(FixtureError::DuplicateMenuItem {
                    restaurant_id: restaurant.id.clone(),
                    item_id: item.id,
                });
            }
        }
    }

    Ok(document.restaurants)
}

impl RestaurantRepository for FixtureRepository {
    fn get_restaurant(&self, id: &str) -> Result<Restaurant, LookupError> {
        self.find(id)
            .cloned()
            .ok_or_else(|| LookupError::RestaurantNotFound(id.to_string()))
    }

    fn get_menu_item(&self, restaurant_id: &str, item_id: &str) -> Result<MenuItem, LookupError> {
        let item_id = parse_item_id(item_id)?;
        let restaurant = self
            .find(restaurant_id)
            .ok_or_else(|| LookupError::RestaurantNotFound(restaurant_id.to_string()))?;
        restaurant
            .menu_item(item_id)
            .cloned()
            .ok_or_else(|| LookupError::MenuItemNotFound {
                restaurant_id: restaurant_id.to_string(),
                item_id,
            })
    }

    fn list_restaurants(&self) -> Vec<RestaurantSummary> {
        self.restaurants.iter().map(Restaurant::summary).collect()
    }

    fn list_offers(&self) -> Vec<OfferListing> {
        self.restaurants
            .iter()
            .flat_map(|restaurant| {
                restaurant.offers.iter().map(|offer| OfferListing {
                    restaurant_id: restaurant.id.clone(),
                    restaurant_name: restaurant.name.clone(),
                    offer: offer.clone(),
                })
            })
            .collect()
    }
}
