//! tiffin-core - data model, lookup interface and configuration
//!
//! Everything here is UI-agnostic. The view crate renders these types and the
//! web app wires routes to the repository.

pub mod capabilities;
pub mod config;
pub mod fixture;
pub mod model;
pub mod repository;

pub use capabilities::{Capabilities, CartMutable, Favoritable, NoopActions, Shareable};
pub use config::{Config, ConfigError};
pub use fixture::{FixtureError, FixtureRepository};
pub use model::{MenuItem, Offer, OfferListing, Restaurant, RestaurantSummary};
pub use repository::{
    parse_item_id, resolve_restaurant_id, LookupError, RestaurantRepository,
    LEGACY_DEFAULT_RESTAURANT_ID,
};
