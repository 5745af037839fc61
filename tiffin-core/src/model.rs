//! Restaurant and menu records
//!
//! Plain immutable values, deserialized from the fixture document. Authoring
//! conventions (original price above price, item category listed in the
//! restaurant's categories) are not checked anywhere.

use serde::Deserialize;

/// Restaurant record as shown on the detail screen
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    /// Decimal string, e.g. "4.8"
    pub rating: String,
    /// Range label, e.g. "30-45 mins"
    pub delivery_time: String,
    pub delivery_fee: String,
    pub image: String,
    pub address: String,
    pub distance: String,
    #[serde(default)]
    pub offers: Vec<Offer>,
    /// Ordered chip labels. The first entry is the default selection.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl Restaurant {
    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            cuisine: self.cuisine.clone(),
            rating: self.rating.clone(),
            delivery_time: self.delivery_time.clone(),
            distance: self.distance.clone(),
            image: self.image.clone(),
            headline_offer: self.offers.first().cloned(),
        }
    }

    pub fn menu_item(&self, item_id: u32) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == item_id)
    }
}

/// Promotional banner text. Nothing computes a discount from it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Offer {
    pub text: String,
    pub subtext: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique within its restaurant
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Currency-formatted, e.g. "₹299"
    pub price: String,
    /// Currency-formatted, rendered struck through
    pub original_price: String,
    pub image: String,
    pub is_veg: bool,
    pub rating: String,
    pub category: String,
}

/// Card-sized view of a restaurant for the home listing
#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: String,
    pub delivery_time: String,
    pub distance: String,
    pub image: String,
    pub headline_offer: Option<Offer>,
}

/// An offer together with the restaurant that runs it
#[derive(Clone, Debug, PartialEq)]
pub struct OfferListing {
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub offer: Offer,
}
