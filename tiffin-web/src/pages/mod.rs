mod food_item_details;
mod home;
mod layout;
mod not_found;
mod offers;
mod restaurant_details;

pub use food_item_details::FoodItemDetails;
pub use home::Home;
pub use layout::AppShell;
pub use not_found::NotFound;
pub use offers::Offers;
pub use restaurant_details::RestaurantDetails;
