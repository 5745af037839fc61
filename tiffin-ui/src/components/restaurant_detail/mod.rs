//! Restaurant detail components

mod cart_bar;
mod category_chips;
mod delivery_summary;
mod header;
mod menu_item_card;
mod offers_strip;
mod view;

pub use cart_bar::CartBar;
pub use category_chips::CategoryChips;
pub use delivery_summary::DeliverySummary;
pub use header::RestaurantHeader;
pub use menu_item_card::MenuItemCard;
pub use offers_strip::OffersStrip;
pub use view::RestaurantDetailView;
