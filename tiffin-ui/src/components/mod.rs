//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod food_item;
pub mod helpers;
pub mod home;
pub mod icons;
pub mod not_found;
pub mod offers;
pub mod rating;
pub mod restaurant_card;
pub mod restaurant_detail;
pub mod veg_indicator;

pub use app_layout::AppLayoutView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use food_item::FoodItemView;
pub use helpers::{BackButton, SectionHeading};
pub use home::HomeView;
pub use icons::{
    ArrowLeftIcon, ChevronRightIcon, ClockIcon, HeartIcon, ImageIcon, MapPinIcon, ShareIcon,
    ShoppingBagIcon, StarIcon, TagIcon,
};
pub use not_found::NotFoundView;
pub use offers::OffersView;
pub use rating::RatingBadge;
pub use restaurant_card::RestaurantCard;
pub use restaurant_detail::{
    CartBar, CategoryChips, DeliverySummary, MenuItemCard, OffersStrip, RestaurantDetailView,
    RestaurantHeader,
};
pub use veg_indicator::VegIndicator;
