//! Common helper UI components

mod back_button;
mod section_heading;

pub use back_button::BackButton;
pub use section_heading::SectionHeading;
