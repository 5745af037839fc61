//! tiffin-ui - pure view components for tiffin
//!
//! Every component here is props-based: it renders core records and reports
//! interactions through callbacks. Routing and data lookup live in the app.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
