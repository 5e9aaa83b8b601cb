//! Menu catalog for Bistro Menu
//!
//! Everything about the menu document itself:
//! - Data model (categories, dishes, normalized document)
//! - Loading and normalization of the JSON menu file
//! - Per-language text resolution
//! - Price badges and image sources

mod image;
mod loader;
mod localize;
mod model;
mod price;

pub use image::ImageSource;
pub use loader::{load_menu, DEFAULT_MENU_FILE};
pub use model::{Category, MenuDocument, MenuItem};
