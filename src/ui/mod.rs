//! UI module for Bistro Menu
//!
//! Contains all user interface components including:
//! - Main window layout
//! - Header with language toggle and search
//! - Category sidebar
//! - Dish cards

mod dish_card;
mod header;
mod main_window;
mod sidebar;
mod theme;

use crate::config::Config;
use crate::message::Message;
use crate::state::AppState;
use cosmic::Element;

/// Build the main application view
pub fn view<'a>(state: &'a AppState, config: &Config, footer_year: i32) -> Element<'a, Message> {
    main_window::view(state, config, footer_year)
}
