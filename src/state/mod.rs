//! State management module for Bistro Menu
//!
//! This module contains all application state types organized by concern:
//! - `app_state`: Root application state container
//! - `toast`: Transient confirmation message

mod app_state;
mod toast;

pub use app_state::*;
pub use toast::*;
