//! Search module for Bistro Menu
//!
//! Handles the dish search pipeline:
//! - Flattening the menu into category-tagged dishes
//! - Case-insensitive substring filtering in the active language
//! - Grouping matches back by category
//! - Memoizing the result on its inputs

mod index;
mod memo;

pub use index::{normalize_query, MenuIndex, TaggedItem};
pub use memo::Memo;
