//! Menu document loading and normalization
//!
//! The menu file is a JSON object keyed by category label. Only the four
//! recognized categories survive normalization; missing ones become empty.

use super::model::{Category, MenuDocument, MenuItem};
use crate::error::{MenuError, MenuResult};
use serde_json::{Map, Value};
use std::path::Path;

/// Default menu file, relative to the working directory
pub const DEFAULT_MENU_FILE: &str = "menu.json";

/// Parsed but not yet normalized menu document
pub type RawMenu = Map<String, Value>;

/// Build a normalized document from a raw category map.
///
/// Unrecognized keys are dropped. A recognized key whose value is not an
/// array is treated as empty, and individual entries that are not dish
/// objects are skipped.
pub fn normalize(raw: &RawMenu) -> MenuDocument {
    for key in raw.keys() {
        if Category::from_label(key).is_none() {
            log::debug!("Ignoring unrecognized menu category {:?}", key);
        }
    }

    Category::ALL
        .into_iter()
        .fold(MenuDocument::new(), |doc, category| {
            let items = match raw.get(category.label()) {
                Some(Value::Array(entries)) => parse_items(category, entries),
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    log::warn!(
                        "Menu category {} is not a list (found {}), treating as empty",
                        category,
                        json_kind(other)
                    );
                    Vec::new()
                }
            };
            doc.with_section(category, items)
        })
}

fn parse_items(category: Category, entries: &[Value]) -> Vec<MenuItem> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<MenuItem>(entry.clone()) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping {} entry #{}: {}", category, index, e);
                    None
                }
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse menu JSON text and normalize it
pub fn parse_menu(text: &str) -> MenuResult<MenuDocument> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(raw) => Ok(normalize(&raw)),
        _ => Err(MenuError::NotAnObject),
    }
}

/// Read and parse the menu file. Single attempt, no retry.
pub async fn load_menu(path: &Path) -> MenuResult<MenuDocument> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MenuError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let document = parse_menu(&text)?;
    log::info!(
        "Loaded {} dishes from {}",
        document.total_items(),
        path.display()
    );
    Ok(document)
}
