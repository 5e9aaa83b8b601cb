//! Menu data model
//!
//! A menu is split into four fixed sections. Raw dish records are read
//! leniently: optional fields may be missing, `null` or of the wrong type,
//! and a malformed price simply means "no price".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Name shown for a dish whose record carries no usable `name`
pub const UNNAMED_DISH: &str = "Plat du jour";

/// One of the four recognized menu sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Entrée")]
    Entree,
    Plats,
    Accompagnement,
    Dessert,
}

impl Category {
    /// Every recognized category in fixed display order
    pub const ALL: [Category; 4] = [
        Category::Entree,
        Category::Plats,
        Category::Accompagnement,
        Category::Dessert,
    ];

    /// Label used both as the JSON key and as the sidebar text
    pub fn label(self) -> &'static str {
        match self {
            Category::Entree => "Entrée",
            Category::Plats => "Plats",
            Category::Accompagnement => "Accompagnement",
            Category::Dessert => "Dessert",
        }
    }

    /// Look up a category by its exact JSON key
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Position in the fixed display order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single dish as it appears in the menu document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Base (English) name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name_fr: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name_zh: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description_fr: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description_zh: Option<String>,

    /// Price in Hong Kong dollars
    #[serde(default, deserialize_with = "lenient_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Prompt for an image generator; derived from the name when absent
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

impl MenuItem {
    /// Create a dish with only a base name
    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Base name, never empty
    pub fn base_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNNAMED_DISH
        } else {
            &self.name
        }
    }
}

/// Non-string names (null, numbers, objects) become empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Optional text field; a value of any other JSON type counts as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Accept numbers and numeric strings; anything else (including NaN) is no price
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()))
}

/// The normalized menu: exactly one (possibly empty) list per category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDocument {
    sections: [Vec<MenuItem>; 4],
}

impl MenuDocument {
    /// Create an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dishes of one category
    pub fn with_section(mut self, category: Category, items: Vec<MenuItem>) -> Self {
        self.sections[category.index()] = items;
        self
    }

    /// Dishes of a category in document order
    pub fn items(&self, category: Category) -> &[MenuItem] {
        &self.sections[category.index()]
    }

    /// All categories with their dishes, in display order
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[MenuItem])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.items(c)))
    }

    /// Categories that have at least one dish, in display order
    pub fn available_categories(&self) -> Vec<Category> {
        self.sections()
            .filter(|(_, items)| !items.is_empty())
            .map(|(c, _)| c)
            .collect()
    }

    /// Category to show right after a load: the first non-empty one,
    /// or the first recognized category when the menu is empty
    pub fn initial_category(&self) -> Category {
        self.available_categories()
            .first()
            .copied()
            .unwrap_or(Category::ALL[0])
    }

    /// Total number of dishes across all categories
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Whether the menu has no dishes at all
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Entrée", "Plats", "Accompagnement", "Dessert"]);
        assert!(Category::Entree < Category::Dessert);
        assert_eq!(Category::from_label("Plats"), Some(Category::Plats));
        assert_eq!(Category::from_label("Entree"), None);
    }

    #[test]
    fn test_item_lenient_fields() {
        let item: MenuItem = serde_json::from_str(
            r#"{"name": null, "price": "48", "name_fr": null, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.base_name(), UNNAMED_DISH);
        assert_eq!(item.price, Some(48.0));
        assert!(item.name_fr.is_none());
    }

    #[test]
    fn test_item_bad_price_is_none() {
        let item: MenuItem =
            serde_json::from_str(r#"{"name": "Socca", "price": "market"}"#).unwrap();
        assert_eq!(item.price, None);
        let item: MenuItem =
            serde_json::from_str(r#"{"name": "Socca", "price": null}"#).unwrap();
        assert_eq!(item.price, None);
        let item: MenuItem = serde_json::from_str(r#"{"name": "Socca", "price": 0}"#).unwrap();
        assert_eq!(item.price, Some(0.0));
    }

    #[test]
    fn test_initial_category_prefers_first_non_empty() {
        let doc = MenuDocument::new().with_section(Category::Plats, vec![MenuItem::named("Daube")]);
        assert_eq!(doc.available_categories(), vec![Category::Plats]);
        assert_eq!(doc.initial_category(), Category::Plats);
        assert_eq!(MenuDocument::new().initial_category(), Category::Entree);
    }

    #[test]
    fn test_sections_always_cover_four_categories() {
        let doc = MenuDocument::new();
        assert_eq!(doc.sections().count(), 4);
        assert!(doc.is_empty());
    }
}
