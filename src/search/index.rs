//! Filter and index engine
//!
//! Turns the normalized menu into what the window shows:
//! flatten (tag each dish with its category), filter by the search query in
//! the active language, then group the survivors back by category.

use crate::catalog::{Category, MenuDocument, MenuItem};
use crate::i18n::Language;
use std::collections::BTreeMap;

/// A dish together with the category it was listed under
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedItem {
    pub category: Category,
    pub item: MenuItem,
}

impl TaggedItem {
    /// Lower-cased text searched for `lang`: name, description, category
    pub fn haystack(&self, lang: Language) -> String {
        format!(
            "{} {} {}",
            self.item.display_name(lang),
            self.item.display_description(lang),
            self.category.label()
        )
        .to_lowercase()
    }
}

/// Matching dishes per category, iterated in display order.
/// Categories without matches have no entry.
pub type CategoryMap = BTreeMap<Category, Vec<TaggedItem>>;

/// Every dish in display order, tagged with its category
pub fn flatten(doc: &MenuDocument) -> Vec<TaggedItem> {
    doc.sections()
        .flat_map(|(category, items)| {
            items.iter().map(move |item| TaggedItem {
                category,
                item: item.clone(),
            })
        })
        .collect()
}

/// Trim and lower-case a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Keep the dishes whose haystack contains the query.
/// A blank query keeps everything.
pub fn filter_items(items: &[TaggedItem], query: &str, lang: Language) -> Vec<TaggedItem> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|tagged| tagged.haystack(lang).contains(&needle))
        .cloned()
        .collect()
}

/// Partition filtered dishes by category, keeping their relative order
pub fn group_by_category(items: Vec<TaggedItem>) -> CategoryMap {
    let mut map = CategoryMap::new();
    for tagged in items {
        map.entry(tagged.category).or_default().push(tagged);
    }
    map
}

/// The category-partitioned view for one (document, query, language) triple
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuIndex {
    visible: CategoryMap,
    total_matches: usize,
    query: String,
}

impl MenuIndex {
    /// Run flatten, filter and group over the document
    pub fn build(doc: &MenuDocument, query: &str, lang: Language) -> Self {
        let filtered = filter_items(&flatten(doc), query, lang);
        let total_matches = filtered.len();

        Self {
            visible: group_by_category(filtered),
            total_matches,
            query: normalize_query(query),
        }
    }

    /// Matching dishes of a category (empty when none match)
    pub fn visible(&self, category: Category) -> &[TaggedItem] {
        self.visible
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of matching dishes in a category
    pub fn match_count(&self, category: Category) -> usize {
        self.visible(category).len()
    }

    /// Number of matching dishes across the whole menu
    pub fn total_matches(&self) -> usize {
        self.total_matches
    }

    /// Whether a non-blank query is narrowing the view
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str) -> MenuItem {
        MenuItem::named(name)
    }

    fn sample() -> MenuDocument {
        let mut soupe = dish("Soupe au pistou");
        soupe.description = Some("Vegetable SOUP with basil".to_string());
        soupe.name_zh = Some("香草蔬菜湯".to_string());

        MenuDocument::new()
            .with_section(Category::Entree, vec![dish("Socca"), soupe])
            .with_section(Category::Plats, vec![dish("Daube niçoise")])
            .with_section(Category::Dessert, vec![dish("Tarte Tatin"), dish("Navette")])
    }

    #[test]
    fn test_flatten_tags_and_orders() {
        let flat = flatten(&sample());
        let tags: Vec<_> = flat
            .iter()
            .map(|t| (t.category, t.item.name.as_str()))
            .collect();
        assert_eq!(
            tags,
            [
                (Category::Entree, "Socca"),
                (Category::Entree, "Soupe au pistou"),
                (Category::Plats, "Daube niçoise"),
                (Category::Dessert, "Tarte Tatin"),
                (Category::Dessert, "Navette"),
            ]
        );
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let flat = flatten(&sample());
        let hits = filter_items(&flat, "  SOUP  ", Language::English);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item.name, "Soupe au pistou");
    }

    #[test]
    fn test_category_label_is_searchable() {
        let flat = flatten(&sample());
        let hits = filter_items(&flat, "dessert", Language::French);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_uses_active_language() {
        let flat = flatten(&sample());
        assert_eq!(filter_items(&flat, "蔬菜", Language::Cantonese).len(), 1);
        assert!(filter_items(&flat, "蔬菜", Language::English).is_empty());
    }

    #[test]
    fn test_blank_query_matches_unfiltered_grouping() {
        let doc = sample();
        let unfiltered = group_by_category(flatten(&doc));
        let index = MenuIndex::build(&doc, "   ", Language::English);

        assert!(!index.is_filtered());
        assert_eq!(index.total_matches(), 5);
        for category in Category::ALL {
            let expected = unfiltered.get(&category).map(Vec::as_slice).unwrap_or(&[]);
            assert_eq!(index.visible(category), expected);
        }
    }

    #[test]
    fn test_categories_without_matches_are_absent() {
        let index = MenuIndex::build(&sample(), "tatin", Language::English);
        assert_eq!(index.match_count(Category::Dessert), 1);
        assert_eq!(index.match_count(Category::Entree), 0);
        assert!(index.is_filtered());
        assert!(index.visible(Category::Accompagnement).is_empty());
    }
}
