//! Root application state container
//!
//! Holds the loaded menu document and the session's view choices (query,
//! language, active category). The filtered index is a memoized projection of
//! (document revision, query, language) refreshed by every setter, so view
//! code only ever reads it.

use super::ToastState;
use crate::catalog::{Category, MenuDocument};
use crate::i18n::Language;
use crate::search::{normalize_query, Memo, MenuIndex, TaggedItem};
use std::path::{Path, PathBuf};

/// Inputs the menu index is computed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexKey {
    pub revision: u64,
    pub query: String,
    pub language: Language,
}

/// Root application state
#[derive(Debug)]
pub struct AppState {
    /// Current menu document; replaced wholesale on reload
    document: MenuDocument,

    /// Bumped on every document replacement
    revision: u64,

    /// Whether any load has succeeded yet
    loaded: bool,

    /// Menu file the document was read from
    menu_path: PathBuf,

    /// Raw search box contents
    query: String,

    /// Display language
    language: Language,

    /// Category shown in the card grid
    active_category: Category,

    /// Whether the category sidebar is shown
    pub sidebar_visible: bool,

    /// Confirmation toast
    pub toasts: ToastState,

    index: Memo<IndexKey, MenuIndex>,
}

impl AppState {
    /// Create an empty state; the document arrives with the first load
    pub fn new(menu_path: PathBuf, language: Language) -> Self {
        let document = MenuDocument::new();
        let key = IndexKey {
            revision: 0,
            query: String::new(),
            language,
        };
        let index = Memo::new(key, |k| MenuIndex::build(&document, &k.query, k.language));

        Self {
            active_category: document.initial_category(),
            document,
            revision: 0,
            loaded: false,
            menu_path,
            query: String::new(),
            language,
            sidebar_visible: true,
            toasts: ToastState::new(),
            index,
        }
    }

    /// Replace the menu document after a successful load
    pub fn set_document(&mut self, document: MenuDocument) {
        let first_load = !self.loaded;
        self.document = document;
        self.revision += 1;
        self.loaded = true;

        if first_load {
            self.active_category = self.document.initial_category();
        } else {
            self.reconcile_active_category();
        }
        self.refresh_index();

        log::debug!(
            "Menu revision {}: {} dishes, showing {}",
            self.revision,
            self.document.total_items(),
            self.active_category
        );
    }

    /// If the active category has no dishes, move to the first one that does.
    /// With no dishes anywhere the selection is left alone.
    pub fn reconcile_active_category(&mut self) {
        let available = self.document.available_categories();
        if !available.contains(&self.active_category) {
            if let Some(&first) = available.first() {
                self.active_category = first;
            }
        }
    }

    /// Update the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_index();
    }

    /// Empty the search box
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Switch display language
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.refresh_index();
    }

    /// Switch to the next language in toggle order
    pub fn cycle_language(&mut self) -> Language {
        self.set_language(self.language.next());
        self.language
    }

    /// Show `category` in the grid. Categories without dishes cannot be selected.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.document.items(category).is_empty() {
            log::debug!("Ignoring selection of empty category {}", category);
            return false;
        }
        self.active_category = category;
        true
    }

    /// Toggle sidebar visibility
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    fn refresh_index(&mut self) {
        let key = IndexKey {
            revision: self.revision,
            query: normalize_query(&self.query),
            language: self.language,
        };
        let document = &self.document;
        if self
            .index
            .update(key, |k| MenuIndex::build(document, &k.query, k.language))
        {
            log::trace!(
                "Rebuilt menu index #{} ({} matches)",
                self.index.recomputations(),
                self.index.value().total_matches()
            );
        }
    }

    pub fn document(&self) -> &MenuDocument {
        &self.document
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn menu_path(&self) -> &Path {
        &self.menu_path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    /// Categories that have dishes, in display order
    pub fn available_categories(&self) -> Vec<Category> {
        self.document.available_categories()
    }

    /// The filtered, category-partitioned view of the menu
    pub fn index(&self) -> &MenuIndex {
        self.index.value()
    }

    /// Matching dishes of the active category
    pub fn visible_items(&self) -> &[TaggedItem] {
        self.index().visible(self.active_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuItem;

    fn state() -> AppState {
        AppState::new(PathBuf::from("menu.json"), Language::English)
    }

    fn dish(name: &str) -> MenuItem {
        MenuItem::named(name)
    }

    fn sample() -> MenuDocument {
        MenuDocument::new()
            .with_section(Category::Plats, vec![dish("Daube niçoise")])
            .with_section(Category::Dessert, vec![dish("Tarte Tatin"), dish("Navette")])
    }

    #[test]
    fn test_first_load_selects_first_category_with_dishes() {
        let mut state = state();
        assert_eq!(state.active_category(), Category::Entree);

        state.set_document(sample());
        assert!(state.is_loaded());
        assert_eq!(state.active_category(), Category::Plats);
    }

    #[test]
    fn test_empty_menu_keeps_first_category() {
        let mut state = state();
        state.set_document(MenuDocument::new());
        assert_eq!(state.active_category(), Category::Entree);
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn test_reload_keeps_selection_while_still_available() {
        let mut state = state();
        state.set_document(sample());
        assert!(state.select_category(Category::Dessert));

        state.set_document(sample());
        assert_eq!(state.active_category(), Category::Dessert);

        state.set_document(MenuDocument::new().with_section(Category::Plats, vec![dish("Daube")]));
        assert_eq!(state.active_category(), Category::Plats);
    }

    #[test]
    fn test_reconcile_moves_off_empty_category() {
        let mut state = state();
        state.set_document(MenuDocument::new());
        assert_eq!(state.active_category(), Category::Entree);

        state.set_document(MenuDocument::new().with_section(Category::Accompagnement, vec![dish("Panisse")]));
        assert_eq!(state.active_category(), Category::Accompagnement);
    }

    #[test]
    fn test_empty_category_cannot_be_selected() {
        let mut state = state();
        state.set_document(sample());
        assert!(!state.select_category(Category::Entree));
        assert_eq!(state.active_category(), Category::Plats);
        assert!(state.select_category(Category::Dessert));
        assert_eq!(state.active_category(), Category::Dessert);
    }

    #[test]
    fn test_query_filters_visible_items() {
        let mut state = state();
        state.set_document(sample());
        state.select_category(Category::Dessert);

        state.set_query("navette");
        assert_eq!(state.visible_items().len(), 1);
        assert_eq!(state.index().match_count(Category::Plats), 0);

        state.clear_query();
        assert_eq!(state.visible_items().len(), 2);
    }

    #[test]
    fn test_index_is_memoized() {
        let mut state = state();
        state.set_document(sample());
        let rebuilds = state.index.recomputations();

        state.set_query("tatin");
        state.set_query("  TATIN ");
        state.set_language(Language::English);
        assert_eq!(state.index.recomputations(), rebuilds + 1);

        state.cycle_language();
        assert_eq!(state.language(), Language::French);
        assert_eq!(state.index.recomputations(), rebuilds + 2);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = state();
        assert!(state.sidebar_visible);
        state.toggle_sidebar();
        assert!(!state.sidebar_visible);
    }
}
