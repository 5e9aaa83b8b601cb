//! Dish image sources
//!
//! Cards show a local image when the dish points at one, and a placeholder
//! otherwise. Remote URLs are never fetched; they get the placeholder too.

use super::model::MenuItem;
use std::path::{Path, PathBuf};

/// Where a card's picture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// No image configured
    Placeholder,
    /// Image file on disk, resolved against the menu file's directory
    Local(PathBuf),
    /// `http(s)` URL; not loaded
    Remote(String),
}

impl MenuItem {
    /// Resolve the dish image relative to `menu_dir`
    pub fn image_source(&self, menu_dir: &Path) -> ImageSource {
        let Some(url) = self.image_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
            return ImageSource::Placeholder;
        };

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//") {
            return ImageSource::Remote(url.to_string());
        }

        let local = url.strip_prefix("file://").unwrap_or(url);
        ImageSource::Local(crate::utils::path::resolve_against(Path::new(local), menu_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> MenuItem {
        let mut item = MenuItem::named("Salade niçoise");
        item.image_url = Some(url.to_string());
        item
    }

    #[test]
    fn test_missing_url_is_placeholder() {
        let item = MenuItem::named("Salade niçoise");
        assert_eq!(item.image_source(Path::new("/srv")), ImageSource::Placeholder);
        assert_eq!(with_url("  ").image_source(Path::new("/srv")), ImageSource::Placeholder);
    }

    #[test]
    fn test_relative_path_resolves_against_menu_dir() {
        let src = with_url("img/salade.jpg").image_source(Path::new("/srv/menu"));
        assert_eq!(src, ImageSource::Local(PathBuf::from("/srv/menu/img/salade.jpg")));
    }

    #[test]
    fn test_file_url_and_absolute_path() {
        let src = with_url("file:///var/photos/salade.jpg").image_source(Path::new("/srv"));
        assert_eq!(src, ImageSource::Local(PathBuf::from("/var/photos/salade.jpg")));
    }

    #[test]
    fn test_remote_url_is_not_loaded() {
        let src = with_url("https://example.com/salade.jpg").image_source(Path::new("/srv"));
        assert!(matches!(src, ImageSource::Remote(_)));
    }
}
