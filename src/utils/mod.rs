//! Utilities module for Bistro Menu
//!
//! Shared helper functions:
//! - Path utilities
//! - Text utilities

use std::path::{Path, PathBuf};

/// Path utilities
pub mod path {
    use super::*;

    /// Resolve `path` against `base` unless it is already absolute
    pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(expand_tilde(path))
        }
    }

    /// Directory containing `path`, "." for a bare file name
    pub fn parent_dir(path: &Path) -> PathBuf {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Expand tilde to home directory
    pub fn expand_tilde(path: &Path) -> PathBuf {
        if let Ok(stripped) = path.strip_prefix("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        path.to_path_buf()
    }
}

/// Text utilities
pub mod text {
    /// Truncate to at most `max_chars` characters, adding an ellipsis
    pub fn truncate(s: &str, max_chars: usize) -> String {
        if s.chars().count() <= max_chars {
            s.to_string()
        } else if max_chars <= 1 {
            "…".to_string()
        } else {
            let kept: String = s.chars().take(max_chars - 1).collect();
            format!("{}…", kept.trim_end())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/srv/bistro");
        assert_eq!(
            path::resolve_against(Path::new("img/socca.jpg"), base),
            PathBuf::from("/srv/bistro/img/socca.jpg")
        );
        assert_eq!(
            path::resolve_against(Path::new("/var/img/socca.jpg"), base),
            PathBuf::from("/var/img/socca.jpg")
        );
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(path::parent_dir(Path::new("menu.json")), PathBuf::from("."));
        assert_eq!(
            path::parent_dir(Path::new("/srv/bistro/menu.json")),
            PathBuf::from("/srv/bistro")
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(text::truncate("Socca", 10), "Socca");
        assert_eq!(text::truncate("Daube niçoise", 6), "Daube…");
        assert_eq!(text::truncate("香草蔬菜湯", 3), "香草…");
    }
}
