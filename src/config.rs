//! Configuration management for Bistro Menu
//!
//! Handles loading the optional configuration file and merging command-line
//! overrides on top of it. Nothing is ever written back.

use crate::app::Flags;
use crate::catalog::DEFAULT_MENU_FILE;
use crate::error::{ConfigError, ConfigResult};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.nissalabella.BistroMenu";

/// Window title
pub const APP_TITLE: &str = "Nissa La Bella · Bistro Menu";

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Minimum window width in pixels
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Minimum window height in pixels
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// How long the "prompt copied" toast stays up
pub const DEFAULT_TOAST_MS: u64 = 1400;

/// Default sidebar width in pixels
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 220;

/// Default number of dish cards per row
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Upper bound for `grid_columns`
pub const MAX_GRID_COLUMNS: usize = 6;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu document to display; `menu.json` in the working directory if unset
    pub menu_path: Option<PathBuf>,

    /// Language selected at startup
    pub default_language: Language,

    /// Reload the menu when the file changes on disk
    pub watch_menu_file: bool,

    /// Toast display time in milliseconds
    pub toast_duration_ms: u64,

    /// Sidebar width in pixels
    pub sidebar_width: u16,

    /// Dish cards per row
    pub grid_columns: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_path: None,
            default_language: Language::default(),
            watch_menu_file: true,
            toast_duration_ms: DEFAULT_TOAST_MS,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            grid_columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

impl Config {
    /// Load the configuration file, or defaults if there is none
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No configuration at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values the window cannot render sensibly
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_GRID_COLUMNS).contains(&self.grid_columns) {
            return Err(ConfigError::InvalidValue {
                key: "grid_columns".to_string(),
                reason: format!("must be between 1 and {}", MAX_GRID_COLUMNS),
            });
        }
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "toast_duration_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Apply command-line overrides
    pub fn apply_flags(&mut self, flags: &Flags) {
        if let Some(path) = &flags.menu_path {
            self.menu_path = Some(path.clone());
        }
        if let Some(lang) = flags.language {
            self.default_language = lang;
        }
        if flags.no_watch {
            self.watch_menu_file = false;
        }
    }

    /// Menu document path after defaults and tilde expansion
    pub fn resolved_menu_path(&self) -> PathBuf {
        let path = self
            .menu_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MENU_FILE));
        crate::utils::path::expand_tilde(&path)
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }
}
