//! Error types for Bistro Menu
//!
//! This module defines all custom error types used throughout the application.
//! None of them are fatal: callers log them and fall back to the previous state.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Menu document loading errors
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Clipboard errors
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Menu file watcher errors
    #[error(transparent)]
    Watcher(#[from] WatcherError),
}

/// Errors raised while reading or parsing the menu document
#[derive(Error, Debug)]
pub enum MenuError {
    /// The menu file could not be read
    #[error("Could not read menu file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file is not valid JSON
    #[error("Invalid menu document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an object keyed by category
    #[error("Menu document must be an object keyed by category")]
    NotAnObject,
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not read configuration: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Clipboard related errors
#[derive(Error, Debug, Clone)]
pub enum ClipboardError {
    /// Could not access clipboard
    #[error("Failed to access clipboard: {0}")]
    AccessError(String),

    /// Error setting clipboard content
    #[error("Failed to write to clipboard: {0}")]
    WriteError(String),

    /// Every configured backend failed
    #[error("No clipboard backend accepted the text")]
    NoBackend,
}

/// Menu file watcher errors
#[derive(Error, Debug)]
pub enum WatcherError {
    /// Could not initialize file watcher
    #[error("Could not start file watcher: {0}")]
    InitError(#[source] notify::Error),

    /// Could not watch path
    #[error("Could not watch path: {path}")]
    WatchError {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for menu loading
pub type MenuResult<T> = Result<T, MenuError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for clipboard operations
pub type ClipboardResult<T> = Result<T, ClipboardError>;

impl AppError {
    /// Log a non-fatal error; the caller carries on with its previous state
    pub fn log(&self, context: &str) {
        log::warn!("{}: {}", context, self);
    }
}

impl MenuError {
    /// Short message suitable for the log line emitted on a failed load
    pub fn user_message(&self) -> String {
        match self {
            MenuError::Read { path, source } => {
                format!("menu file {} could not be read ({})", path.display(), source)
            }
            MenuError::Parse(e) => format!("menu file is not valid JSON ({})", e),
            MenuError::NotAnObject => "menu file must map categories to dish lists".to_string(),
        }
    }
}
