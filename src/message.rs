//! Application message types
//!
//! Defines all messages that can be sent to the application's update function.
//! Messages are organized by category for clear handling and routing.

use crate::catalog::{Category, MenuDocument};
use crate::i18n::Language;

/// Main application message enum
#[derive(Debug, Clone)]
pub enum Message {
    /// Menu document loading
    Menu(MenuMessage),

    /// Search box
    Search(SearchMessage),

    /// Language, category and layout
    View(ViewMessage),

    /// Clipboard operations
    Clipboard(ClipboardMessage),

    /// System/window events
    System(SystemMessage),

    /// Surface actions (for menu bar support)
    Surface(cosmic::surface::Action),
}

/// Menu document messages
#[derive(Debug, Clone)]
pub enum MenuMessage {
    /// Read the menu file again
    Reload,

    /// The menu file was parsed
    Loaded(MenuDocument),

    /// Reading or parsing failed; the current document stays
    LoadFailed(String),

    /// The watcher saw the menu file change on disk
    FileChanged,
}

/// Search-related messages
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Search input changed
    UpdateQuery(String),

    /// Empty the search box
    Clear,
}

/// View-related messages
#[derive(Debug, Clone)]
pub enum ViewMessage {
    /// Switch display language
    SetLanguage(Language),

    /// Switch to the next language in toggle order
    CycleLanguage,

    /// Show a category in the card grid
    SelectCategory(Category),

    /// Toggle sidebar visibility
    ToggleSidebar,
}

/// Clipboard-related messages
#[derive(Debug, Clone)]
pub enum ClipboardMessage {
    /// Put an image prompt on the clipboard
    CopyPrompt(String),
}

/// System-level messages
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Periodic tick used to drain menu file events
    Tick,

    /// A toast reached the end of its display time
    ToastExpired(u64),

    /// Quit application
    Quit,
}

impl From<MenuMessage> for Message {
    fn from(msg: MenuMessage) -> Self {
        Message::Menu(msg)
    }
}

impl From<SearchMessage> for Message {
    fn from(msg: SearchMessage) -> Self {
        Message::Search(msg)
    }
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Message::View(msg)
    }
}

impl From<ClipboardMessage> for Message {
    fn from(msg: ClipboardMessage) -> Self {
        Message::Clipboard(msg)
    }
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}
