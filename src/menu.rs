//! Menu bar and keyboard shortcut handling
//!
//! Provides the application menu bar and keyboard shortcut definitions.

use cosmic::iced::keyboard::{Key, Modifiers};
use cosmic::iced::{event, keyboard, Event, Subscription};
use cosmic::iced_futures::event::listen_raw;
use cosmic::widget::menu::action::MenuAction;
use cosmic::widget::menu::key_bind::Modifier;
use cosmic::widget::menu::{Item, KeyBind};
use std::collections::HashMap;

use crate::catalog::Category;
use crate::i18n::Language;
use crate::message::{MenuMessage, Message, SearchMessage, SystemMessage, ViewMessage};

/// Menu actions that can be triggered from the menu bar or keyboard shortcuts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    // File actions
    Reload,
    Quit,

    // View actions
    ToggleSidebar,
    CycleLanguage,
    SetLanguage(Language),
    ShowCategory(Category),
    ClearSearch,
}

impl MenuAction for Action {
    type Message = Message;

    fn message(&self) -> Self::Message {
        self.to_message()
    }
}

impl Action {
    /// Convert action to application message
    pub fn to_message(self) -> Message {
        match self {
            Action::Reload => Message::Menu(MenuMessage::Reload),
            Action::Quit => Message::System(SystemMessage::Quit),

            Action::ToggleSidebar => Message::View(ViewMessage::ToggleSidebar),
            Action::CycleLanguage => Message::View(ViewMessage::CycleLanguage),
            Action::SetLanguage(lang) => Message::View(ViewMessage::SetLanguage(lang)),
            Action::ShowCategory(category) => Message::View(ViewMessage::SelectCategory(category)),
            Action::ClearSearch => Message::Search(SearchMessage::Clear),
        }
    }
}

fn ctrl(key: &str) -> KeyBind {
    KeyBind {
        modifiers: vec![Modifier::Ctrl],
        key: Key::Character(key.into()),
    }
}

/// Create default keyboard shortcuts
pub fn key_binds() -> HashMap<KeyBind, Action> {
    let mut binds = HashMap::new();

    // File shortcuts
    binds.insert(ctrl("r"), Action::Reload);
    binds.insert(ctrl("q"), Action::Quit);

    // View shortcuts
    binds.insert(ctrl("b"), Action::ToggleSidebar);
    binds.insert(ctrl("l"), Action::CycleLanguage);
    for (position, category) in Category::ALL.into_iter().enumerate() {
        binds.insert(ctrl(&(position + 1).to_string()), Action::ShowCategory(category));
    }

    binds
}

/// Type alias for menu items with our action type
pub type MenuItems = Vec<(&'static str, Vec<Item<Action, &'static str>>)>;

/// Create menu bar items
pub fn menu_items() -> MenuItems {
    vec![
        (
            "File",
            vec![
                Item::Button("Reload Menu", None, Action::Reload),
                Item::Divider,
                Item::Button("Quit", None, Action::Quit),
            ],
        ),
        (
            "View",
            vec![
                Item::Button("Toggle Sidebar", None, Action::ToggleSidebar),
                Item::Divider,
                Item::Button("English", None, Action::SetLanguage(Language::English)),
                Item::Button("Français", None, Action::SetLanguage(Language::French)),
                Item::Button("粵語", None, Action::SetLanguage(Language::Cantonese)),
            ],
        ),
    ]
}

/// Map a key press to a shortcut action
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Action> {
    match key {
        Key::Named(keyboard::key::Named::Escape) if modifiers.is_empty() => {
            Some(Action::ClearSearch)
        }
        Key::Character(c) if modifiers.control() && !modifiers.alt() && !modifiers.shift() => {
            match c.to_lowercase().as_str() {
                "r" => Some(Action::Reload),
                "q" => Some(Action::Quit),
                "b" => Some(Action::ToggleSidebar),
                "l" => Some(Action::CycleLanguage),
                digit => digit
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| Category::ALL.get(i).copied())
                    .map(Action::ShowCategory),
            }
        }
        _ => None,
    }
}

/// Keyboard shortcuts subscription
///
/// Listens for keyboard events and matches against defined shortcuts.
pub fn keyboard_shortcuts_subscription() -> Subscription<Message> {
    listen_raw(|event, status, _| {
        // Only process if event wasn't already handled
        if event::Status::Ignored != status {
            return None;
        }

        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Action::to_message)
            }
            _ => None,
        }
    })
}
