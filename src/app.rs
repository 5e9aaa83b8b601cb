//! Main application module implementing the Cosmic Application trait
//!
//! This is the central hub of the application, implementing libCosmic's
//! Application trait for window management and message routing.

use crate::catalog::load_menu;
use crate::clipboard::copy_text;
use crate::config::{Config, APP_ID, APP_TITLE};
use crate::error::{AppError, AppResult};
use crate::i18n::{self, tr, Language, UiText};
use crate::menu::{keyboard_shortcuts_subscription, Action as MenuAction};
use crate::message::{
    ClipboardMessage, MenuMessage, Message, SearchMessage, SystemMessage, ViewMessage,
};
use crate::state::AppState;
use crate::ui;
use crate::utils::text::truncate;
use crate::watcher::{MenuWatcher, DEFAULT_DEBOUNCE_MS};

use chrono::Datelike;
use cosmic::app::{Core, Task};
use cosmic::widget::menu::KeyBind;
use cosmic::{Application, ApplicationExt, Element};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How often pending menu file events are drained
const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Bistro Menu Application
pub struct BistroMenu {
    /// libCosmic core reference
    core: Core,

    /// Application state
    pub state: AppState,

    /// User configuration with command-line overrides applied
    pub config: Config,

    /// Live reload of the menu file, when enabled and available
    watcher: Option<MenuWatcher>,

    /// Keyboard shortcut bindings
    key_binds: HashMap<KeyBind, MenuAction>,

    /// Year shown in the footer, read once at startup
    footer_year: i32,
}

/// Application flags passed during initialization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Menu file given with `--menu`
    pub menu_path: Option<PathBuf>,

    /// Language given with `--lang`
    pub language: Option<Language>,

    /// `--no-watch`: do not reload on file changes
    pub no_watch: bool,
}

impl Application for BistroMenu {
    /// Executor for async tasks
    type Executor = cosmic::executor::Default;

    /// Application flags
    type Flags = Flags;

    /// Application message type
    type Message = Message;

    /// Application ID following reverse-DNS convention
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initialize the application
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        // Load configuration
        let mut config = Config::load().unwrap_or_else(|e| {
            AppError::from(e).log("Ignoring configuration file");
            Config::default()
        });
        config.apply_flags(&flags);

        i18n::init(config.default_language);

        let menu_path = config.resolved_menu_path();
        let watcher = match start_watcher(&config) {
            Ok(watcher) => watcher,
            Err(e) => {
                e.log("Live menu reload disabled");
                None
            }
        };

        let mut app = Self {
            core,
            state: AppState::new(menu_path, config.default_language),
            config,
            watcher,
            key_binds: crate::menu::key_binds(),
            footer_year: chrono::Local::now().year(),
        };

        // Set window title
        app.set_header_title(APP_TITLE.to_string());

        let task = app.load_menu_task();
        (app, task)
    }

    /// Handle incoming messages
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::Menu(msg) => self.handle_menu_message(msg),
            Message::Search(msg) => self.handle_search_message(msg),
            Message::View(msg) => self.handle_view_message(msg),
            Message::Clipboard(msg) => self.handle_clipboard_message(msg),
            Message::System(msg) => self.handle_system_message(msg),
            // Menu bar popups are opened by the runtime
            Message::Surface(action) => cosmic::task::message(cosmic::Action::Cosmic(
                cosmic::app::Action::Surface(action),
            )),
        }
    }

    /// Render the application view
    fn view(&self) -> Element<'_, Self::Message> {
        ui::view(&self.state, &self.config, self.footer_year)
    }

    /// Handle subscription events
    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        use cosmic::iced::time;

        let mut subscriptions = vec![
            // Keyboard shortcut subscription
            keyboard_shortcuts_subscription(),
        ];

        // Drain file watcher events while live reload is on
        if self.watcher.is_some() {
            subscriptions.push(
                time::every(WATCH_POLL_INTERVAL).map(|_| Message::System(SystemMessage::Tick)),
            );
        }

        cosmic::iced::Subscription::batch(subscriptions)
    }

    /// Elements to show at the start of the header bar (menu bar)
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        use cosmic::widget::menu::ItemHeight;
        use cosmic::widget::responsive_menu_bar;

        let menu_bar = responsive_menu_bar()
            .item_height(ItemHeight::Dynamic(40))
            .into_element(
                self.core(),
                &self.key_binds,
                cosmic::widget::Id::new("menu-bar"),
                Message::Surface, // Surface action wrapper
                crate::menu::menu_items(),
            );

        vec![menu_bar]
    }
}

/// Start watching the menu file if the configuration asks for it
fn start_watcher(config: &Config) -> AppResult<Option<MenuWatcher>> {
    if !config.watch_menu_file {
        log::debug!("Menu file watching disabled");
        return Ok(None);
    }
    let watcher = MenuWatcher::new(&config.resolved_menu_path(), DEFAULT_DEBOUNCE_MS)?;
    log::info!("Live reload on for {}", watcher.target().display());
    Ok(Some(watcher))
}

impl BistroMenu {
    /// Helper to wrap message in cosmic Action
    fn app_message(msg: Message) -> cosmic::Action<Message> {
        cosmic::Action::App(msg)
    }

    /// Read the menu file in the background
    fn load_menu_task(&self) -> Task<Message> {
        let path = self.state.menu_path().to_path_buf();
        log::debug!("Loading menu from {}", path.display());

        Task::perform(
            async move {
                match load_menu(&path).await {
                    Ok(document) => MenuMessage::Loaded(document),
                    Err(e) => MenuMessage::LoadFailed(e.user_message()),
                }
            },
            |msg| Self::app_message(Message::Menu(msg)),
        )
    }

    /// Handle menu document messages
    fn handle_menu_message(&mut self, msg: MenuMessage) -> Task<Message> {
        match msg {
            MenuMessage::Reload => self.load_menu_task(),

            MenuMessage::FileChanged => {
                log::info!("Menu file changed on disk, reloading");
                self.load_menu_task()
            }

            MenuMessage::Loaded(document) => {
                self.state.set_document(document);
                Task::none()
            }

            MenuMessage::LoadFailed(error) => {
                // Keep whatever is on screen
                log::warn!("Menu not loaded: {}", error);
                if !self.state.is_loaded() {
                    log::info!("Showing an empty menu until {} can be read", self.state.menu_path().display());
                }
                Task::none()
            }
        }
    }

    /// Handle search-related messages
    fn handle_search_message(&mut self, msg: SearchMessage) -> Task<Message> {
        match msg {
            SearchMessage::UpdateQuery(query) => self.state.set_query(query),
            SearchMessage::Clear => self.state.clear_query(),
        }
        Task::none()
    }

    /// Handle view-related messages
    fn handle_view_message(&mut self, msg: ViewMessage) -> Task<Message> {
        match msg {
            ViewMessage::SetLanguage(lang) => self.state.set_language(lang),
            ViewMessage::CycleLanguage => {
                let lang = self.state.cycle_language();
                log::debug!("Language switched to {}", lang);
            }
            ViewMessage::SelectCategory(category) => {
                self.state.select_category(category);
            }
            ViewMessage::ToggleSidebar => self.state.toggle_sidebar(),
        }
        Task::none()
    }

    /// Handle clipboard messages
    fn handle_clipboard_message(&mut self, msg: ClipboardMessage) -> Task<Message> {
        match msg {
            ClipboardMessage::CopyPrompt(prompt) => match copy_text(&prompt) {
                Ok(backend) => {
                    log::debug!("Copied prompt via {}: {}", backend, truncate(&prompt, 60));
                    let text = tr(self.state.language(), UiText::PromptCopied);
                    let id = self.state.toasts.show(text);
                    self.toast_timer(id)
                }
                Err(e) => {
                    // No toast: the user simply sees no confirmation
                    AppError::from(e).log("Could not copy prompt");
                    Task::none()
                }
            },
        }
    }

    /// Expire toast `id` after the configured display time
    fn toast_timer(&self, id: u64) -> Task<Message> {
        let duration = Duration::from_millis(self.config.toast_duration_ms);
        Task::perform(
            async move {
                tokio::time::sleep(duration).await;
                id
            },
            |id| Self::app_message(Message::System(SystemMessage::ToastExpired(id))),
        )
    }

    /// Handle system-related messages
    fn handle_system_message(&mut self, msg: SystemMessage) -> Task<Message> {
        match msg {
            SystemMessage::Tick => {
                if let Some(watcher) = self.watcher.as_mut() {
                    if watcher.poll(Instant::now()) {
                        return Task::done(Self::app_message(Message::Menu(
                            MenuMessage::FileChanged,
                        )));
                    }
                }
            }

            SystemMessage::ToastExpired(id) => {
                self.state.toasts.expire(id);
            }

            SystemMessage::Quit => {
                log::info!("Quitting");
                // Exit application
                std::process::exit(0);
            }
        }
        Task::none()
    }
}
