//! Menu file watcher
//!
//! Watches the directory holding the menu file so that edits, including
//! editors that save by writing a temp file and renaming it, trigger a
//! reload. Events arrive on the notify thread and are drained by `poll`
//! from the UI tick.

use crate::error::WatcherError;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

/// Default quiet period before a burst of events triggers a reload
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// What happened to the menu file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Created, written or renamed into place
    Changed,
    /// Deleted or renamed away
    Removed,
}

/// Classify a notify event for `target`, ignoring other files in the directory
pub fn classify(event: &Event, target: &Path) -> Option<WatchEvent> {
    let target_name = target.file_name()?;
    if !event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(target_name))
    {
        return None;
    }

    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Changed),
        EventKind::Remove(_) => Some(WatchEvent::Removed),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => None,
    }
}

/// Collapses a burst of events into one reload once things go quiet
#[derive(Debug, Clone)]
pub struct ReloadDebouncer {
    last_event: Option<Instant>,
    quiet: Duration,
}

impl ReloadDebouncer {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            last_event: None,
            quiet: Duration::from_millis(debounce_ms),
        }
    }

    /// Record an event seen at `now`
    pub fn note(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// True once per burst, after the quiet period has elapsed
    pub fn take_ready(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(at) if now.duration_since(at) >= self.quiet => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}

/// Watches one menu file for external changes
pub struct MenuWatcher {
    /// The underlying notify watcher
    _watcher: RecommendedWatcher,

    /// Receiver for events
    event_rx: Receiver<notify::Result<Event>>,

    /// The menu file being watched
    target: PathBuf,

    debouncer: ReloadDebouncer,
}

impl MenuWatcher {
    /// Start watching `menu_path`
    pub fn new(menu_path: &Path, debounce_ms: u64) -> Result<Self, WatcherError> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(debounce_ms.max(100))),
        )
        .map_err(WatcherError::InitError)?;

        let dir = crate::utils::path::parent_dir(menu_path);
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|source| WatcherError::WatchError {
                path: dir.clone(),
                source,
            })?;

        log::debug!("Watching {} for menu changes", dir.display());

        Ok(Self {
            _watcher: watcher,
            event_rx: rx,
            target: menu_path.to_path_buf(),
            debouncer: ReloadDebouncer::new(debounce_ms),
        })
    }

    /// Drain pending events (non-blocking). Returns true when the menu
    /// should be reloaded.
    pub fn poll(&mut self, now: Instant) -> bool {
        while let Ok(event_result) = self.event_rx.try_recv() {
            match event_result {
                Ok(event) => match classify(&event, &self.target) {
                    Some(WatchEvent::Changed) => self.debouncer.note(now),
                    Some(WatchEvent::Removed) => {
                        log::info!("Menu file {} was removed", self.target.display());
                    }
                    None => {}
                },
                Err(e) => log::warn!("Menu watcher error: {}", e),
            }
        }

        self.debouncer.take_ready(now)
    }

    /// The menu file being watched
    pub fn target(&self) -> &Path {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_classify_only_matches_menu_file() {
        let target = Path::new("/srv/bistro/menu.json");
        let write = || EventKind::Modify(ModifyKind::Data(DataChange::Any));

        assert_eq!(
            classify(&event(write(), "/srv/bistro/menu.json"), target),
            Some(WatchEvent::Changed)
        );
        assert_eq!(classify(&event(write(), "/srv/bistro/notes.txt"), target), None);
    }

    #[test]
    fn test_classify_kinds() {
        let target = Path::new("menu.json");
        assert_eq!(
            classify(&event(EventKind::Create(CreateKind::File), "/x/menu.json"), target),
            Some(WatchEvent::Changed)
        );
        assert_eq!(
            classify(&event(EventKind::Remove(RemoveKind::File), "/x/menu.json"), target),
            Some(WatchEvent::Removed)
        );
        assert_eq!(
            classify(&event(EventKind::Access(AccessKind::Any), "/x/menu.json"), target),
            None
        );
    }

    #[test]
    fn test_debouncer_fires_once_after_quiet_period() {
        let mut debouncer = ReloadDebouncer::new(100);
        let start = Instant::now();

        assert!(!debouncer.take_ready(start));
        debouncer.note(start);
        debouncer.note(start + Duration::from_millis(50));

        assert!(!debouncer.take_ready(start + Duration::from_millis(120)));
        assert!(debouncer.take_ready(start + Duration::from_millis(150)));
        assert!(!debouncer.take_ready(start + Duration::from_millis(400)));
    }
}
