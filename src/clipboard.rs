//! Clipboard integration for copying image prompts
//!
//! Uses the arboard crate for cross-platform clipboard access. When arboard
//! cannot reach a clipboard (e.g. a compositor without data-control support)
//! the text is piped to the usual command-line clipboard tools instead.

use crate::error::{ClipboardError, ClipboardResult};
use arboard::Clipboard;
use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};

/// A way of putting text on the system clipboard
pub trait ClipboardBackend: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`
    fn set_text(&self, text: &str) -> ClipboardResult<()>;
}

/// Run `op` on the handle cached in `slot`, opening it first if needed.
///
/// The handle stays cached after a successful write so it keeps serving the
/// selection. A failed write drops it so the next call starts fresh.
fn with_cached_handle<T, E>(
    slot: &RefCell<Option<T>>,
    open: impl FnOnce() -> Result<T, E>,
    op: impl FnOnce(&mut T) -> Result<(), E>,
) -> Result<(), E> {
    let mut slot = slot.borrow_mut();
    let mut handle = match slot.take() {
        Some(handle) => handle,
        None => open()?,
    };
    op(&mut handle)?;
    *slot = Some(handle);
    Ok(())
}

thread_local! {
    /// arboard's Clipboard is not Send/Sync on all platforms, so the
    /// long-lived handle lives on the UI thread that copies prompts.
    static ARBOARD: RefCell<Option<Clipboard>> = const { RefCell::new(None) };
}

/// Primary backend: arboard
///
/// On Linux the copied text is only served while a handle is alive, so the
/// handle is opened once and reused.
pub struct ArboardBackend;

impl ClipboardBackend for ArboardBackend {
    fn name(&self) -> &str {
        "arboard"
    }

    fn set_text(&self, text: &str) -> ClipboardResult<()> {
        ARBOARD.with(|slot| {
            with_cached_handle(
                slot,
                || Clipboard::new().map_err(|e| ClipboardError::AccessError(e.to_string())),
                |clipboard| {
                    clipboard
                        .set_text(text)
                        .map_err(|e| ClipboardError::WriteError(e.to_string()))
                },
            )
        })
    }
}

/// Fallback backend: pipe the text into an external tool
pub struct CommandBackend {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandBackend {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl ClipboardBackend for CommandBackend {
    fn name(&self) -> &str {
        self.program
    }

    fn set_text(&self, text: &str) -> ClipboardResult<()> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::AccessError(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::WriteError(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::WriteError(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::WriteError(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Command-line tools tried after arboard, in order
pub const FALLBACK_COMMANDS: [CommandBackend; 4] = [
    CommandBackend::new("wl-copy", &[]),
    CommandBackend::new("xclip", &["-selection", "clipboard"]),
    CommandBackend::new("xsel", &["--clipboard", "--input"]),
    CommandBackend::new("pbcopy", &[]),
];

/// Tries each backend in turn until one accepts the text
pub struct ClipboardManager {
    backends: Vec<Box<dyn ClipboardBackend>>,
}

impl ClipboardManager {
    /// Create a manager with arboard first, then the command-line fallbacks
    pub fn new() -> Self {
        let mut backends: Vec<Box<dyn ClipboardBackend>> = vec![Box::new(ArboardBackend)];
        backends.extend(
            FALLBACK_COMMANDS
                .into_iter()
                .map(|b| Box::new(b) as Box<dyn ClipboardBackend>),
        );
        Self::with_backends(backends)
    }

    /// Create a manager with an explicit backend chain
    pub fn with_backends(backends: Vec<Box<dyn ClipboardBackend>>) -> Self {
        Self { backends }
    }

    /// Copy `text`, returning the name of the backend that took it
    pub fn set_text(&self, text: &str) -> ClipboardResult<String> {
        for backend in &self.backends {
            match backend.set_text(text) {
                Ok(()) => return Ok(backend.name().to_string()),
                Err(e) => {
                    log::debug!("Clipboard backend {} failed: {}", backend.name(), e);
                }
            }
        }
        Err(ClipboardError::NoBackend)
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global clipboard instance
static CLIPBOARD: std::sync::OnceLock<ClipboardManager> = std::sync::OnceLock::new();

/// Get the global clipboard manager
pub fn clipboard() -> &'static ClipboardManager {
    CLIPBOARD.get_or_init(ClipboardManager::new)
}

/// Convenience function to copy text to the clipboard
pub fn copy_text(text: &str) -> ClipboardResult<String> {
    clipboard().set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct FakeBackend {
        name: &'static str,
        works: bool,
        received: Arc<Mutex<Vec<String>>>,
    }

    impl ClipboardBackend for FakeBackend {
        fn name(&self) -> &str {
            self.name
        }

        fn set_text(&self, text: &str) -> ClipboardResult<()> {
            self.received.lock().unwrap().push(text.to_string());
            if self.works {
                Ok(())
            } else {
                Err(ClipboardError::AccessError("no display".to_string()))
            }
        }
    }

    fn fake(name: &'static str, works: bool, log: &Arc<Mutex<Vec<String>>>) -> Box<dyn ClipboardBackend> {
        Box::new(FakeBackend {
            name,
            works,
            received: Arc::clone(log),
        })
    }

    #[test]
    fn test_falls_back_to_next_backend() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let manager =
            ClipboardManager::with_backends(vec![fake("primary", false, &log), fake("legacy", true, &log)]);

        let used = manager.set_text("Socca. Parisian bistro plating, appetizing.").unwrap();
        assert_eq!(used, "legacy");
        assert_eq!(
            *log.lock().unwrap(),
            ["Socca. Parisian bistro plating, appetizing."; 2]
        );
    }

    #[test]
    fn test_stops_at_first_success() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let manager =
            ClipboardManager::with_backends(vec![fake("primary", true, &log), fake("legacy", true, &log)]);

        assert_eq!(manager.set_text("x").unwrap(), "primary");
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_all_backends_failing_is_an_error() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let manager = ClipboardManager::with_backends(vec![fake("primary", false, &log)]);

        assert!(matches!(manager.set_text("x"), Err(ClipboardError::NoBackend)));
    }

    #[test]
    fn test_handle_is_opened_once_and_kept() {
        let slot: RefCell<Option<Vec<&str>>> = RefCell::new(None);
        let mut opened = 0;

        for text in ["Socca", "Daube"] {
            with_cached_handle(
                &slot,
                || {
                    opened += 1;
                    Ok::<_, ()>(Vec::new())
                },
                |held| {
                    held.push(text);
                    Ok(())
                },
            )
            .unwrap();
        }

        assert_eq!(opened, 1);
        assert_eq!(slot.borrow().as_deref(), Some(&["Socca", "Daube"][..]));
    }

    #[test]
    fn test_failed_write_drops_the_handle() {
        let slot = RefCell::new(Some(0u8));
        let result = with_cached_handle(&slot, || Ok(1u8), |_| Err("lost display"));

        assert_eq!(result, Err("lost display"));
        assert!(slot.borrow().is_none());

        with_cached_handle(&slot, || Ok::<_, &str>(1u8), |_| Ok(())).unwrap();
        assert_eq!(*slot.borrow(), Some(1));
    }

    #[test]
    fn test_missing_command_is_an_access_error() {
        let backend = CommandBackend::new("bistro-menu-no-such-clipboard-tool", &[]);
        assert!(matches!(
            backend.set_text("x"),
            Err(ClipboardError::AccessError(_))
        ));
    }
}
