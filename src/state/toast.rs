//! Transient confirmation messages
//!
//! Only one toast is shown at a time; a newer one replaces the old. Each toast
//! gets a serial id so that a stale expiry timer cannot dismiss its successor.

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

/// Holder for the visible toast
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text`, replacing any visible toast. Returns the id to expire later.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            text: text.into(),
        });
        self.next_id
    }

    /// Remove the toast if it is still the one identified by `id`
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(toast) if toast.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The visible toast, if any
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
