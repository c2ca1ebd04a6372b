//! Key events arriving from the host.
//!
//! The run action fires on Enter inside the demo input fields. The SHA-256
//! message field is multi-line, so Shift+Enter inserts a line break there
//! instead of triggering the run.

use serde::{Deserialize, Serialize};

/// A key press as reported by the embedding environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }

    pub fn enter() -> Self {
        Self::new("Enter", false)
    }

    pub fn shift_enter() -> Self {
        Self::new("Enter", true)
    }
}

/// Whether a key press triggers the run action.
///
/// With `require_no_shift` the Enter key only triggers when Shift is up,
/// leaving Shift+Enter free for line breaks.
pub fn enter_triggers(event: &KeyEvent, require_no_shift: bool) -> bool {
    event.key == "Enter" && (!require_no_shift || !event.shift)
}
