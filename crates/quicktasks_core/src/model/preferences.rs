//! Display preferences owned by the store.

use serde::Serialize;

/// Banner shown above the task list while `show_motivation` is on.
pub const MOTIVATION_TEXT: &str = "Small steps > no steps. ✅";

/// User display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub show_motivation: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_motivation: true,
        }
    }
}

impl Preferences {
    /// Returns the motivation banner when enabled.
    pub fn motivation_line(&self) -> Option<&'static str> {
        self.show_motivation.then_some(MOTIVATION_TEXT)
    }
}
