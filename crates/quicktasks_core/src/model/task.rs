//! Task domain model.
//!
//! # Responsibility
//! - Define the to-do record held by `TaskStore`.
//! - Provide the title normalization used at the intent boundary.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes.
//! - `title` has no mutator; blank titles are rejected before a `Task` exists.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer identity of one task.
///
/// Unique among tasks held by one store at the same time.
pub type TaskId = i64;

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity supplied by the store's `IdSource`.
    pub id: TaskId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Completion flag, flipped by `TaskStore::toggle_done`.
    pub done: bool,
}

impl Task {
    /// Creates an open task (`done = false`).
    ///
    /// This constructor does not validate `title`; callers go through
    /// [`normalize_title`] first.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Validation errors for task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only after trimming.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title cannot be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Trims a raw title and returns `None` when nothing is left.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strict form of [`normalize_title`].
///
/// # Errors
/// - Returns [`TaskValidationError::BlankTitle`] for empty or whitespace-only input.
pub fn validate_title(raw: &str) -> Result<String, TaskValidationError> {
    normalize_title(raw).ok_or(TaskValidationError::BlankTitle)
}
