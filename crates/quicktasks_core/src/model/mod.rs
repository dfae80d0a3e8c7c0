//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the task record, completion stats and display preferences.
//! - Keep every type free of storage or rendering concerns.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within its store.
//! - Deletion is a hard remove; there is no tombstone state.

pub mod preferences;
pub mod stats;
pub mod task;
