//! In-memory task state store.
//!
//! # Responsibility
//! - Own the task list and display preferences as the single source of truth.
//! - Route every write through a named intent and notify observers afterwards.
//!
//! # Invariants
//! - No two held tasks share an id.
//! - Held tasks never have a blank title.
//! - Views are recomputed on every read.

pub mod options;
pub mod task_store;
