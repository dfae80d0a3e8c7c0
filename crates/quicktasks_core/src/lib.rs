//! Core state for QuickTasks.
//! This crate is the single source of truth for task and preference invariants.

pub mod id_source;
pub mod logging;
pub mod model;
pub mod store;

pub use id_source::{ClockIdSource, IdSource, SequentialIdSource};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::preferences::{Preferences, MOTIVATION_TEXT};
pub use model::stats::TaskStats;
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use store::options::{NotifyPolicy, StoreOptions};
pub use store::task_store::{StoreError, StoreResult, SubscriptionId, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
