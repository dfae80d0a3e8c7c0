//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the process-wide task store to Dart via FRB as sync calls.
//! - Translate store views into plain FFI-friendly records.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All intents run under one mutex, so each is atomic and totally ordered.
//! - `tasks_revision` changes whenever any view may have changed.

use log::warn;
use once_cell::sync::Lazy;
use quicktasks_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskStore,
};
use std::sync::{Mutex, MutexGuard};

static STORE: Lazy<Mutex<TaskStore>> = Lazy::new(|| Mutex::new(TaskStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Completion stats for the stats screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStatsResponse {
    pub total: u32,
    pub done: u32,
    /// Integer percent, truncated.
    pub percent: u32,
    /// Fraction in `0.0..=1.0` for the progress bar.
    pub progress: f32,
}

/// Result envelope for `tasks_add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether a task was created.
    pub ok: bool,
    /// Created task id.
    pub task_id: Option<i64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Adds a task; blank titles are ignored.
///
/// # FFI contract
/// - Never panics.
/// - `ok = false` with no id when the title is blank.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_add(title: String) -> TaskActionResponse {
    match with_store(|store| store.try_add_task(title.as_str())) {
        Ok(id) => TaskActionResponse {
            ok: true,
            task_id: Some(id),
            message: "Task added.".to_string(),
        },
        Err(err) => TaskActionResponse {
            ok: false,
            task_id: None,
            message: format!("tasks_add ignored: {err}"),
        },
    }
}

/// Flips completion of the task with `id`. Unknown ids are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_toggle(id: i64) {
    with_store(|store| store.toggle_done(id));
}

/// Deletes the task with `id`. Unknown ids are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_delete(id: i64) {
    with_store(|store| store.delete_task(id));
}

/// Returns the task list, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> Vec<TaskItem> {
    with_store(|store| store.tasks().map(to_task_item).collect())
}

/// Returns completion statistics.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_stats() -> TaskStatsResponse {
    let stats = with_store(|store| store.stats_view());
    TaskStatsResponse {
        total: saturating_u32(stats.total),
        done: saturating_u32(stats.done),
        percent: stats.percent,
        progress: stats.progress(),
    }
}

/// Number of store notifications so far.
///
/// The UI re-reads `tasks_list`/`tasks_stats` when this value changes.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_revision() -> u64 {
    with_store(|store| store.revision())
}

/// Seeds the sample tasks when the store is still empty.
///
/// Returns `true` when the sample was inserted.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_seed_demo() -> bool {
    with_store(|store| {
        if store.is_empty() {
            store.seed_demo();
            true
        } else {
            false
        }
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_set_show_motivation(value: bool) {
    with_store(|store| store.set_show_motivation(value));
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_show_motivation() -> bool {
    with_store(|store| store.show_motivation())
}

/// Banner text, or `None` while the preference is off.
#[flutter_rust_bridge::frb(sync)]
pub fn motivation_text() -> Option<String> {
    with_store(|store| store.preferences().motivation_line().map(str::to_owned))
}

fn with_store<T>(f: impl FnOnce(&mut TaskStore) -> T) -> T {
    let mut guard = lock_store();
    f(&mut *guard)
}

fn lock_store() -> MutexGuard<'static, TaskStore> {
    STORE.lock().unwrap_or_else(|poisoned| {
        // Intents are total, so state behind a poisoned lock is still valid.
        warn!("event=store_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id,
        title: task.title.clone(),
        done: task.done,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
