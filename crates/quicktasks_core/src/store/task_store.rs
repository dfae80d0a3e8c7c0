//! Task store: intents, views and change notification.
//!
//! # Responsibility
//! - Apply `add_task`, `toggle_done`, `delete_task` and `set_show_motivation`.
//! - Derive `list_view` and `stats_view` from current state on demand.
//! - Notify subscribed observers after each mutation.
//!
//! # Invariants
//! - The list is newest-first: a new task becomes element `0`.
//! - Observers run only after the mutation has fully completed.
//! - Intents never fail; degenerate input becomes a no-op.
//! - `revision` grows by exactly one per notification.

use crate::id_source::{IdSource, SequentialIdSource};
use crate::model::preferences::Preferences;
use crate::model::stats::TaskStats;
use crate::model::task::{validate_title, Task, TaskId, TaskValidationError};
use crate::store::options::StoreOptions;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{self, AssertUnwindSafe};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by the strict entry point [`TaskStore::try_add_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Input rejected at the intent boundary.
    InvalidArgument(TaskValidationError),
    /// The id source produced an id already held by the store.
    DuplicateId(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::DuplicateId(id) => write!(f, "task id already in use: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Handle returned by [`TaskStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn FnMut(&TaskStore<S>) + Send>;

/// Single source of truth for tasks and display preferences.
pub struct TaskStore<S: IdSource = SequentialIdSource> {
    tasks: Vec<Task>,
    preferences: Preferences,
    id_source: S,
    options: StoreOptions,
    observers: Vec<(SubscriptionId, Observer<S>)>,
    next_subscription: u64,
    revision: u64,
}

impl TaskStore<SequentialIdSource> {
    /// Creates an empty store with a sequential id source.
    pub fn new() -> Self {
        Self::with_id_source(SequentialIdSource::new())
    }
}

impl Default for TaskStore<SequentialIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> TaskStore<S> {
    /// Creates an empty store drawing ids from `id_source`.
    pub fn with_id_source(id_source: S) -> Self {
        Self::with_options(id_source, StoreOptions::default())
    }

    /// Creates an empty store with explicit options.
    pub fn with_options(id_source: S, options: StoreOptions) -> Self {
        Self {
            tasks: Vec::new(),
            preferences: Preferences::default(),
            id_source,
            options,
            observers: Vec::new(),
            next_subscription: 0,
            revision: 0,
        }
    }

    /// Adds a task with a trimmed title at the front of the list.
    ///
    /// Returns the new id, or `None` when the title is blank or the id
    /// source collided with a held id. Neither case notifies.
    pub fn add_task(&mut self, title: &str) -> Option<TaskId> {
        match self.try_add_task(title) {
            Ok(id) => Some(id),
            Err(StoreError::InvalidArgument(_)) => {
                debug!("event=task_add module=store status=noop reason=blank_title");
                None
            }
            Err(StoreError::DuplicateId(id)) => {
                warn!(
                    "event=task_add module=store status=noop reason=duplicate_id task_id={}",
                    id
                );
                None
            }
        }
    }

    /// Strict form of [`TaskStore::add_task`].
    ///
    /// # Errors
    /// - `StoreError::InvalidArgument` when the trimmed title is empty.
    /// - `StoreError::DuplicateId` when the id source returns a held id.
    pub fn try_add_task(&mut self, title: &str) -> StoreResult<TaskId> {
        let title = validate_title(title)?;
        let id = self.id_source.next_id();
        if self.contains(id) {
            return Err(StoreError::DuplicateId(id));
        }

        self.tasks.insert(0, Task::new(id, title));
        debug!(
            "event=task_add module=store status=ok task_id={} total={}",
            id,
            self.tasks.len()
        );
        self.notify();
        Ok(id)
    }

    /// Flips `done` on every task with `id`.
    pub fn toggle_done(&mut self, id: TaskId) {
        let mut matched = 0usize;
        for task in self.tasks.iter_mut().filter(|task| task.id == id) {
            task.toggle();
            matched += 1;
        }
        debug!(
            "event=task_toggle module=store status={} task_id={} matched={}",
            status_label(matched > 0),
            id,
            matched
        );
        self.notify_if(matched > 0);
    }

    /// Removes every task with `id`, keeping the order of the rest.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = before - self.tasks.len();
        debug!(
            "event=task_delete module=store status={} task_id={} removed={}",
            status_label(removed > 0),
            id,
            removed
        );
        self.notify_if(removed > 0);
    }

    /// Sets the motivation banner preference.
    pub fn set_show_motivation(&mut self, value: bool) {
        let changed = self.preferences.show_motivation != value;
        self.preferences.show_motivation = value;
        debug!(
            "event=pref_set module=store status={} key=show_motivation value={}",
            status_label(changed),
            value
        );
        self.notify_if(changed);
    }

    /// Current tasks, newest first.
    pub fn list_view(&self) -> &[Task] {
        &self.tasks
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// First task with `id`, if held.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completion statistics for the current list.
    pub fn stats_view(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn show_motivation(&self) -> bool {
        self.preferences.show_motivation
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Number of notifications emitted so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers an observer invoked after every notifying mutation.
    ///
    /// Observers receive the store itself and re-read whichever views they
    /// need.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&TaskStore<S>) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Loads the sample list the app ships with: "Buy milk" open on top of a
    /// completed "Finish course project".
    ///
    /// Goes through `add_task`/`toggle_done`, so it emits three notifications
    /// and, with a newest-first list, "Finish course project" receives the
    /// earlier id (`1` and `2` on a fresh `SequentialIdSource`).
    pub fn seed_demo(&mut self) {
        if let Some(id) = self.add_task("Finish course project") {
            self.toggle_done(id);
        }
        self.add_task("Buy milk");
    }

    fn notify_if(&mut self, changed: bool) {
        if self.options.should_notify(changed) {
            self.notify();
        }
    }

    fn notify(&mut self) {
        self.revision += 1;
        // Observers only get `&self`, so none can subscribe while this runs.
        let mut observers = std::mem::take(&mut self.observers);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            for (_, observer) in observers.iter_mut() {
                observer(&*self);
            }
        }));
        // Subscriptions survive an observer panic.
        self.observers = observers;
        if let Err(payload) = outcome {
            warn!("event=notify module=store status=error reason=observer_panic");
            panic::resume_unwind(payload);
        }
    }
}

impl<S: IdSource> std::fmt::Debug for TaskStore<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("preferences", &self.preferences)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

fn status_label(changed: bool) -> &'static str {
    if changed {
        "ok"
    } else {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TaskStore};
    use crate::model::task::TaskValidationError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn add_prepends_trimmed_open_task() {
        let mut store = TaskStore::new();
        let first = store.add_task("  first ").expect("first add");
        let second = store.add_task("second").expect("second add");

        let list = store.list_view();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second);
        assert_eq!(list[0].title, "second");
        assert_eq!(list[1].id, first);
        assert_eq!(list[1].title, "first");
        assert!(list.iter().all(|task| !task.done));
    }

    #[test]
    fn try_add_reports_blank_title() {
        let mut store = TaskStore::new();
        let err = store.try_add_task(" \t ").expect_err("blank must fail");
        assert_eq!(
            err,
            StoreError::InvalidArgument(TaskValidationError::BlankTitle)
        );
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn colliding_id_source_cannot_duplicate_ids() {
        let mut store = TaskStore::with_id_source(|| 42_i64);
        assert_eq!(store.add_task("a"), Some(42));
        assert_eq!(store.add_task("b"), None);
        assert_eq!(
            store.try_add_task("c").expect_err("collision must fail"),
            StoreError::DuplicateId(42)
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn notify_runs_observers_with_consistent_state() {
        let mut store = TaskStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_observer = Arc::clone(&seen);
        store.subscribe(move |store| {
            assert_eq!(store.stats_view().total, store.list_view().len());
            seen_in_observer.store(store.len(), Ordering::SeqCst);
        });

        store.add_task("one");
        store.add_task("two");
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(store.observer_count(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut store = TaskStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handle = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_task("one");
        assert!(store.unsubscribe(handle));
        assert!(!store.unsubscribe(handle));
        store.add_task("two");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn seed_demo_matches_shipped_sample() {
        let mut store = TaskStore::new();
        store.seed_demo();

        let list = store.list_view();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "Buy milk");
        assert!(!list[0].done);
        assert_eq!(list[1].title, "Finish course project");
        assert!(list[1].done);
        assert_eq!(store.stats_view().percent, 50);
        assert_eq!(list[0].id, 2);
        assert_eq!(list[1].id, 1);
        assert_eq!(store.revision(), 3);
    }
}
