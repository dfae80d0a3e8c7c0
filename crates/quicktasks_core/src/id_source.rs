//! Identity sources for new tasks.
//!
//! # Responsibility
//! - Supply one fresh `TaskId` per `TaskStore::add_task` call.
//!
//! # Invariants
//! - Built-in sources are strictly increasing for the lifetime of one value.
//! - `ClockIdSource` never repeats an id, even when called twice within the
//!   same millisecond.

use crate::model::task::TaskId;
use mockable::{Clock, DefaultClock};

/// Producer of task identities, injected into `TaskStore` at construction.
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;
}

impl<F> IdSource for F
where
    F: FnMut() -> TaskId,
{
    fn next_id(&mut self) -> TaskId {
        self()
    }
}

/// Counter starting at 1. Default source for `TaskStore`.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    next: TaskId,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the sequence at `first`.
    pub fn starting_at(first: TaskId) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> TaskId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Wall-clock milliseconds, bumped past the previous id when the clock
/// stalls or steps backwards.
#[derive(Debug, Clone)]
pub struct ClockIdSource<C: Clock = DefaultClock> {
    clock: C,
    last: Option<TaskId>,
}

impl ClockIdSource<DefaultClock> {
    /// Uses the system clock (Unix epoch milliseconds).
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for ClockIdSource<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ClockIdSource<C> {
    /// Uses a caller-provided clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: None }
    }
}

impl<C: Clock> IdSource for ClockIdSource<C> {
    fn next_id(&mut self) -> TaskId {
        let now = self.clock.utc().timestamp_millis();
        let id = match self.last {
            Some(last) if now <= last => last.saturating_add(1),
            _ => now,
        };
        self.last = Some(id);
        id
    }
}
