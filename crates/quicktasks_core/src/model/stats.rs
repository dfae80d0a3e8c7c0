//! Completion statistics derived from a task list.
//!
//! # Invariants
//! - `percent` is `0` for an empty list.
//! - `percent` truncates toward zero; it never rounds.

use crate::model::task::Task;
use serde::Serialize;

/// Aggregate completion counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub done: usize,
    /// `done * 100 / total`, integer division.
    pub percent: u32,
}

impl TaskStats {
    /// Computes stats for the given tasks.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let done = tasks.iter().filter(|task| task.done).count();
        Self {
            total,
            done,
            percent: percent_of(done, total),
        }
    }

    /// Number of tasks still open.
    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.done)
    }

    /// Completion fraction in `0.0..=1.0` for progress indicators.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f32 / self.total as f32
        }
    }
}

fn percent_of(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // done <= total, so the quotient is at most 100.
    (done * 100 / total) as u32
}

#[cfg(test)]
mod tests {
    use super::TaskStats;
    use crate::model::task::Task;

    fn tasks(flags: &[bool]) -> Vec<Task> {
        flags
            .iter()
            .enumerate()
            .map(|(index, done)| Task {
                id: index as i64 + 1,
                title: format!("task {index}"),
                done: *done,
            })
            .collect()
    }

    #[test]
    fn empty_list_has_zero_percent() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(
            stats,
            TaskStats {
                total: 0,
                done: 0,
                percent: 0
            }
        );
        assert_eq!(stats.progress(), 0.0);
    }

    #[test]
    fn percent_truncates_instead_of_rounding() {
        let stats = TaskStats::from_tasks(&tasks(&[true, false, false]));
        assert_eq!(stats.percent, 33);

        let stats = TaskStats::from_tasks(&tasks(&[true, true, false]));
        assert_eq!(stats.percent, 66);
    }

    #[test]
    fn all_done_is_one_hundred() {
        let stats = TaskStats::from_tasks(&tasks(&[true, true]));
        assert_eq!(stats.percent, 100);
        assert_eq!(stats.pending(), 0);
        assert_eq!(stats.progress(), 1.0);
    }

    #[test]
    fn pending_saturates_for_inconsistent_counts() {
        let stats = TaskStats {
            total: 0,
            done: 1,
            percent: 0,
        };
        assert_eq!(stats.pending(), 0);
    }
}
