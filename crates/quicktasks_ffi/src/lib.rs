//! Flutter bridge for the QuickTasks core store.

pub mod api;
