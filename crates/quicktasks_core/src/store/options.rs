//! Store configuration.

/// When intents that matched nothing still emit a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Every toggle/delete/preference write notifies, even without a change.
    #[default]
    Always,
    /// Toggle/delete notify only when a task matched; preference writes only
    /// when the value changed.
    OnChange,
}

/// Construction-time options for `TaskStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub notify_policy: NotifyPolicy,
}

impl StoreOptions {
    pub fn with_notify_policy(notify_policy: NotifyPolicy) -> Self {
        Self { notify_policy }
    }

    pub(crate) fn should_notify(&self, changed: bool) -> bool {
        match self.notify_policy {
            NotifyPolicy::Always => true,
            NotifyPolicy::OnChange => changed,
        }
    }
}
