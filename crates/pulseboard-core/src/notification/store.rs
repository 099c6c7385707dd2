//! Notification store: feed plus incrementally maintained unread counter.

use serde::{Deserialize, Serialize};

use super::model::Notification;
use crate::store::{ListenerId, Store};

/// State owned by the [`NotificationStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    /// Feed entries, most recent first.
    pub notifications: Vec<Notification>,
    /// Count of unread entries, maintained incrementally on every mutation
    /// that can change read state. Never negative.
    pub unread_count: usize,
}

/// Observable store for the notification feed.
///
/// All operations are total functions over the state: unknown ids are silent
/// no-ops, and the counter is clamped at zero rather than allowed to go
/// negative.
pub struct NotificationStore {
    inner: Store<NotificationState>,
}

impl NotificationStore {
    /// Creates a store seeded with `initial`.
    pub fn new(initial: NotificationState) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    /// Prepends a notification to the feed and increments the unread
    /// counter.
    ///
    /// The increment is unconditional, even when `notification.read` is
    /// already true at insertion. That drifts the counter above the true
    /// unread count until the next `mark_all_as_read`; preserved as
    /// observed in the product rather than corrected here.
    pub fn add(&self, notification: Notification) {
        tracing::debug!(id = %notification.id, "add notification");
        self.inner.update(|prev| {
            let mut notifications = Vec::with_capacity(prev.notifications.len() + 1);
            notifications.push(notification.clone());
            notifications.extend(prev.notifications.iter().cloned());
            NotificationState {
                notifications,
                unread_count: prev.unread_count + 1,
            }
        });
    }

    /// Marks one notification as read. Idempotent: unknown ids and
    /// already-read entries leave state unchanged.
    pub fn mark_as_read(&self, id: &str) {
        self.inner.update(|prev| {
            let is_unread = prev
                .notifications
                .iter()
                .any(|n| n.id == id && !n.read);
            if !is_unread {
                return prev.clone();
            }
            let notifications = prev
                .notifications
                .iter()
                .map(|n| {
                    if n.id == id {
                        Notification { read: true, ..n.clone() }
                    } else {
                        n.clone()
                    }
                })
                .collect();
            NotificationState {
                notifications,
                unread_count: prev.unread_count.saturating_sub(1),
            }
        });
    }

    /// Marks every notification as read and resets the counter to zero
    /// unconditionally. This is the operation that restores the counter
    /// invariant even if `add` drifted it.
    pub fn mark_all_as_read(&self) {
        self.inner.update(|prev| NotificationState {
            notifications: prev
                .notifications
                .iter()
                .map(|n| Notification { read: true, ..n.clone() })
                .collect(),
            unread_count: 0,
        });
    }

    /// Removes one notification. The counter is decremented only when the
    /// removed entry was unread, floored at zero. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) {
        self.inner.update(|prev| {
            let removed_unread = prev
                .notifications
                .iter()
                .any(|n| n.id == id && !n.read);
            let notifications: Vec<Notification> = prev
                .notifications
                .iter()
                .filter(|n| n.id != id)
                .cloned()
                .collect();
            let unread_count = if removed_unread {
                prev.unread_count.saturating_sub(1)
            } else {
                prev.unread_count
            };
            NotificationState {
                notifications,
                unread_count,
            }
        });
    }

    /// Empties the feed and zeroes the counter.
    pub fn clear_all(&self) {
        self.inner.update(|_| NotificationState::default());
    }

    /// Borrows the current state for a pure read.
    pub fn read<R>(&self, f: impl FnOnce(&NotificationState) -> R) -> R {
        self.inner.read(f)
    }

    /// By-value copy of the current state.
    pub fn snapshot(&self) -> NotificationState {
        self.inner.snapshot()
    }

    /// Registers a change listener; see [`Store::subscribe`].
    pub fn subscribe(&self, listener: impl Fn(&NotificationState) + 'static) -> ListenerId {
        self.inner.subscribe(listener)
    }

    /// Deregisters a change listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.unsubscribe(id)
    }
}

/// Derived view: the unread entries, feed order preserved.
pub fn unread(state: &NotificationState) -> Vec<&Notification> {
    state.notifications.iter().filter(|n| !n.read).collect()
}
