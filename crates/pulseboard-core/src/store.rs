//! Generic observable state container.
//!
//! Every domain store in this crate is built on [`Store`]: a single-owner,
//! single-threaded container holding one state value, mutated exclusively by
//! replacement and observed through synchronous subscriber notification.

use std::cell::{Cell, RefCell};

/// Handle returned by [`Store::subscribe`], used to deregister the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<S> = Box<dyn Fn(&S)>;

/// An observable, single-owner in-memory state container.
///
/// A `Store` holds exactly one state value. Reading never mutates; mutation
/// goes through [`Store::update`], which computes a full replacement state
/// from the previous value, installs it, and then notifies every current
/// subscriber in registration order, synchronously, on the same call stack.
///
/// The container is deliberately single-threaded (interior mutability via
/// `RefCell`): all mutations run to completion on the UI thread in response
/// to discrete events. A listener or updater that calls back into the same
/// store before returning is unsupported and will panic on the interior
/// borrow.
///
/// Construction is an explicit factory call; the owner (application root or
/// a bounded UI subtree) passes the store instance to whatever needs it.
pub struct Store<S> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(ListenerId, Listener<S>)>>,
    next_listener_id: Cell<u64>,
}

impl<S> Store<S> {
    /// Creates a store owning `initial` as its current state.
    pub fn new(initial: S) -> Self {
        Self {
            state: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    /// Borrows the current state for the duration of a pure read.
    ///
    /// Derived views are computed through this entry point: the closure
    /// receives the current state and returns plain data, with no side
    /// effects and no caching beyond the single read.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Returns a by-value copy of the current state.
    ///
    /// Cross-store reads use snapshots, never held references: a snapshot is
    /// consistent with the instant it was taken even if the store mutates a
    /// moment later.
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.state.borrow().clone()
    }

    /// Applies `updater` to the previous state, installs the replacement,
    /// then synchronously notifies all current subscribers.
    ///
    /// `updater` receives the previous value and must return the complete
    /// next state; it never mutates in place. `update` itself never fails:
    /// invariant violations are a contract failure of the calling mutation,
    /// not of the engine.
    pub fn update(&self, updater: impl FnOnce(&S) -> S) {
        let next = {
            let prev = self.state.borrow();
            updater(&prev)
        };
        *self.state.borrow_mut() = next;
        self.notify();
    }

    /// Registers a listener invoked after every [`Store::update`].
    ///
    /// Listeners run in registration order; no further ordering is
    /// guaranteed. Zero subscribers is a valid steady state.
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    /// Deregisters a listener. Returns `false` when the id is unknown
    /// (already removed or never issued by this store).
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        let state = self.state.borrow();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_read_does_not_mutate() {
        let store = Store::new(7u32);
        assert_eq!(store.read(|s| *s), 7);
        assert_eq!(store.read(|s| *s), 7);
    }

    #[test]
    fn test_update_replaces_state() {
        let store = Store::new(vec![1, 2]);
        store.update(|prev| {
            let mut next = prev.clone();
            next.push(3);
            next
        });
        assert_eq!(store.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn test_subscribers_notified_after_every_update() {
        let store = Store::new(0u32);
        let seen = Rc::new(Cell::new(0u32));
        let seen_clone = seen.clone();
        store.subscribe(move |s| seen_clone.set(*s));

        store.update(|s| s + 1);
        assert_eq!(seen.get(), 1);
        store.update(|s| s + 1);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new(0u32);
        let calls = Rc::new(Cell::new(0usize));
        let calls_clone = calls.clone();
        let id = store.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));

        store.update(|s| s + 1);
        assert!(store.unsubscribe(id));
        store.update(|s| s + 1);

        assert_eq!(calls.get(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let store = Store::new(0u32);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }
        store.update(|s| s + 1);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_mutations() {
        let store = Store::new(vec![1]);
        let snap = store.snapshot();
        store.update(|prev| {
            let mut next = prev.clone();
            next.push(2);
            next
        });
        assert_eq!(snap, vec![1]);
        assert_eq!(store.snapshot(), vec![1, 2]);
    }

    #[test]
    fn test_zero_subscribers_is_fine() {
        let store = Store::new(1u32);
        store.update(|s| s + 1);
        assert_eq!(store.listener_count(), 0);
        assert_eq!(store.snapshot(), 2);
    }
}
