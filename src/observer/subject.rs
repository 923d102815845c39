use super::{Handle, Observable};
use std::sync::{Mutex, MutexGuard, PoisonError, Weak};

/// Subject with dynamic membership.
///
/// `notify` works on a snapshot of the handle list and releases the lock before
/// calling any observer, so an observer may attach or detach (itself or others)
/// from inside `update`. Such changes apply from the next `notify`.
pub struct Subject<V> {
    observers: Mutex<Vec<Handle<V>>>,
}

impl<V> Default for Subject<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Subject<V> {
    pub fn new() -> Self {
        Self {
            observers: Mutex::new(Vec::new()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Handle<V>>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Calls `update` on every live observer in attach order.
    /// Handles whose observer has been dropped are pruned.
    pub fn notify(&self, value: &V) {
        let snapshot = {
            let mut observers = self.guard();
            let before = observers.len();
            observers.retain(|it| it.strong_count() > 0);
            if observers.len() != before {
                tracing::trace!("Pruned {} dropped observer(s)", before - observers.len());
            }
            observers.clone()
        };
        tracing::trace!("Notifying {} observer(s)", snapshot.len());
        for observer in snapshot.iter().filter_map(Weak::upgrade) {
            observer.update(value);
        }
    }
}

impl<V> Observable<V> for Subject<V> {
    fn attach(&self, observer: Handle<V>) {
        let mut observers = self.guard();
        observers.push(observer);
        tracing::debug!("Observer attached, {} registered", observers.len());
    }

    fn detach(&self, observer: &Handle<V>) {
        let mut observers = self.guard();
        let before = observers.len();
        observers.retain(|it| !Weak::ptr_eq(it, observer));
        tracing::debug!(
            "Observer detached, removed = {}, remaining = {}",
            before - observers.len(),
            observers.len()
        );
    }
}
