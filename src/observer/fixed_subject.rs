use super::Handle;
use std::sync::Weak;

/// Subject whose observers are injected once at construction.
pub struct FixedSubject<V> {
    observers: Vec<Handle<V>>,
}

impl<V> FixedSubject<V> {
    /// Stores `observers` verbatim: order is kept and duplicates are not removed.
    pub fn new(observers: Vec<Handle<V>>) -> Self {
        Self { observers }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&self, value: &V) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            observer.update(value);
        }
    }
}

impl<V> FromIterator<Handle<V>> for FixedSubject<V> {
    fn from_iter<T: IntoIterator<Item = Handle<V>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
