use std::sync::{Arc, Weak};

mod fixed_subject;
mod subject;

pub use fixed_subject::FixedSubject;
pub use subject::Subject;

/// Non-owning handle to an observer. The caller keeps the `Arc`.
pub type Handle<V> = Weak<dyn Observer<V> + 'static>;

pub trait Observer<V>: Send + Sync {
    fn update(&self, value: &V);
}

/// A subject whose observer list can change after construction.
pub trait Observable<V> {
    /// Appends `observer` to the end of the list. Duplicates are kept.
    fn attach(&self, observer: Handle<V>);
    /// Removes every entry pointing at `observer`. Absent handles are ignored.
    fn detach(&self, observer: &Handle<V>);
}

/// Downgrades a shared observer into a handle for a subject.
pub fn handle<V, O>(observer: &Arc<O>) -> Handle<V>
where
    O: Observer<V> + 'static,
{
    let observer: Arc<dyn Observer<V>> = observer.clone();
    Arc::downgrade(&observer)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Observer;
    use std::sync::{Arc, Mutex};

    pub(crate) use super::handle;

    /// Records every value it receives, tagged with its name, into a shared log.
    pub(crate) struct Recorder<V> {
        pub(crate) name: &'static str,
        pub(crate) log: Arc<Mutex<Vec<(&'static str, V)>>>,
    }

    impl<V: Clone + Send + Sync> Recorder<V> {
        pub(crate) fn new(name: &'static str, log: &Arc<Mutex<Vec<(&'static str, V)>>>) -> Arc<Self> {
            Arc::new(Self {
                name,
                log: log.clone(),
            })
        }
    }

    impl<V: Clone + Send + Sync> Observer<V> for Recorder<V> {
        fn update(&self, value: &V) {
            self.log.lock().unwrap().push((self.name, value.clone()));
        }
    }

    pub(crate) fn log<V>() -> Arc<Mutex<Vec<(&'static str, V)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    pub(crate) fn names<V>(log: &Arc<Mutex<Vec<(&'static str, V)>>>) -> Vec<&'static str> {
        log.lock().unwrap().iter().map(|(name, _)| *name).collect()
    }
}
