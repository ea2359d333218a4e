//! Clone-able shared handle to a [`Store`].

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::AppState;
use crate::storage::Storage;
use crate::store::Store;

/// `Arc<RwLock<Store>>` wrapper for UI layers that need many readers and
/// serialized writers. The engine itself is single-threaded; this only
/// guards the handoff between a render loop and an event loop.
pub struct SharedStore<S: Storage> {
    inner: Arc<RwLock<Store<S>>>,
}

impl<S: Storage> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Storage> SharedStore<S> {
    pub fn new(store: Store<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Snapshot of the current state tree.
    pub fn state(&self) -> AppState {
        self.inner.read().state().clone()
    }

    /// Read access without cloning the whole tree.
    pub fn with<T>(&self, f: impl FnOnce(&Store<S>) -> T) -> T {
        f(&self.inner.read())
    }

    /// Exclusive access for dispatching actions.
    pub fn update<T>(&self, f: impl FnOnce(&mut Store<S>) -> T) -> T {
        f(&mut self.inner.write())
    }
}
