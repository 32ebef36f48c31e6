//! Shared store handle
//!
//! The store has a single owner, the host's event loop. `StoreHandle` is how
//! that owner lends the store to its collaborators without a global: clones
//! share one store, and each closure passed to `read`/`write` runs with the
//! lock held, so an operation can never interleave with another.

use crate::store::{ItemStore, Snapshot};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable, lock-guarded handle to one [`ItemStore`]
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<ItemStore>>,
}

impl StoreHandle {
    pub fn new(store: ItemStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run a read-only query against the store
    pub fn read<R>(&self, f: impl FnOnce(&ItemStore) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run one or more operations as a single indivisible step
    pub fn write<R>(&self, f: impl FnOnce(&mut ItemStore) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Current snapshot; safe to keep after the lock is released
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.read().snapshot()
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new(ItemStore::new())
    }
}
