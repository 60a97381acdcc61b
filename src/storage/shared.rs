//! Shared family store for concurrent hosts.
//!
//! Wraps a `MemoryStore` in `Arc<RwLock<_>>`. The intended discipline is
//! load once under the write lock, then read from any number of threads.
//! Every `FamilyStore` method takes the read lock for one lookup only, so a
//! traversal running while a loader writes may observe a half-loaded graph.

use std::sync::Arc;

use hashbrown::HashSet;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::model::*;
use super::{FamilyStore, MemoryStore};

/// Cheaply clonable handle to a lock-protected `MemoryStore`.
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<MemoryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a loading phase with exclusive access.
    pub fn load<R>(&self, f: impl FnOnce(&mut MemoryStore) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Hold the read lock across several queries, e.g. a whole traversal.
    pub fn read(&self) -> RwLockReadGuard<'_, MemoryStore> {
        self.inner.read()
    }

    /// Clone out the current contents.
    pub fn snapshot(&self) -> MemoryStore {
        self.inner.read().clone()
    }
}

impl From<MemoryStore> for SharedStore {
    fn from(store: MemoryStore) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }
}

impl FamilyStore for SharedStore {
    fn contains(&self, id: &str) -> bool {
        self.inner.read().contains(id)
    }

    fn parents_of(&self, id: &str) -> HashSet<PersonId> {
        self.inner.read().parents_of(id)
    }

    fn children_of(&self, id: &str) -> HashSet<PersonId> {
        self.inner.read().children_of(id)
    }

    fn ids(&self) -> HashSet<PersonId> {
        self.inner.read().ids()
    }

    fn person(&self, id: &str) -> Option<Person> {
        self.inner.read().person(id)
    }

    fn len(&self) -> usize {
        self.inner.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_load_then_read_from_threads() {
        let shared = SharedStore::new();
        shared.load(|store| {
            store.link_parent_child("Steffon Baratheon", "Robert Baratheon");
            store.link_parent_child("Steffon Baratheon", "Stannis Baratheon");
            store.link_parent_child("Steffon Baratheon", "Renly Baratheon");
        });

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                thread::spawn(move || reader.children_of("Steffon Baratheon").len())
            })
            .collect();

        for h in handles {
            assert_eq!(h.join().unwrap(), 3);
        }
    }

    #[test]
    fn test_from_memory_store_and_snapshot() {
        let mut store = MemoryStore::new();
        store.link_parent_child("Doran Martell", "Oberyn Martell");
        let shared = SharedStore::from(store.clone());

        assert_eq!(shared.len(), 2);
        assert!(shared.parents_of("Oberyn Martell").contains("Doran Martell"));
        assert_eq!(shared.snapshot(), store);
        assert_eq!(shared.read().relationship_count(), 1);
    }
}
