//! # Family Store Trait
//!
//! The read contract between the traversal/classifier layers and any store.
//! Traversal and classification only ever go through these methods.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | Owned adjacency maps, single writer |
//! | `SharedStore` | `shared` | `MemoryStore` behind a reader/writer lock |
//!
//! Unknown identifiers are never an error: lookups on a person that was
//! never recorded return empty sets / `None`.

pub mod memory;
pub mod shared;

use hashbrown::HashSet;

use crate::model::*;

pub use memory::{MemoryStore, PersonEntry};
pub use shared::SharedStore;

/// Read access to a parent/child graph of people.
pub trait FamilyStore {
    /// Whether `id` has been recorded (explicitly or as a referenced parent).
    fn contains(&self, id: &str) -> bool;

    /// Direct parents of `id`; empty if unknown.
    fn parents_of(&self, id: &str) -> HashSet<PersonId>;

    /// Direct children of `id`; empty if unknown.
    fn children_of(&self, id: &str) -> HashSet<PersonId>;

    /// Every recorded identifier.
    fn ids(&self) -> HashSet<PersonId>;

    /// Copy of the full record for `id`.
    fn person(&self, id: &str) -> Option<Person>;

    /// Number of recorded people.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All identifiers in sorted order.
    fn sorted_ids(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.ids().into_iter().collect();
        ids.sort();
        ids
    }
}

