//! # kinship-rs — Genealogical Graph Queries
//!
//! A parent/child graph of people with breadth-first lineage queries and a
//! relationship classifier on top.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `FamilyStore` is the contract between queries and storage
//! 2. **Plain data out**: every query returns ids, maps, paths or a `Kinship`
//! 3. **Unknown is empty**: asking about someone never recorded is not an error
//! 4. **Store passed explicitly**: no global registry; traversal functions
//!    take the store they read
//!
//! ## Quick Start
//!
//! ```rust
//! use kinship_rs::{Kinship, Lineage};
//!
//! let lineage = Lineage::westeros();
//!
//! let verdict = lineage.relationship("Jon Snow", "Aerys II Targaryen");
//! assert_eq!(verdict, Kinship::Ancestor { generation: 2 });
//! assert_eq!(
//!     verdict.describe("Jon Snow", "Aerys II Targaryen"),
//!     "Aerys II Targaryen is a grandparent of Jon Snow",
//! );
//! ```
//!
//! ## Stores
//!
//! | Store | Description |
//! |-------|-------------|
//! | `MemoryStore` | Owned adjacency maps, loaded by a single writer |
//! | `SharedStore` | `MemoryStore` behind a `parking_lot` reader/writer lock |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod traversal;
pub mod kinship;
pub mod export;
pub mod dataset;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Person, PersonId, LineagePath, Value, Metadata};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{FamilyStore, MemoryStore, SharedStore, PersonEntry};

// ============================================================================
// Re-exports: Queries
// ============================================================================

pub use traversal::{Depth, Reached, AncestorMap, DescendantMap};
pub use kinship::{Kinship, CommonAncestor};
pub use config::{LineageConfig, StoreSource};

use std::collections::BTreeMap;

use hashbrown::HashSet;
use tracing::debug;

// ============================================================================
// Top-level Lineage handle
// ============================================================================

/// The primary entry point. A `Lineage` wraps a store and answers
/// genealogy queries against it.
pub struct Lineage<S: FamilyStore = MemoryStore> {
    store: S,
    default_depth: Depth,
}

impl<S: FamilyStore> Lineage<S> {
    /// Create a Lineage over the given store.
    pub fn with_store(store: S) -> Self {
        Self { store, default_depth: Depth::Unbounded }
    }

    /// Set the cutoff used by `ancestors` and `descendants`.
    pub fn with_default_depth(mut self, depth: impl Into<Depth>) -> Self {
        self.default_depth = depth.into();
        self
    }

    pub fn default_depth(&self) -> Depth {
        self.default_depth
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------------------------------
    // Direct adjacency
    // ------------------------------------------------------------------------

    pub fn contains(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    /// Parents of `id` in identifier order.
    pub fn parents(&self, id: &str) -> Vec<PersonId> {
        sorted(self.store.parents_of(id))
    }

    /// Children of `id` in identifier order.
    pub fn children(&self, id: &str) -> Vec<PersonId> {
        sorted(self.store.children_of(id))
    }

    /// Siblings of `id` in identifier order.
    pub fn siblings(&self, id: &str) -> Vec<PersonId> {
        kinship::sorted_siblings(&self.store, id)
    }

    /// Every recorded person, in identifier order.
    pub fn names(&self) -> Vec<PersonId> {
        self.store.sorted_ids()
    }

    // ------------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------------

    /// Ancestors within the default depth.
    pub fn ancestors(&self, id: &str) -> AncestorMap {
        traversal::ancestors_of(&self.store, id, self.default_depth)
    }

    pub fn ancestors_within(&self, id: &str, depth: impl Into<Depth>) -> AncestorMap {
        traversal::ancestors_of(&self.store, id, depth.into())
    }

    /// Descendants within the default depth.
    pub fn descendants(&self, id: &str) -> DescendantMap {
        traversal::descendants_of(&self.store, id, self.default_depth)
    }

    pub fn descendants_within(&self, id: &str, depth: impl Into<Depth>) -> DescendantMap {
        traversal::descendants_of(&self.store, id, depth.into())
    }

    pub fn ancestor_path(&self, id: &str, ancestor: &str) -> Option<LineagePath> {
        traversal::ancestor_path(&self.store, id, ancestor)
    }

    /// Ancestors within `depth`, grouped by generation.
    pub fn ancestors_by_generation(
        &self,
        id: &str,
        depth: impl Into<Depth>,
    ) -> BTreeMap<usize, Vec<PersonId>> {
        let found = self.ancestors_within(id, depth);
        traversal::group_by_generation(traversal::generations(&found))
    }

    /// Descendants within `depth`, grouped by generation.
    pub fn descendants_by_generation(
        &self,
        id: &str,
        depth: impl Into<Depth>,
    ) -> BTreeMap<usize, Vec<PersonId>> {
        traversal::group_by_generation(self.descendants_within(id, depth))
    }

    // ------------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------------

    pub fn common_ancestor(&self, a: &str, b: &str) -> Option<CommonAncestor> {
        kinship::closest_common_ancestor(&self.store, a, b)
    }

    /// How `b` relates to `a`.
    pub fn relationship(&self, a: &str, b: &str) -> Kinship {
        kinship::classify(&self.store, a, b)
    }

    /// How `b` relates to `a`, as a sentence.
    pub fn describe(&self, a: &str, b: &str) -> String {
        self.relationship(a, b).describe(a, b)
    }
}

impl Lineage<MemoryStore> {
    /// Open a Lineage as described by `config`.
    pub fn open(config: &LineageConfig) -> Result<Self> {
        let store = match &config.source {
            StoreSource::Memory => MemoryStore::new(),
            StoreSource::Snapshot { path } => export::load_snapshot(path)?,
            StoreSource::Westeros => dataset::westeros(),
        };
        debug!(source = ?config.source, people = store.len(), "lineage opened");
        Ok(Self::with_store(store).with_default_depth(config.default_depth))
    }

    /// Empty in-memory lineage.
    pub fn open_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// The bundled Westeros family tree.
    pub fn westeros() -> Self {
        Self::with_store(dataset::westeros())
    }

    /// Mutable access for loading. Queries see changes immediately.
    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }

    /// Save the current store as a JSON snapshot.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        export::save_snapshot(&self.store, path)
    }
}

impl From<MemoryStore> for Lineage<MemoryStore> {
    fn from(store: MemoryStore) -> Self {
        Self::with_store(store)
    }
}

fn sorted(set: HashSet<PersonId>) -> Vec<PersonId> {
    let mut v: Vec<PersonId> = set.into_iter().collect();
    v.sort();
    v
}

// ============================================================================
// Error Types
// ============================================================================

/// Failures from loading or saving snapshots. Queries never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
