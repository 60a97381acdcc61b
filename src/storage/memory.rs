//! In-memory family store.
//!
//! This is the reference implementation of `FamilyStore`: one hash map from
//! identifier to `Person`, each person carrying its own parent and child sets.
//!
//! ## Limitations
//!
//! - **Single writer**: mutations take `&mut self`. Load everything first,
//!   then share `&MemoryStore` (or wrap it in a `SharedStore`) for queries.
//! - **No removal**: people and edges are only ever added.
//! - **No validation**: a parent graph with cycles is stored as given.

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::model::*;
use super::FamilyStore;

// ============================================================================
// PersonEntry
// ============================================================================

/// One bulk-load declaration: a person, their parents, and their metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonEntry {
    pub id: PersonId,
    pub parents: Vec<PersonId>,
    pub metadata: Metadata,
}

impl PersonEntry {
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn with_parents(mut self, parents: impl IntoIterator<Item = impl Into<PersonId>>) -> Self {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl<I, P> From<(I, Vec<P>, Metadata)> for PersonEntry
where
    I: Into<PersonId>,
    P: Into<PersonId>,
{
    fn from((id, parents, metadata): (I, Vec<P>, Metadata)) -> Self {
        Self {
            id: id.into(),
            parents: parents.into_iter().map(Into::into).collect(),
            metadata,
        }
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory parent/child graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    people: HashMap<PersonId, Person>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create: the record for `id`, materialized empty if unseen.
    fn ensure(&mut self, id: &PersonId) -> &mut Person {
        self.people
            .entry(id.clone())
            .or_insert_with(|| Person::new(id.clone()))
    }

    fn add_edge(&mut self, parent: &PersonId, child: &PersonId) {
        self.ensure(parent).children.insert(child.clone());
        self.ensure(child).parents.insert(parent.clone());
    }

    /// Record `id`, link it under each of `parents`, and merge `metadata`.
    ///
    /// Parents that were never declared are created empty, so declarations
    /// may reference people before they are themselves declared. Repeating a
    /// call with the same arguments leaves the store unchanged.
    pub fn upsert_person<I, P>(
        &mut self,
        id: impl Into<PersonId>,
        parents: I,
        metadata: Metadata,
    ) -> &Person
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonId>,
    {
        let id = id.into();
        self.ensure(&id);
        for parent in parents {
            let parent = parent.into();
            self.add_edge(&parent, &id);
        }
        let person = self.ensure(&id);
        merge_metadata(&mut person.metadata, metadata);
        person
    }

    /// Add the symmetric edge `parent -> child`, creating either side if needed.
    pub fn link_parent_child(&mut self, parent: impl Into<PersonId>, child: impl Into<PersonId>) {
        let (parent, child) = (parent.into(), child.into());
        self.add_edge(&parent, &child);
    }

    /// Apply an ordered sequence of declarations.
    pub fn bulk_load<E>(&mut self, entries: impl IntoIterator<Item = E>)
    where
        E: Into<PersonEntry>,
    {
        let before = self.people.len();
        let mut declared = 0usize;
        for entry in entries {
            let PersonEntry { id, parents, metadata } = entry.into();
            self.upsert_person(id, parents, metadata);
            declared += 1;
        }
        debug!(
            declared,
            created = self.people.len() - before,
            total = self.people.len(),
            "bulk load complete"
        );
    }

    /// Build a store from declarations.
    pub fn from_entries<E>(entries: impl IntoIterator<Item = E>) -> Self
    where
        E: Into<PersonEntry>,
    {
        let mut store = Self::new();
        store.bulk_load(entries);
        store
    }

    /// Borrow the record for `id` without cloning.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Iterate over every record.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Number of parent -> child edges.
    pub fn relationship_count(&self) -> usize {
        self.people.values().map(|p| p.children.len()).sum()
    }
}

// ============================================================================
// FamilyStore impl
// ============================================================================

impl FamilyStore for MemoryStore {
    fn contains(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    fn parents_of(&self, id: &str) -> HashSet<PersonId> {
        self.people.get(id).map(|p| p.parents.clone()).unwrap_or_default()
    }

    fn children_of(&self, id: &str) -> HashSet<PersonId> {
        self.people.get(id).map(|p| p.children.clone()).unwrap_or_default()
    }

    fn ids(&self) -> HashSet<PersonId> {
        self.people.keys().cloned().collect()
    }

    fn person(&self, id: &str) -> Option<Person> {
        self.people.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.people.len()
    }
}
