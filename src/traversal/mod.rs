//! # Traversal Engine
//!
//! Breadth-first ancestor and descendant search over any `FamilyStore`.
//!
//! Both searches share one shape: a FIFO queue seeded with the origin, and a
//! visited set seeded with the origin. A person is finalized the first time
//! it is reached, which under BFS is its shortest hop distance; later routes
//! to the same person are ignored. The visited set also makes the search
//! terminate on a (malformed) cyclic parent graph, and keeps the origin out
//! of its own result.

use std::collections::{BTreeMap, VecDeque};

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::*;
use crate::storage::FamilyStore;

// ============================================================================
// Depth specification
// ============================================================================

/// How many generations a traversal may walk from its origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    /// Walk until the queue drains.
    #[default]
    Unbounded,
    /// Include relatives up to this many generations away, no further.
    UpTo(usize),
}

impl Depth {
    /// Map a UI slider value to a depth; 0 means "no limit".
    pub fn from_slider(value: usize) -> Self {
        if value == 0 { Depth::Unbounded } else { Depth::UpTo(value) }
    }

    /// Whether a person at `distance` may have their own relatives explored.
    fn expands(self, distance: usize) -> bool {
        match self {
            Depth::Unbounded => true,
            Depth::UpTo(max) => distance < max,
        }
    }
}

impl From<Option<usize>> for Depth {
    fn from(v: Option<usize>) -> Self {
        v.map(Depth::UpTo).unwrap_or(Depth::Unbounded)
    }
}

impl From<usize> for Depth {
    fn from(v: usize) -> Self { Depth::UpTo(v) }
}

// ============================================================================
// Results
// ============================================================================

/// An ancestor reached by `ancestors_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reached {
    /// BFS hop distance from the origin.
    pub generation: usize,
    /// Origin -> ... -> this ancestor, inclusive.
    pub path: LineagePath,
}

/// Ancestor id -> (generation, path).
pub type AncestorMap = HashMap<PersonId, Reached>;

/// Descendant id -> generation.
pub type DescendantMap = HashMap<PersonId, usize>;

// ============================================================================
// Ancestors
// ============================================================================

/// All ancestors of `origin` within `depth`, each with the path it was first
/// discovered along. Empty if `origin` is unknown.
pub fn ancestors_of<S>(store: &S, origin: &str, depth: Depth) -> AncestorMap
where
    S: FamilyStore + ?Sized,
{
    let mut results = AncestorMap::new();
    if !store.contains(origin) {
        return results;
    }

    let origin = PersonId::from(origin);
    let mut visited: HashSet<PersonId> = HashSet::new();
    visited.insert(origin.clone());

    let mut queue: VecDeque<(PersonId, usize, LineagePath)> = VecDeque::new();
    queue.push_back((origin.clone(), 0, LineagePath::single(origin.clone())));

    while let Some((current, distance, path)) = queue.pop_front() {
        if !depth.expands(distance) {
            continue;
        }
        // Sorted so paths are reproducible when two parents tie.
        let mut parents: Vec<PersonId> = store.parents_of(current.as_str()).into_iter().collect();
        parents.sort();

        for parent in parents {
            if !visited.insert(parent.clone()) {
                continue;
            }
            let next_path = path.extended(parent.clone());
            let generation = distance + 1;
            results.insert(parent.clone(), Reached { generation, path: next_path.clone() });
            queue.push_back((parent, generation, next_path));
        }
    }

    trace!(origin = %origin, found = results.len(), ?depth, "ancestors_of");
    results
}

/// The path from `origin` up to `ancestor`, if `ancestor` is one.
pub fn ancestor_path<S>(store: &S, origin: &str, ancestor: &str) -> Option<LineagePath>
where
    S: FamilyStore + ?Sized,
{
    ancestors_of(store, origin, Depth::Unbounded)
        .remove(ancestor)
        .map(|reached| reached.path)
}

// ============================================================================
// Descendants
// ============================================================================

/// All descendants of `origin` within `depth`, with generation distance.
/// Empty if `origin` is unknown.
pub fn descendants_of<S>(store: &S, origin: &str, depth: Depth) -> DescendantMap
where
    S: FamilyStore + ?Sized,
{
    let mut results = DescendantMap::new();
    if !store.contains(origin) {
        return results;
    }

    let origin = PersonId::from(origin);
    let mut visited: HashSet<PersonId> = HashSet::new();
    visited.insert(origin.clone());

    let mut queue: VecDeque<(PersonId, usize)> = VecDeque::new();
    queue.push_back((origin.clone(), 0));

    while let Some((current, distance)) = queue.pop_front() {
        if !depth.expands(distance) {
            continue;
        }
        for child in store.children_of(current.as_str()) {
            if !visited.insert(child.clone()) {
                continue;
            }
            results.insert(child.clone(), distance + 1);
            queue.push_back((child, distance + 1));
        }
    }

    trace!(origin = %origin, found = results.len(), ?depth, "descendants_of");
    results
}

// ============================================================================
// Grouping
// ============================================================================

/// Generation -> people at that generation, both in ascending order.
pub fn group_by_generation<I>(reached: I) -> BTreeMap<usize, Vec<PersonId>>
where
    I: IntoIterator<Item = (PersonId, usize)>,
{
    let mut groups: BTreeMap<usize, Vec<PersonId>> = BTreeMap::new();
    for (id, generation) in reached {
        groups.entry(generation).or_default().push(id);
    }
    for ids in groups.values_mut() {
        ids.sort();
    }
    groups
}

/// Drop the paths from an ancestor map, keeping generations only.
pub fn generations(ancestors: &AncestorMap) -> impl Iterator<Item = (PersonId, usize)> + '_ {
    ancestors.iter().map(|(id, r)| (id.clone(), r.generation))
}
