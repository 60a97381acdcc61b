//! # Relationship Classifier
//!
//! Turns traversal results into kinship: siblings, the closest common
//! ancestor, and a single `Kinship` verdict for a pair of people.
//!
//! Everything here is a pure read over the store.

use std::fmt;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::*;
use crate::storage::FamilyStore;
use crate::traversal::{ancestors_of, descendants_of, Depth};

// ============================================================================
// Types
// ============================================================================

/// The nearest ancestor shared by two people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAncestor {
    pub ancestor: PersonId,
    /// Generations from the first person up to `ancestor`.
    pub from_a: usize,
    /// Generations from the second person up to `ancestor`.
    pub from_b: usize,
}

impl CommonAncestor {
    pub fn total_distance(&self) -> usize {
        self.from_a + self.from_b
    }
}

/// How `b` relates to `a`, as returned by [`classify`].
///
/// Variants read from `a`'s side: `ParentOf` means `b` is a parent of `a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kinship {
    /// One of the two people was never recorded.
    Unknown,
    SamePerson,
    /// `b` is a parent of `a`.
    ParentOf,
    /// `b` is a child of `a`.
    ChildOf,
    Sibling,
    /// `b` is an ancestor of `a`; 2 is a grandparent.
    Ancestor { generation: usize },
    /// `b` is a descendant of `a`; 2 is a grandchild.
    Descendant { generation: usize },
    CommonAncestor(CommonAncestor),
    NoRelation,
}

// ============================================================================
// Siblings
// ============================================================================

/// Everyone sharing at least one parent with `id`, excluding `id`.
pub fn siblings_of<S>(store: &S, id: &str) -> HashSet<PersonId>
where
    S: FamilyStore + ?Sized,
{
    let mut siblings: HashSet<PersonId> = store
        .parents_of(id)
        .iter()
        .flat_map(|parent| store.children_of(parent.as_str()))
        .collect();
    siblings.remove(id);
    siblings
}

/// Siblings of `id` in identifier order.
pub fn sorted_siblings<S>(store: &S, id: &str) -> Vec<PersonId>
where
    S: FamilyStore + ?Sized,
{
    let mut v: Vec<PersonId> = siblings_of(store, id).into_iter().collect();
    v.sort();
    v
}

// ============================================================================
// Common ancestor
// ============================================================================

/// The shared ancestor minimizing the summed generation distance from `a`
/// and `b`. Equal sums resolve to the smallest identifier.
pub fn closest_common_ancestor<S>(store: &S, a: &str, b: &str) -> Option<CommonAncestor>
where
    S: FamilyStore + ?Sized,
{
    let ancestors_a = ancestors_of(store, a, Depth::Unbounded);
    let ancestors_b = ancestors_of(store, b, Depth::Unbounded);

    ancestors_a
        .iter()
        .filter_map(|(id, ra)| {
            ancestors_b.get(id).map(|rb| CommonAncestor {
                ancestor: id.clone(),
                from_a: ra.generation,
                from_b: rb.generation,
            })
        })
        .min_by(|x, y| {
            x.total_distance()
                .cmp(&y.total_distance())
                .then_with(|| x.ancestor.cmp(&y.ancestor))
        })
}

// ============================================================================
// Classification
// ============================================================================

/// Classify how `b` relates to `a`. The first matching rule wins:
/// unknown, same person, parent, child, sibling, ancestor, descendant,
/// common ancestor, and finally no relation.
pub fn classify<S>(store: &S, a: &str, b: &str) -> Kinship
where
    S: FamilyStore + ?Sized,
{
    if !store.contains(a) || !store.contains(b) {
        return Kinship::Unknown;
    }
    if a == b {
        return Kinship::SamePerson;
    }
    if store.parents_of(a).contains(b) {
        return Kinship::ParentOf;
    }
    if store.children_of(a).contains(b) {
        return Kinship::ChildOf;
    }
    if siblings_of(store, a).contains(b) {
        return Kinship::Sibling;
    }
    if let Some(reached) = ancestors_of(store, a, Depth::Unbounded).get(b) {
        return Kinship::Ancestor { generation: reached.generation };
    }
    if let Some(&generation) = descendants_of(store, a, Depth::Unbounded).get(b) {
        return Kinship::Descendant { generation };
    }
    match closest_common_ancestor(store, a, b) {
        Some(common) => Kinship::CommonAncestor(common),
        None => Kinship::NoRelation,
    }
}

// ============================================================================
// Labels
// ============================================================================

impl Kinship {
    /// Short label for `b`'s role, with generation 2 named the
    /// conventional way.
    pub fn label(&self) -> &'static str {
        match self {
            Kinship::Unknown => "unknown",
            Kinship::SamePerson => "same person",
            Kinship::ParentOf => "parent",
            Kinship::ChildOf => "child",
            Kinship::Sibling => "sibling",
            Kinship::Ancestor { generation: 2 } => "grandparent",
            Kinship::Ancestor { .. } => "ancestor",
            Kinship::Descendant { generation: 2 } => "grandchild",
            Kinship::Descendant { .. } => "descendant",
            Kinship::CommonAncestor(_) => "common ancestor",
            Kinship::NoRelation => "no relation",
        }
    }

    /// A full sentence describing how `b` relates to `a`.
    pub fn describe(&self, a: &str, b: &str) -> String {
        match self {
            Kinship::Unknown => "One or both people not found".to_string(),
            Kinship::SamePerson => "Same person".to_string(),
            Kinship::ParentOf => format!("{b} is a parent of {a}"),
            Kinship::ChildOf => format!("{b} is a child of {a}"),
            Kinship::Sibling => format!("{a} and {b} are siblings"),
            Kinship::Ancestor { generation: 2 } => format!("{b} is a grandparent of {a}"),
            Kinship::Ancestor { generation } => {
                format!("{b} is an ancestor of {a} ({generation} generations back)")
            }
            Kinship::Descendant { generation: 2 } => format!("{b} is a grandchild of {a}"),
            Kinship::Descendant { generation } => {
                format!("{b} is a descendant of {a} ({generation} generations forward)")
            }
            Kinship::CommonAncestor(c) => format!(
                "{a} and {b} share a common ancestor: {} ({} gens from {a}, {} gens from {b})",
                c.ancestor, c.from_a, c.from_b
            ),
            Kinship::NoRelation => {
                format!("No direct family relationship found between {a} and {b}")
            }
        }
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kinship::Ancestor { generation } | Kinship::Descendant { generation }
                if *generation != 2 =>
            {
                write!(f, "{} ({generation} generations)", self.label())
            }
            Kinship::CommonAncestor(c) => write!(f, "{} ({})", self.label(), c.ancestor),
            _ => f.write_str(self.label()),
        }
    }
}
