//! Person in the family graph.

use std::borrow::Borrow;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{Metadata, Value};

/// Unique person identifier (the person's name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(v: &str) -> Self { Self(v.to_owned()) }
}

impl From<String> for PersonId {
    fn from(v: String) -> Self { Self(v) }
}

impl From<&String> for PersonId {
    fn from(v: &String) -> Self { Self(v.clone()) }
}

impl From<&PersonId> for PersonId {
    fn from(v: &PersonId) -> Self { v.clone() }
}

/// A person and their direct parent/child adjacency.
///
/// The store keeps `parents` and `children` symmetric across records;
/// a `Person` on its own does not enforce that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub parents: HashSet<PersonId>,
    pub children: HashSet<PersonId>,
    pub metadata: Metadata,
}

impl Person {
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            parents: HashSet::new(),
            children: HashSet::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn has_parent(&self, id: &str) -> bool {
        self.parents.contains(id)
    }

    pub fn has_child(&self, id: &str) -> bool {
        self.children.contains(id)
    }

    /// Parents in identifier order.
    pub fn sorted_parents(&self) -> Vec<PersonId> {
        let mut v: Vec<PersonId> = self.parents.iter().cloned().collect();
        v.sort();
        v
    }

    /// Children in identifier order.
    pub fn sorted_children(&self) -> Vec<PersonId> {
        let mut v: Vec<PersonId> = self.children.iter().cloned().collect();
        v.sort();
        v
    }
}
