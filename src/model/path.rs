//! LineagePath — the chain of people from a query origin to a reached relative.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PersonId;

/// A path origin -> parent -> grandparent ... (or the child direction).
///
/// Always holds at least the origin. Consecutive entries are joined by a
/// parent/child edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineagePath(SmallVec<[PersonId; 4]>);

impl LineagePath {
    pub fn single(origin: impl Into<PersonId>) -> Self {
        let mut hops = SmallVec::new();
        hops.push(origin.into());
        Self(hops)
    }

    /// Number of hops (one less than the number of people).
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> &PersonId {
        self.0.first().expect("LineagePath always has at least one person")
    }

    pub fn end(&self) -> &PersonId {
        self.0.last().expect("LineagePath always has at least one person")
    }

    pub fn people(&self) -> &[PersonId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonId> {
        self.0.iter()
    }

    /// Copy of this path extended by one hop.
    pub fn extended(&self, next: PersonId) -> Self {
        let mut hops = self.0.clone();
        hops.push(next);
        Self(hops)
    }
}

impl fmt::Display for LineagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 { write!(f, " -> ")?; }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LineagePath {
    type Item = &'a PersonId;
    type IntoIter = std::slice::Iter<'a, PersonId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
