//! Lineage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::traversal::Depth;

/// Where a `Lineage` gets its people from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreSource {
    /// Start empty.
    #[default]
    Memory,
    /// Load a JSON snapshot (see `export`).
    Snapshot { path: PathBuf },
    /// The bundled Westeros family tree.
    Westeros,
}

/// Settings for opening a `Lineage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    pub source: StoreSource,
    /// Cutoff applied by `Lineage::ancestors` / `Lineage::descendants`.
    pub default_depth: Depth,
}

impl LineageConfig {
    pub fn with_source(mut self, source: StoreSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_default_depth(mut self, depth: impl Into<Depth>) -> Self {
        self.default_depth = depth.into();
        self
    }
}
