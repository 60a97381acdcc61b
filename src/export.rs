//! Snapshot export/import — the JSON exchange format for a family store.
//!
//! A snapshot is one JSON object keyed by person:
//!
//! ```text
//! {
//!   "Jon Snow": {
//!     "parents": ["Lyanna Stark", "Rhaegar Targaryen"],
//!     "children": [],
//!     "meta": {"house": "Stark"}
//!   },
//!   ...
//! }
//! ```
//!
//! Export sorts people and relation lists, so the same store always writes
//! the same bytes. Import accepts `metadata` as an alias for `meta`, treats
//! missing keys as empty, and links both the `parents` and `children` lists,
//! so a snapshot that records an edge on one side only still loads
//! symmetrically.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::*;
use crate::storage::{FamilyStore, MemoryStore};
use crate::{Error, Result};

/// One person's entry in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    pub parents: Vec<PersonId>,
    #[serde(default)]
    pub children: Vec<PersonId>,
    #[serde(default, rename = "meta", alias = "metadata")]
    pub metadata: Metadata,
}

/// Person id -> record, in identifier order.
pub type Snapshot = BTreeMap<PersonId, PersonRecord>;

/// Capture the full contents of a store.
pub fn export_snapshot<S>(store: &S) -> Snapshot
where
    S: FamilyStore + ?Sized,
{
    store
        .sorted_ids()
        .into_iter()
        .filter_map(|id| {
            let person = store.person(id.as_str())?;
            let record = PersonRecord {
                parents: person.sorted_parents(),
                children: person.sorted_children(),
                metadata: person.metadata,
            };
            Some((id, record))
        })
        .collect()
}

/// Rebuild a store from a snapshot.
pub fn import_snapshot(snapshot: Snapshot) -> MemoryStore {
    let mut store = MemoryStore::new();
    for (id, record) in snapshot {
        let PersonRecord { parents, children, metadata } = record;
        for child in children {
            store.link_parent_child(id.clone(), child);
        }
        store.upsert_person(id, parents, metadata);
    }
    debug!(
        people = store.len(),
        relationships = store.relationship_count(),
        "snapshot imported"
    );
    store
}

/// Write a store as pretty-printed snapshot JSON.
pub fn write_snapshot<S>(store: &S, writer: &mut dyn Write) -> Result<()>
where
    S: FamilyStore + ?Sized,
{
    let snapshot = export_snapshot(store);
    serde_json::to_writer_pretty(&mut *writer, &snapshot)?;
    writeln!(writer)?;
    Ok(())
}

/// Parse snapshot JSON into a new store.
pub fn read_snapshot(reader: impl Read) -> Result<MemoryStore> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    if !value.is_object() {
        return Err(Error::InvalidSnapshot(format!(
            "expected a JSON object keyed by person, got {}",
            json_kind(&value)
        )));
    }
    let snapshot: Snapshot = serde_json::from_value(value)?;
    Ok(import_snapshot(snapshot))
}

/// Save a store to `path`, replacing any existing file.
pub fn save_snapshot<S>(store: &S, path: impl AsRef<Path>) -> Result<()>
where
    S: FamilyStore + ?Sized,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_snapshot(store, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), people = store.len(), "snapshot saved");
    Ok(())
}

/// Load a store from the snapshot file at `path`.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<MemoryStore> {
    let path = path.as_ref();
    let store = read_snapshot(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), people = store.len(), "snapshot loaded");
    Ok(store)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_defaults_and_alias() {
        let rec: PersonRecord = serde_json::from_str(r#"{"metadata": {"house": "Frey"}}"#).unwrap();
        assert!(rec.parents.is_empty());
        assert!(rec.children.is_empty());
        assert_eq!(rec.metadata["house"], Value::from("Frey"));
    }

    #[test]
    fn test_record_writes_meta_key() {
        let rec = PersonRecord::default();
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json, serde_json::json!({"parents": [], "children": [], "meta": {}}));
    }

    #[test]
    fn test_one_sided_snapshot_loads_symmetric() {
        let json = r#"{
            "Walder Frey": {"children": ["Roslin Frey"]},
            "Stevron Frey": {"parents": ["Walder Frey"]}
        }"#;
        let store = read_snapshot(json.as_bytes()).unwrap();

        assert_eq!(store.len(), 3);
        assert!(store.parents_of("Roslin Frey").contains("Walder Frey"));
        assert!(store.children_of("Walder Frey").contains("Stevron Frey"));
        assert_eq!(store.relationship_count(), 2);
    }

    #[test]
    fn test_rejects_non_object() {
        let err = read_snapshot("[1, 2]".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = read_snapshot("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_export_is_sorted() {
        let mut store = MemoryStore::new();
        store.upsert_person("Margaery Tyrell", ["Olenna Tyrell", "Mace Tyrell"], Metadata::new());
        let snap = export_snapshot(&store);

        let keys: Vec<&str> = snap.keys().map(PersonId::as_str).collect();
        assert_eq!(keys, vec!["Mace Tyrell", "Margaery Tyrell", "Olenna Tyrell"]);
        assert_eq!(
            snap[&PersonId::from("Margaery Tyrell")].parents,
            vec![PersonId::from("Mace Tyrell"), PersonId::from("Olenna Tyrell")]
        );
    }
}
