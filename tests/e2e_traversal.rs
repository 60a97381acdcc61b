//! End-to-end tests for ancestor/descendant traversal.
//!
//! Covers the three-generation scenario, depth cutoffs, path shape, and
//! lineages in the bundled Westeros tree.

use kinship_rs::{Depth, Lineage, LineagePath, MemoryStore, Metadata, PersonId, Reached};
use kinship_rs::traversal::{ancestors_of, ancestor_path, descendants_of};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: G1 -> P1; P1, P2 -> C.
// ============================================================================

fn three_generations() -> Lineage {
    let mut store = MemoryStore::new();
    store.bulk_load(vec![
        ("G1", vec![], Metadata::new()),
        ("P1", vec!["G1"], Metadata::new()),
        ("P2", vec![], Metadata::new()),
        ("C", vec!["P1", "P2"], Metadata::new()),
    ]);
    Lineage::from(store)
}

fn names(ids: &[PersonId]) -> Vec<&str> {
    ids.iter().map(PersonId::as_str).collect()
}

fn path(ids: &[&str]) -> LineagePath {
    ids[1..]
        .iter()
        .fold(LineagePath::single(ids[0]), |p, id| p.extended((*id).into()))
}

// ============================================================================
// 1. Ancestors with generation and path
// ============================================================================

#[test]
fn test_ancestors_of_child() {
    let lineage = three_generations();
    let anc = lineage.ancestors("C");

    assert_eq!(anc.len(), 3);
    assert_eq!(anc["P1"], Reached { generation: 1, path: path(&["C", "P1"]) });
    assert_eq!(anc["P2"], Reached { generation: 1, path: path(&["C", "P2"]) });
    assert_eq!(anc["G1"], Reached { generation: 2, path: path(&["C", "P1", "G1"]) });
}

#[test]
fn test_root_has_no_ancestors() {
    let lineage = three_generations();
    assert!(lineage.ancestors("G1").is_empty());
    assert!(lineage.ancestors("P2").is_empty());
}

// ============================================================================
// 2. Descendants
// ============================================================================

#[test]
fn test_descendants_of_root() {
    let lineage = three_generations();
    let desc = lineage.descendants("G1");

    assert_eq!(desc.len(), 2);
    assert_eq!(desc["P1"], 1);
    assert_eq!(desc["C"], 2);
    assert!(!desc.contains_key("P2"));
}

// ============================================================================
// 3. Depth cutoffs
// ============================================================================

#[test]
fn test_default_depth_applies() {
    let lineage = three_generations().with_default_depth(Depth::UpTo(1));
    assert_eq!(lineage.default_depth(), Depth::UpTo(1));
    assert_eq!(lineage.ancestors("C").len(), 2);
    assert_eq!(lineage.descendants("G1").len(), 1);
}

#[test]
fn test_depth_zero_always_empty() {
    let lineage = three_generations();
    for name in lineage.names() {
        assert!(lineage.ancestors_within(name.as_str(), Depth::UpTo(0)).is_empty());
        assert!(lineage.descendants_within(name.as_str(), Depth::UpTo(0)).is_empty());
    }
}

#[test]
fn test_bounded_is_subset_of_unbounded() {
    let lineage = Lineage::westeros();
    let full = lineage.ancestors("Jon Snow");
    for k in 1..=6 {
        let bounded = lineage.ancestors_within("Jon Snow", Depth::UpTo(k));
        for (id, reached) in &bounded {
            assert!(reached.generation <= k);
            assert_eq!(&full[id], reached);
        }
        let expected = full.values().filter(|r| r.generation <= k).count();
        assert_eq!(bounded.len(), expected);
    }
}

// ============================================================================
// 4. Westeros lineages
// ============================================================================

#[test]
fn test_jon_snow_to_aegon_v() {
    let lineage = Lineage::westeros();
    let p = lineage.ancestor_path("Jon Snow", "Aegon V Targaryen").unwrap();

    assert_eq!(
        p,
        path(&[
            "Jon Snow",
            "Rhaegar Targaryen",
            "Aerys II Targaryen",
            "Jaehaerys II Targaryen",
            "Aegon V Targaryen",
        ])
    );
    assert_eq!(p.len(), 4);
    assert_eq!(lineage.ancestors("Jon Snow")["Aegon V Targaryen"].generation, 4);
}

#[test]
fn test_jon_snow_ancestor_count() {
    let lineage = Lineage::westeros();
    let anc = lineage.ancestors("Jon Snow");
    // Targaryen line to Aegon I, Stark line to Brandon the Builder.
    assert_eq!(anc.len(), 12);
    assert_eq!(anc["Aegon I Targaryen"].generation, 6);
    assert_eq!(anc["Brandon the Builder"].generation, 4);
}

#[test]
fn test_aerys_descendants_within_three() {
    let lineage = Lineage::westeros();
    let groups = lineage.descendants_by_generation("Aerys II Targaryen", Depth::UpTo(3));

    assert_eq!(groups.len(), 2);
    assert_eq!(names(&groups[&1]), vec!["Daenerys Targaryen", "Rhaegar Targaryen", "Viserys Targaryen"]);
    assert_eq!(names(&groups[&2]), vec!["Aegon (young) Targaryen", "Jon Snow", "Rhaenys Targaryen"]);
}

#[test]
fn test_brandon_the_builder_descendants() {
    let lineage = Lineage::westeros();
    let desc = lineage.descendants("Brandon the Builder");
    assert_eq!(desc.len(), 12);
    assert_eq!(desc["Jon Snow"], 4);
    assert_eq!(desc["Arya Stark"], 4);
}

#[test]
fn test_ancestors_by_generation_for_sansa() {
    let lineage = Lineage::westeros();
    let groups = lineage.ancestors_by_generation("Sansa Stark", Depth::UpTo(2));

    assert_eq!(groups[&1], vec![PersonId::from("Catelyn Tully"), PersonId::from("Eddard Stark")]);
    assert_eq!(groups[&2].len(), 4);
    assert!(!groups.contains_key(&3));
}

// ============================================================================
// 5. Unknown origins and free functions
// ============================================================================

#[test]
fn test_unknown_person_queries_are_empty() {
    let lineage = Lineage::westeros();
    assert!(lineage.ancestors("Hodor").is_empty());
    assert!(lineage.descendants("Hodor").is_empty());
    assert!(lineage.parents("Hodor").is_empty());
    assert!(lineage.children("Hodor").is_empty());
    assert!(lineage.siblings("Hodor").is_empty());
    assert_eq!(lineage.ancestor_path("Hodor", "Rickard Stark"), None);
}

#[test]
fn test_free_functions_take_store_explicitly() {
    let lineage = Lineage::westeros();
    let store = lineage.store();

    assert_eq!(ancestors_of(store, "Robb Stark", Depth::Unbounded).len(), 8);
    assert_eq!(descendants_of(store, "Hoster Tully", Depth::Unbounded).len(), 10);
    assert_eq!(
        ancestor_path(store, "Robin Arryn", "Hoster Tully"),
        Some(path(&["Robin Arryn", "Lysa Tully", "Hoster Tully"]))
    );
}
