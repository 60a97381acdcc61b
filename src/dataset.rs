//! The bundled Westeros family tree.
//!
//! A partial, fictional genealogy of the great houses, declared house by
//! house. Several people are named as parents before their own declaration
//! (Rhaegar Targaryen, Catelyn Tully, Elia Martell), and some are declared
//! twice; the store resolves both.

use crate::model::*;
use crate::storage::{MemoryStore, PersonEntry};

/// `(name, parents)` declarations, grouped by house.
const HOUSES: &[(&str, &[(&str, &[&str])])] = &[
    ("Stark", &[
        ("Brandon the Builder", &[]),
        ("Edwyle Stark", &["Brandon the Builder"]),
        ("Rickard Stark", &["Edwyle Stark"]),
        ("Lyarra Stark", &[]),
        ("Brandon Stark", &["Rickard Stark", "Lyarra Stark"]),
        ("Eddard Stark", &["Rickard Stark", "Lyarra Stark"]),
        ("Lyanna Stark", &["Rickard Stark", "Lyarra Stark"]),
        ("Benjen Stark", &["Rickard Stark", "Lyarra Stark"]),
        ("Catelyn Tully", &[]),
        ("Robb Stark", &["Eddard Stark", "Catelyn Tully"]),
        ("Sansa Stark", &["Eddard Stark", "Catelyn Tully"]),
        ("Arya Stark", &["Eddard Stark", "Catelyn Tully"]),
        ("Bran Stark", &["Eddard Stark", "Catelyn Tully"]),
        ("Rickon Stark", &["Eddard Stark", "Catelyn Tully"]),
        ("Jon Snow", &["Rhaegar Targaryen", "Lyanna Stark"]),
    ]),
    ("Targaryen", &[
        ("Aegon I Targaryen", &[]),
        ("Jaehaerys I Targaryen", &["Aegon I Targaryen"]),
        ("Aegon V Targaryen", &["Jaehaerys I Targaryen"]),
        ("Jaehaerys II Targaryen", &["Aegon V Targaryen"]),
        ("Aerys II Targaryen", &["Jaehaerys II Targaryen"]),
        ("Rhaella Targaryen", &["Jaehaerys II Targaryen"]),
        ("Rhaegar Targaryen", &["Aerys II Targaryen", "Rhaella Targaryen"]),
        ("Elia Martell", &[]),
        ("Rhaenys Targaryen", &["Rhaegar Targaryen", "Elia Martell"]),
        ("Aegon (young) Targaryen", &["Rhaegar Targaryen", "Elia Martell"]),
        ("Viserys Targaryen", &["Aerys II Targaryen", "Rhaella Targaryen"]),
        ("Daenerys Targaryen", &["Aerys II Targaryen", "Rhaella Targaryen"]),
    ]),
    ("Lannister", &[
        ("Tytos Lannister", &[]),
        ("Joanna Lannister", &[]),
        ("Tywin Lannister", &["Tytos Lannister"]),
        ("Jaime Lannister", &["Tywin Lannister", "Joanna Lannister"]),
        ("Cersei Lannister", &["Tywin Lannister", "Joanna Lannister"]),
        ("Tyrion Lannister", &["Tywin Lannister", "Joanna Lannister"]),
    ]),
    ("Baratheon", &[
        ("Orys Baratheon", &[]),
        ("Steffon Baratheon", &[]),
        ("Robert Baratheon", &["Steffon Baratheon"]),
        ("Stannis Baratheon", &["Steffon Baratheon"]),
        ("Renly Baratheon", &["Steffon Baratheon"]),
    ]),
    ("Tully", &[
        ("Hoster Tully", &[]),
        ("Minisa Whent", &[]),
        ("Catelyn Tully", &["Hoster Tully", "Minisa Whent"]),
        ("Lysa Tully", &["Hoster Tully", "Minisa Whent"]),
        ("Edmure Tully", &["Hoster Tully", "Minisa Whent"]),
        ("Robin Arryn", &["Lysa Tully"]),
    ]),
    ("Martell", &[
        ("Doran Martell", &[]),
        ("Oberyn Martell", &["Doran Martell"]),
        ("Elia Martell", &["Doran Martell"]),
    ]),
    ("Tyrell", &[
        ("Mace Tyrell", &[]),
        ("Olenna Tyrell", &[]),
        ("Margaery Tyrell", &["Mace Tyrell", "Olenna Tyrell"]),
        ("Loras Tyrell", &["Mace Tyrell", "Olenna Tyrell"]),
    ]),
    ("Greyjoy", &[
        ("Balon Greyjoy", &[]),
        ("Theon Greyjoy", &["Balon Greyjoy"]),
        ("Asha Greyjoy", &["Balon Greyjoy"]),
    ]),
    ("Arryn", &[
        ("Jon Arryn", &[]),
        ("Robert Arryn", &["Jon Arryn", "Lysa Tully"]),
    ]),
    ("Frey", &[
        ("Walder Frey", &[]),
        ("Stevron Frey", &["Walder Frey"]),
        ("Roslin Frey", &["Walder Frey"]),
    ]),
];

/// Names of the houses in declaration order.
pub fn houses() -> impl Iterator<Item = &'static str> {
    HOUSES.iter().map(|(house, _)| *house)
}

/// The declarations as bulk-load entries, each tagged with its section's
/// `house`. A person declared under two houses ends with the later one.
pub fn westeros_entries() -> Vec<PersonEntry> {
    HOUSES
        .iter()
        .flat_map(|(house, people)| {
            people.iter().map(move |(name, parents)| {
                PersonEntry::new(*name)
                    .with_parents(parents.iter().copied())
                    .with_metadata("house", *house)
            })
        })
        .collect()
}

/// A store loaded with the Westeros family tree.
pub fn westeros() -> MemoryStore {
    MemoryStore::from_entries(westeros_entries())
}
