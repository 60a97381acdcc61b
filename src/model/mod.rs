//! # Genealogy Model
//!
//! Plain data that crosses every boundary: store ↔ traversal ↔ classifier ↔ user.
//!
//! Design rule: no I/O, no locks, no traversal logic here.

pub mod person;
pub mod path;
pub mod value;
pub mod metadata;

pub use person::{Person, PersonId};
pub use path::LineagePath;
pub use value::Value;
pub use metadata::{Metadata, merge_metadata};
