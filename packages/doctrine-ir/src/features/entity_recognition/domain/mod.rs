//! Entity recognition domain models

pub mod entity;
pub mod overlap;
pub mod relation;

pub use entity::{Entity, EntityKind};
pub use overlap::resolve_overlaps;
pub use relation::{RelationKind, RelationTriple};
