//! Entity recognition feature
//!
//! ```text
//! text ─▶ LinguisticAnnotator ─▶ tokens
//!   │                              │
//!   ├──────────────┬───────────────┤
//!   ▼              ▼               ▼
//! Numeric      Acronym          Lexical      (TokenClassifier set)
//!   └──────────────┴───────────────┘
//!                  ▼
//!          resolve_overlaps ─▶ Vec<Entity>
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::EntityAnnotator;
pub use domain::{resolve_overlaps, Entity, EntityKind, RelationKind, RelationTriple};
pub use infrastructure::TokenClassifier;
