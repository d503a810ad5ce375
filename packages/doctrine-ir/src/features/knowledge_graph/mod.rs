//! Knowledge graph feature
//!
//! Typed multigraph of entities and their relations, held in a petgraph
//! `DiGraph` and mirrored by a durable `doctrine_storage::GraphBackend`.
//!
//! ```text
//! Vec<Entity>        ─▶ entity_node ─────────────┐
//! Vec<RelationTriple> ─▶ endpoint nodes + edges ──┤
//!                                                 ▼
//!                        backend write ─▶ in-memory graph
//! ```

pub mod application;
pub mod domain;

pub use application::{GraphStore, DEFAULT_MAX_PATH_LENGTH};
pub use domain::{GraphSnapshot, GraphStatistics, GENERIC_ENTITY_KIND};
