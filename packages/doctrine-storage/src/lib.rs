//! Doctrine graph storage
//!
//! Durable persistence for the knowledge graph built from doctrine text.
//!
//! ## Core Principles
//!
//! 1. **Nodes are unique by id**: a second insert of the same id is a constraint error
//! 2. **Edges form a multigraph**: parallel edges are distinct rows
//! 3. **Properties are fail-soft**: a malformed blob loads as an empty map
//!
//! ## Usage
//!
//! ```rust,ignore
//! use doctrine_storage::{Edge, GraphBackend, Node, SqliteGraphBackend};
//!
//! let mut backend = SqliteGraphBackend::open("data/processed/ems_knowledge.db")?;
//! backend.insert_node(&Node::new("entity_jfacc", "JFACC", "ENTITY"))?;
//! backend.insert_node(&Node::new("entity_radar", "radar", "ENTITY"))?;
//! backend.insert_edge(&Edge::new("entity_jfacc", "entity_radar", "CONTROLS"))?;
//!
//! let nodes = backend.load_nodes()?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{
    decode_properties, encode_properties, BackendStats, Edge, GraphBackend, Node, NodeId,
    PropertyMap, Value,
};

pub use infrastructure::InMemoryGraphBackend;

#[cfg(feature = "sqlite")]
pub use infrastructure::SqliteGraphBackend;
