//! Knowledge graph domain
//!
//! - `mapping`: entities and relation triples → graph nodes and edges
//! - `statistics`: `GraphStatistics` and the `GraphSnapshot` exchange shape

pub mod mapping;
pub mod statistics;

pub use mapping::{entity_node, relation_edge, relation_endpoint_node, GENERIC_ENTITY_KIND};
pub use statistics::{GraphSnapshot, GraphStatistics};
