//! Graph summary and exchange shapes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::models::{Edge, Node};

/// Counts and connectivity over the in-memory graph
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Node kind → count
    pub node_kinds: BTreeMap<String, usize>,
    /// Relationship label → count
    pub relationship_kinds: BTreeMap<String, usize>,
    /// Weak connectivity; an empty graph is not connected
    pub is_connected: bool,
    /// Weakly connected components
    pub component_count: usize,
}

/// Every node and edge, in insertion order
///
/// Serialisation grammars (GraphML, GEXF, ...) are built from this by callers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
