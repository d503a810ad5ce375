//! In-Memory graph backend (for testing)
//!
//! Vector-backed implementation for unit tests. Enforces the same
//! constraints as the SQLite schema (unique node ids, existing endpoints).
//! NOT durable.
use std::collections::HashSet;

use crate::domain::{BackendStats, Edge, GraphBackend, Node};
use crate::{Result, StorageError};

#[derive(Debug, Default, Clone)]
pub struct InMemoryGraphBackend {
    nodes: Vec<Node>,
    node_ids: HashSet<String>,
    edges: Vec<Edge>,
}

impl InMemoryGraphBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphBackend for InMemoryGraphBackend {
    fn insert_node(&mut self, node: &Node) -> Result<()> {
        if !self.node_ids.insert(node.id.clone()) {
            return Err(StorageError::duplicate_node(&node.id));
        }
        self.nodes.push(node.clone());
        Ok(())
    }

    fn insert_edge(&mut self, edge: &Edge) -> Result<i64> {
        if !self.node_ids.contains(&edge.source) || !self.node_ids.contains(&edge.target) {
            return Err(StorageError::missing_endpoint(&edge.source, &edge.target));
        }
        self.edges.push(edge.clone());
        Ok(self.edges.len() as i64)
    }

    fn load_nodes(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.clone())
    }

    fn load_edges(&self) -> Result<Vec<Edge>> {
        Ok(self.edges.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.edges.clear();
        self.nodes.clear();
        self.node_ids.clear();
        Ok(())
    }

    fn stats(&self) -> Result<BackendStats> {
        Ok(BackendStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
        })
    }
}
