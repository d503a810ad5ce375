//! Domain layer for the durable graph store
//!
//! # Domain Models
//!
//! - `Node`: typed graph vertex, unique by `id`
//! - `Edge`: directed relationship between two nodes (multigraph: no uniqueness)
//! - `Value`: closed property value (text | integer | float | bool)
//!
//! # Port Trait
//!
//! - `GraphBackend`: durable persistence for nodes and edges
//!
//! # Examples
//!
//! ```rust
//! use doctrine_storage::domain::{Node, PropertyMap, Value};
//!
//! let mut properties = PropertyMap::new();
//! properties.insert("original_text".to_string(), Value::from("JFACC"));
//!
//! let node = Node::new("AUTHORITY_jfacc", "JFACC", "AUTHORITY")
//!     .with_properties(properties)
//!     .with_source("jp3-85.pdf");
//! assert_eq!(node.kind, "AUTHORITY");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// Property value stored on nodes and edges
///
/// Serialized untagged so the persisted blob is a plain JSON object
/// (`{"start_pos": 12, "context": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Flexible-schema property bag, ordered for stable serialization
pub type PropertyMap = BTreeMap<String, Value>;

/// Node identifier (deterministic function of kind + normalized label)
pub type NodeId = String;

/// Graph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique key
    pub id: NodeId,
    /// Display label (usually the original surface text)
    pub label: String,
    /// Open node type, e.g. `AUTHORITY`, `FREQUENCY`, `ENTITY`
    pub kind: String,
    #[serde(default)]
    pub properties: PropertyMap,
    #[serde(default)]
    pub source_document: String,
    pub confidence: f64,
}

impl Node {
    /// Create a node with empty properties and confidence 1.0
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: kind.into(),
            properties: PropertyMap::new(),
            source_document: String::new(),
            confidence: 1.0,
        }
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_source(mut self, source_document: impl Into<String>) -> Self {
        self.source_document = source_document.into();
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Directed graph edge
///
/// Parallel edges with the same `(source, target, relationship)` are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub relationship: String,
    #[serde(default)]
    pub properties: PropertyMap,
    pub confidence: f64,
}

impl Edge {
    /// Create an edge with empty properties and confidence 1.0
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship: relationship.into(),
            properties: PropertyMap::new(),
            confidence: 1.0,
        }
    }

    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Row counts reported by a backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendStats {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Decode a persisted property blob.
///
/// Missing or malformed blobs decode to an empty map; this never fails.
pub fn decode_properties(blob: Option<&str>) -> PropertyMap {
    match blob {
        None => PropertyMap::new(),
        Some(raw) if raw.trim().is_empty() => PropertyMap::new(),
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            tracing::warn!("Discarding malformed property blob: {}", err);
            PropertyMap::new()
        }),
    }
}

/// Encode a property map for persistence
pub fn encode_properties(properties: &PropertyMap) -> Result<String> {
    Ok(serde_json::to_string(properties)?)
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: GraphBackend
// ═══════════════════════════════════════════════════════════════════════════

/// Durable node/edge persistence
///
/// Backends are synchronous and single-owner: one handle per graph store,
/// no internal locking. Callers needing shared access wrap the owning
/// store in their own mutex.
///
/// # Implementations
///
/// - `SqliteGraphBackend`: file or in-memory SQLite
/// - `InMemoryGraphBackend`: vectors, for tests
pub trait GraphBackend {
    /// Persist a new node
    ///
    /// # Errors
    ///
    /// `ErrorKind::Constraint` if the id is already persisted.
    fn insert_node(&mut self, node: &Node) -> Result<()>;

    /// Persist a new edge, returning its auto-assigned row id
    fn insert_edge(&mut self, edge: &Edge) -> Result<i64>;

    /// All persisted nodes in insertion order
    fn load_nodes(&self) -> Result<Vec<Node>>;

    /// All persisted edges in insertion order
    fn load_edges(&self) -> Result<Vec<Edge>>;

    /// Delete every edge and node
    fn clear(&mut self) -> Result<()>;

    /// Current row counts
    fn stats(&self) -> Result<BackendStats>;
}

impl<B: GraphBackend + ?Sized> GraphBackend for Box<B> {
    fn insert_node(&mut self, node: &Node) -> Result<()> {
        (**self).insert_node(node)
    }

    fn insert_edge(&mut self, edge: &Edge) -> Result<i64> {
        (**self).insert_edge(edge)
    }

    fn load_nodes(&self) -> Result<Vec<Node>> {
        (**self).load_nodes()
    }

    fn load_edges(&self) -> Result<Vec<Edge>> {
        (**self).load_edges()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn stats(&self) -> Result<BackendStats> {
        (**self).stats()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new("AUTHORITY_jfacc", "JFACC", "AUTHORITY");

        assert_eq!(node.id, "AUTHORITY_jfacc");
        assert_eq!(node.label, "JFACC");
        assert_eq!(node.kind, "AUTHORITY");
        assert!(node.properties.is_empty());
        assert_eq!(node.source_document, "");
        assert_eq!(node.confidence, 1.0);
    }

    #[test]
    fn test_edge_builders() {
        let edge = Edge::new("entity_jfacc", "entity_radar", "CONTROLS").with_confidence(0.8);

        assert_eq!(edge.relationship, "CONTROLS");
        assert_eq!(edge.confidence, 0.8);
    }

    #[test]
    fn test_value_untagged_serde() {
        let mut props = PropertyMap::new();
        props.insert("text".into(), Value::from("UHF"));
        props.insert("start_pos".into(), Value::from(42i64));
        props.insert("score".into(), Value::from(0.5));
        props.insert("verified".into(), Value::from(true));

        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(
            json,
            r#"{"score":0.5,"start_pos":42,"text":"UHF","verified":true}"#
        );

        let back: PropertyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn test_decode_properties_fail_soft() {
        assert!(decode_properties(None).is_empty());
        assert!(decode_properties(Some("")).is_empty());
        assert!(decode_properties(Some("{not json")).is_empty());
        // Nested objects are outside the closed value set
        assert!(decode_properties(Some(r#"{"a": {"b": 1}}"#)).is_empty());

        let props = decode_properties(Some(r#"{"context": "JFACC must"}"#));
        assert_eq!(props.get("context"), Some(&Value::from("JFACC must")));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("UHF").to_string(), "UHF");
        assert_eq!(Value::from(3usize).to_string(), "3");
        assert_eq!(Value::from(false).to_string(), "false");
    }
}
