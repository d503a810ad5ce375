//! GraphStore
//!
//! In-memory petgraph multigraph mirrored by a durable `GraphBackend`.
//!
//! Every mutation writes to the backend first and touches the in-memory
//! graph only after the write succeeded, so a failed write leaves both
//! copies unchanged. The whole backend is loaded on construction.

use petgraph::algo::connected_components;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info, warn};

use doctrine_storage::GraphBackend;

use crate::features::entity_recognition::domain::{Entity, RelationTriple};
use crate::features::knowledge_graph::domain::{
    entity_node, relation_edge, relation_endpoint_node, GraphSnapshot, GraphStatistics,
};
use crate::shared::models::{Edge, Node, NodeId, PropertyMap, Result};

/// Edge bound used when `find_paths` is called without one
pub const DEFAULT_MAX_PATH_LENGTH: usize = 3;

pub struct GraphStore<B: GraphBackend> {
    backend: B,
    /// Node weights are the nodes themselves; edge weights the edges
    graph: DiGraph<Node, Edge>,
    index: HashMap<NodeId, NodeIndex>,
    default_max_path_length: usize,
}

impl<B: GraphBackend> GraphStore<B> {
    /// Wrap `backend` and load everything it holds
    pub fn new(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            graph: DiGraph::new(),
            index: HashMap::new(),
            default_max_path_length: DEFAULT_MAX_PATH_LENGTH,
        };
        store.hydrate()?;
        Ok(store)
    }

    /// Builder: Set the bound used by `find_paths(.., None)`
    pub fn with_max_path_length(mut self, v: usize) -> Self {
        self.default_max_path_length = v;
        self
    }

    fn hydrate(&mut self) -> Result<()> {
        let nodes = self.backend.load_nodes()?;
        let edges = self.backend.load_edges()?;

        for node in nodes {
            if self.index.contains_key(&node.id) {
                warn!("Skipping duplicate persisted node {}", node.id);
                continue;
            }
            self.insert_in_memory(node);
        }

        for edge in edges {
            match self.endpoints(&edge) {
                Some((source, target)) => {
                    self.graph.add_edge(source, target, edge);
                }
                None => warn!(
                    "Skipping persisted edge {} -[{}]-> {}: endpoint missing",
                    edge.source, edge.relationship, edge.target
                ),
            }
        }

        info!(
            "Loaded {} nodes and {} edges from graph store",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(())
    }

    fn insert_in_memory(&mut self, node: Node) {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
    }

    fn endpoints(&self, edge: &Edge) -> Option<(NodeIndex, NodeIndex)> {
        let source = self.index.get(&edge.source)?;
        let target = self.index.get(&edge.target)?;
        Some((*source, *target))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Insert a node; `Ok(false)` when the id already exists
    pub fn add_node(&mut self, node: Node) -> Result<bool> {
        if self.index.contains_key(&node.id) {
            debug!("Node {} already exists", node.id);
            return Ok(false);
        }
        self.backend.insert_node(&node)?;
        self.insert_in_memory(node);
        Ok(true)
    }

    /// Insert an edge; `Ok(false)` when either endpoint is missing
    ///
    /// Repeated inserts of the same triple create parallel edges.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        let Some((source, target)) = self.endpoints(&edge) else {
            warn!(
                "Rejecting edge {} -[{}]-> {}: endpoint not in graph",
                edge.source, edge.relationship, edge.target
            );
            return Ok(false);
        };
        self.backend.insert_edge(&edge)?;
        self.graph.add_edge(source, target, edge);
        Ok(true)
    }

    /// One node per entity; returns how many were new
    ///
    /// Not atomic: nodes added before a failing write stay added.
    pub fn add_entities_from_document(
        &mut self,
        entities: &[Entity],
        document_id: &str,
    ) -> Result<usize> {
        let mut added = 0;
        for entity in entities {
            if self.add_node(entity_node(entity, document_id))? {
                added += 1;
            }
        }
        info!("Added {} entities from {} to knowledge graph", added, document_id);
        Ok(added)
    }

    /// One edge per triple, creating generic endpoint nodes as needed;
    /// returns how many edges were added
    pub fn add_relationships_from_data(
        &mut self,
        triples: &[RelationTriple],
        document_id: &str,
    ) -> Result<usize> {
        let mut added = 0;
        for triple in triples {
            self.add_node(relation_endpoint_node(&triple.subject, document_id))?;
            self.add_node(relation_endpoint_node(&triple.object, document_id))?;
            if self.add_edge(relation_edge(triple, document_id))? {
                added += 1;
            }
        }
        info!(
            "Added {} relationships from {} to knowledge graph",
            added, document_id
        );
        Ok(added)
    }

    /// Remove every node and edge from the backend and from memory
    pub fn clear_all(&mut self) -> Result<()> {
        self.backend.clear()?;
        self.graph.clear();
        self.index.clear();
        info!("Cleared knowledge graph");
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|idx| &self.graph[*idx])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Nodes of `kind` whose properties contain every pair of `filter`
    pub fn query_nodes(&self, kind: Option<&str>, filter: Option<&PropertyMap>) -> Vec<&Node> {
        self.nodes()
            .filter(|node| kind.map_or(true, |k| node.kind == k))
            .filter(|node| {
                filter.map_or(true, |f| {
                    f.iter().all(|(key, value)| node.properties.get(key) == Some(value))
                })
            })
            .collect()
    }

    pub fn query_relationships(
        &self,
        source: Option<&str>,
        target: Option<&str>,
        relationship: Option<&str>,
    ) -> Vec<&Edge> {
        self.edges()
            .filter(|edge| source.map_or(true, |s| edge.source == s))
            .filter(|edge| target.map_or(true, |t| edge.target == t))
            .filter(|edge| relationship.map_or(true, |r| edge.relationship == r))
            .collect()
    }

    /// Simple directed paths of at most `max_length` edges
    ///
    /// `None` uses the store default. Parallel edges do not duplicate a path.
    /// Cost grows exponentially with the bound.
    pub fn find_paths(
        &self,
        source: &str,
        target: &str,
        max_length: Option<usize>,
    ) -> Vec<Vec<NodeId>> {
        let max_length = max_length.unwrap_or(self.default_max_path_length);
        let (Some(&from), Some(&to)) = (self.index.get(source), self.index.get(target)) else {
            return Vec::new();
        };
        if from == to || max_length == 0 {
            return Vec::new();
        }

        let mut found = Vec::new();
        let mut path = vec![from];
        self.walk(&mut path, to, max_length, &mut found);

        found
            .into_iter()
            .map(|p| p.into_iter().map(|idx| self.graph[idx].id.clone()).collect())
            .collect()
    }

    fn walk(
        &self,
        path: &mut Vec<NodeIndex>,
        target: NodeIndex,
        max_length: usize,
        found: &mut Vec<Vec<NodeIndex>>,
    ) {
        let Some(&current) = path.last() else {
            return;
        };
        for next in self.successors(current) {
            if next == target {
                let mut complete = path.clone();
                complete.push(next);
                found.push(complete);
            } else if path.len() < max_length && !path.contains(&next) {
                path.push(next);
                self.walk(path, target, max_length, found);
                path.pop();
            }
        }
    }

    /// Distinct successors in edge insertion order
    fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id(), e.target()))
            .collect();
        out.sort_by_key(|(id, _)| *id);

        let mut seen = HashSet::new();
        out.into_iter()
            .map(|(_, target)| target)
            .filter(|target| seen.insert(*target))
            .collect()
    }

    /// Targets of outgoing edges, then sources of incoming edges, deduplicated
    pub fn get_neighbors(&self, node_id: &str, relationship: Option<&str>) -> Vec<NodeId> {
        let Some(&idx) = self.index.get(node_id) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut neighbors = Vec::new();
        for direction in [Direction::Outgoing, Direction::Incoming] {
            let mut edges: Vec<_> = self
                .graph
                .edges_directed(idx, direction)
                .filter(|e| relationship.map_or(true, |r| e.weight().relationship == r))
                .map(|e| (e.id(), e.weight()))
                .collect();
            edges.sort_by_key(|(id, _)| *id);

            for (_, edge) in edges {
                let other = match direction {
                    Direction::Outgoing => &edge.target,
                    Direction::Incoming => &edge.source,
                };
                if seen.insert(other.as_str()) {
                    neighbors.push(other.clone());
                }
            }
        }
        neighbors
    }

    pub fn get_statistics(&self) -> GraphStatistics {
        let mut node_kinds = BTreeMap::new();
        for node in self.nodes() {
            *node_kinds.entry(node.kind.clone()).or_insert(0) += 1;
        }
        let mut relationship_kinds = BTreeMap::new();
        for edge in self.edges() {
            *relationship_kinds.entry(edge.relationship.clone()).or_insert(0) += 1;
        }

        // connected_components treats a directed graph as undirected
        let component_count = connected_components(&self.graph);

        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            node_kinds,
            relationship_kinds,
            is_connected: component_count == 1,
            component_count,
        }
    }

    /// Owned copy of every node and edge
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges().cloned().collect(),
        }
    }
}

#[cfg(feature = "sqlite")]
impl GraphStore<doctrine_storage::SqliteGraphBackend> {
    /// Open the SQLite database named by `config`
    pub fn open(config: &crate::config::KnowledgeGraphConfig) -> Result<Self> {
        let backend = doctrine_storage::SqliteGraphBackend::open(&config.database_path)?;
        Ok(Self::new(backend)?.with_max_path_length(config.default_max_path_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::entity_recognition::domain::RelationKind;
    use crate::features::entity_recognition::EntityAnnotator;
    use crate::shared::models::{ErrorKind, Value};
    use doctrine_storage::{BackendStats, InMemoryGraphBackend, StorageError};
    use pretty_assertions::assert_eq;

    fn store() -> GraphStore<InMemoryGraphBackend> {
        GraphStore::new(InMemoryGraphBackend::new()).unwrap()
    }

    fn node(id: &str) -> Node {
        Node::new(id, id, "ENTITY")
    }

    fn chain() -> GraphStore<InMemoryGraphBackend> {
        let mut store = store();
        for id in ["A", "B", "C"] {
            store.add_node(node(id)).unwrap();
        }
        store.add_edge(Edge::new("A", "B", "CONTROLS")).unwrap();
        store.add_edge(Edge::new("B", "C", "CONTROLS")).unwrap();
        store
    }

    /// Backend with preset contents that can refuse writes
    #[derive(Default)]
    struct ScriptedBackend {
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        fail_writes: bool,
    }

    impl GraphBackend for ScriptedBackend {
        fn insert_node(&mut self, node: &Node) -> doctrine_storage::Result<()> {
            if self.fail_writes {
                return Err(StorageError::database("disk I/O error"));
            }
            self.nodes.push(node.clone());
            Ok(())
        }

        fn insert_edge(&mut self, edge: &Edge) -> doctrine_storage::Result<i64> {
            if self.fail_writes {
                return Err(StorageError::database("disk I/O error"));
            }
            self.edges.push(edge.clone());
            Ok(self.edges.len() as i64)
        }

        fn load_nodes(&self) -> doctrine_storage::Result<Vec<Node>> {
            Ok(self.nodes.clone())
        }

        fn load_edges(&self) -> doctrine_storage::Result<Vec<Edge>> {
            Ok(self.edges.clone())
        }

        fn clear(&mut self) -> doctrine_storage::Result<()> {
            self.nodes.clear();
            self.edges.clear();
            Ok(())
        }

        fn stats(&self) -> doctrine_storage::Result<BackendStats> {
            Ok(BackendStats {
                node_count: self.nodes.len(),
                edge_count: self.edges.len(),
            })
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn test_add_node_is_idempotent() {
        let mut store = store();
        assert!(store.add_node(node("A")).unwrap());
        assert!(!store.add_node(node("A")).unwrap());
        assert_eq!(store.node_count(), 1);
        assert_eq!(store.backend().stats().unwrap().node_count, 1);
    }

    #[test]
    fn test_add_edge_requires_both_endpoints() {
        let mut store = store();
        store.add_node(node("A")).unwrap();

        assert!(!store.add_edge(Edge::new("A", "missing", "JAMS")).unwrap());
        assert!(!store.add_edge(Edge::new("missing", "A", "JAMS")).unwrap());
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.backend().stats().unwrap().edge_count, 0);
    }

    #[test]
    fn test_parallel_edges() {
        let mut store = chain();
        assert!(store.add_edge(Edge::new("A", "B", "CONTROLS")).unwrap());
        assert_eq!(store.edge_count(), 3);
        assert_eq!(
            store.query_relationships(Some("A"), Some("B"), None).len(),
            2
        );
    }

    #[test]
    fn test_failed_write_leaves_memory_untouched() {
        let backend = ScriptedBackend {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = GraphStore::new(backend).unwrap();

        let err = store.add_node(node("A")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert!(!store.contains_node("A"));
        assert_eq!(store.node_count(), 0);
    }

    #[test]
    fn test_failed_edge_write_leaves_memory_untouched() {
        let backend = ScriptedBackend {
            nodes: vec![node("A"), node("B")],
            fail_writes: true,
            ..Default::default()
        };
        let mut store = GraphStore::new(backend).unwrap();

        assert!(store.add_edge(Edge::new("A", "B", "JAMS")).is_err());
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_clear_all() {
        let mut store = chain();
        store.clear_all().unwrap();

        assert_eq!(store.node_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.backend().stats().unwrap(), BackendStats::default());
        // ids can be reused afterwards
        assert!(store.add_node(node("A")).unwrap());
    }

    // ═══════════════════════════════════════════════════════════════════
    // Hydration
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn test_hydrates_nodes_then_edges() {
        let backend = ScriptedBackend {
            nodes: vec![node("A"), node("B")],
            edges: vec![
                Edge::new("A", "B", "CONTROLS"),
                Edge::new("A", "ghost", "JAMS"),
            ],
            fail_writes: false,
        };
        let store = GraphStore::new(backend).unwrap();

        assert_eq!(store.node_count(), 2);
        // dangling edge skipped
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.get_neighbors("A", None), vec!["B".to_string()]);
    }

    #[test]
    fn test_hydration_skips_duplicate_ids() {
        let backend = ScriptedBackend {
            nodes: vec![node("A"), node("A")],
            ..Default::default()
        };
        let store = GraphStore::new(backend).unwrap();
        assert_eq!(store.node_count(), 1);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Paths
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn test_find_paths_chain() {
        let store = chain();
        assert_eq!(
            store.find_paths("A", "C", Some(3)),
            vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]
        );
        assert_eq!(store.find_paths("A", "C", None).len(), 1);
        assert!(store.find_paths("A", "C", Some(1)).is_empty());
    }

    #[test]
    fn test_find_paths_missing_or_same_endpoint() {
        let store = chain();
        assert!(store.find_paths("A", "Z", None).is_empty());
        assert!(store.find_paths("Z", "A", None).is_empty());
        assert!(store.find_paths("A", "A", None).is_empty());
        // edges are directed
        assert!(store.find_paths("C", "A", None).is_empty());
    }

    #[test]
    fn test_find_paths_branches_and_parallel_edges() {
        let mut store = store();
        for id in ["A", "B", "C", "D"] {
            store.add_node(node(id)).unwrap();
        }
        store.add_edge(Edge::new("A", "B", "CONTROLS")).unwrap();
        store.add_edge(Edge::new("A", "C", "CONTROLS")).unwrap();
        store.add_edge(Edge::new("B", "D", "CONTROLS")).unwrap();
        store.add_edge(Edge::new("B", "D", "JAMS")).unwrap();
        store.add_edge(Edge::new("C", "D", "CONTROLS")).unwrap();
        store.add_edge(Edge::new("A", "D", "COORDINATES")).unwrap();

        let paths = store.find_paths("A", "D", Some(2));
        let expected: Vec<Vec<String>> = vec![
            vec!["A".into(), "B".into(), "D".into()],
            vec!["A".into(), "C".into(), "D".into()],
            vec!["A".into(), "D".into()],
        ];
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_find_paths_ignores_cycles() {
        let mut store = chain();
        store.add_edge(Edge::new("B", "A", "COORDINATES")).unwrap();
        store.add_edge(Edge::new("C", "B", "COORDINATES")).unwrap();

        let paths = store.find_paths("A", "C", Some(5));
        assert_eq!(
            paths,
            vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]
        );
    }

    #[test]
    fn test_default_path_bound_is_configurable() {
        let store = chain().with_max_path_length(1);
        assert!(store.find_paths("A", "C", None).is_empty());
        assert_eq!(store.find_paths("A", "C", Some(2)).len(), 1);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn test_get_neighbors() {
        let mut store = chain();
        store.add_node(node("D")).unwrap();
        store.add_edge(Edge::new("D", "B", "JAMS")).unwrap();
        store.add_edge(Edge::new("B", "C", "JAMS")).unwrap();

        assert_eq!(
            store.get_neighbors("B", None),
            vec!["C".to_string(), "A".to_string(), "D".to_string()]
        );
        assert_eq!(
            store.get_neighbors("B", Some("JAMS")),
            vec!["C".to_string(), "D".to_string()]
        );
        assert!(store.get_neighbors("Z", None).is_empty());
    }

    #[test]
    fn test_query_nodes() {
        let mut store = store();
        let mut props = PropertyMap::new();
        props.insert("band".to_string(), Value::from("UHF"));
        store
            .add_node(Node::new("f1", "UHF", "FREQUENCY").with_properties(props.clone()))
            .unwrap();
        store.add_node(Node::new("f2", "VHF", "FREQUENCY")).unwrap();
        store.add_node(Node::new("a1", "JFACC", "AUTHORITY")).unwrap();

        assert_eq!(store.query_nodes(None, None).len(), 3);
        assert_eq!(store.query_nodes(Some("FREQUENCY"), None).len(), 2);
        assert!(store.query_nodes(Some("RADAR"), None).is_empty());

        let hits = store.query_nodes(Some("FREQUENCY"), Some(&props));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "f1");

        let mut other = PropertyMap::new();
        other.insert("band".to_string(), Value::from("VHF"));
        assert!(store.query_nodes(None, Some(&other)).is_empty());
    }

    #[test]
    fn test_query_relationships() {
        let mut store = chain();
        store.add_edge(Edge::new("A", "C", "JAMS")).unwrap();

        assert_eq!(store.query_relationships(None, None, None).len(), 3);
        assert_eq!(store.query_relationships(Some("A"), None, None).len(), 2);
        assert_eq!(store.query_relationships(None, Some("C"), None).len(), 2);
        assert_eq!(
            store.query_relationships(None, None, Some("CONTROLS")).len(),
            2
        );
        assert!(store
            .query_relationships(Some("C"), None, None)
            .is_empty());
    }

    #[test]
    fn test_statistics() {
        let mut store = chain();
        store.add_node(Node::new("lonely", "lonely", "AUTHORITY")).unwrap();

        let stats = store.get_statistics();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.node_kinds.get("ENTITY"), Some(&3));
        assert_eq!(stats.node_kinds.get("AUTHORITY"), Some(&1));
        assert_eq!(stats.relationship_kinds.get("CONTROLS"), Some(&2));
        assert_eq!(stats.component_count, 2);
        assert!(!stats.is_connected);
    }

    #[test]
    fn test_statistics_connectivity_is_undirected() {
        let stats = chain().get_statistics();
        assert_eq!(stats.component_count, 1);
        assert!(stats.is_connected);
    }

    #[test]
    fn test_empty_graph_statistics() {
        let stats = store().get_statistics();
        assert_eq!(stats, GraphStatistics::default());
        assert!(!stats.is_connected);
    }

    #[test]
    fn test_snapshot_in_insertion_order() {
        let snapshot = chain().snapshot();
        let ids: Vec<&str> = snapshot.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(snapshot.edges.len(), 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["edges"][0]["relationship"], "CONTROLS");
    }

    // ═══════════════════════════════════════════════════════════════════
    // Ingestion
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn test_add_entities_from_document() {
        let annotator = EntityAnnotator::default();
        let entities =
            annotator.extract_entities("JFACC must coordinate EMS operations on UHF frequencies");

        let mut store = store();
        let added = store.add_entities_from_document(&entities, "jp3-85.pdf").unwrap();
        assert_eq!(added, entities.len());
        assert!(store.contains_node("AUTHORITY_jfacc"));
        assert!(store.contains_node("EMS_OPERATION_ems_operations"));

        // same entities again are all no-ops
        let again = store.add_entities_from_document(&entities, "jp3-85.pdf").unwrap();
        assert_eq!(again, 0);
        assert_eq!(store.node_count(), entities.len());
    }

    #[test]
    fn test_add_relationships_creates_generic_nodes() {
        let triples = vec![
            RelationTriple {
                subject: "JFACC".to_string(),
                predicate: RelationKind::Controls,
                object: "EW assets".to_string(),
                confidence: 0.8,
                context: String::new(),
            },
            RelationTriple {
                subject: "JFACC".to_string(),
                predicate: RelationKind::Coordinates,
                object: "EW assets".to_string(),
                confidence: 0.8,
                context: String::new(),
            },
        ];

        let mut store = store();
        let added = store.add_relationships_from_data(&triples, "doc").unwrap();
        assert_eq!(added, 2);
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 2);

        let jfacc = store.get_node("entity_jfacc").unwrap();
        assert_eq!(jfacc.kind, "ENTITY");
        assert_eq!(jfacc.label, "JFACC");
        assert_eq!(
            store
                .get_node("entity_ew_assets")
                .and_then(|n| n.properties.get("original_text")),
            Some(&Value::from("EW assets"))
        );
        let by_text: PropertyMap =
            [("original_text".to_string(), Value::from("JFACC"))].into_iter().collect();
        assert_eq!(store.query_nodes(Some("ENTITY"), Some(&by_text)).len(), 1);
        assert_eq!(
            store.get_neighbors("entity_jfacc", Some("CONTROLS")),
            vec!["entity_ew_assets".to_string()]
        );
    }
}
