//! SQLite persistence tests
//!
//! Tests file-based storage for:
//! 1. Data surviving a close/reopen cycle
//! 2. Parent directory creation
//! 3. Insertion order on reload

use doctrine_storage::{Edge, GraphBackend, Node, PropertyMap, SqliteGraphBackend, Value};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_file_based_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("ems_knowledge.db");

    // Step 1: Create database and insert data
    {
        let mut backend = SqliteGraphBackend::open(&db_path).unwrap();

        for i in 0..20 {
            let mut props = PropertyMap::new();
            props.insert("index".into(), Value::from(i as i64));
            let node = Node::new(format!("entity_{}", i), format!("E{}", i), "ENTITY")
                .with_properties(props)
                .with_source("persist.pdf");
            backend.insert_node(&node).unwrap();
        }

        for i in 0..19 {
            let edge = Edge::new(
                format!("entity_{}", i),
                format!("entity_{}", i + 1),
                "COORDINATES",
            )
            .with_confidence(0.8);
            backend.insert_edge(&edge).unwrap();
        }

        // Drop backend to close connection
    }

    assert!(db_path.exists());

    // Step 2: Reopen and verify
    let backend = SqliteGraphBackend::open(&db_path).unwrap();
    let nodes = backend.load_nodes().unwrap();
    let edges = backend.load_edges().unwrap();

    assert_eq!(nodes.len(), 20);
    assert_eq!(edges.len(), 19);
    assert_eq!(nodes[7].id, "entity_7");
    assert_eq!(nodes[7].properties.get("index"), Some(&Value::Integer(7)));
    assert_eq!(nodes[7].source_document, "persist.pdf");
    assert_eq!(edges[0].source, "entity_0");
    assert_eq!(edges[18].target, "entity_19");
    assert_eq!(edges[18].confidence, 0.8);
}

#[test]
fn test_reopen_after_clear_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("graph.db");

    {
        let mut backend = SqliteGraphBackend::open(&db_path).unwrap();
        backend.insert_node(&Node::new("a", "A", "ENTITY")).unwrap();
        backend.insert_node(&Node::new("b", "B", "ENTITY")).unwrap();
        backend.insert_edge(&Edge::new("a", "b", "JAMS")).unwrap();
        backend.clear().unwrap();
    }

    let backend = SqliteGraphBackend::open(&db_path).unwrap();
    assert!(backend.load_nodes().unwrap().is_empty());
    assert!(backend.load_edges().unwrap().is_empty());
}
