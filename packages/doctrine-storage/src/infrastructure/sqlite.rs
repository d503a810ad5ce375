//! SQLite graph backend
//!
//! File-based persistent storage using SQLite. One connection per backend;
//! the owning graph store is the only writer.
//!
//! Schema:
//! - `nodes(id PK, label, kind, properties, source_document, confidence, created_at)`
//! - `edges(id INTEGER PK AUTOINCREMENT, source → nodes.id, target → nodes.id,
//!   relationship, properties, confidence, created_at)`
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;

use crate::domain::{
    decode_properties, encode_properties, BackendStats, Edge, GraphBackend, Node,
};
use crate::{Result, StorageError};

/// SQLite-based GraphBackend implementation
pub struct SqliteGraphBackend {
    conn: Connection,
}

impl SqliteGraphBackend {
    /// Open (or create) a database at the given path
    ///
    /// Parent directories are created when missing.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path)?;
        let backend = Self { conn };
        backend.init_schema()?;
        tracing::info!("Graph database initialized at {}", db_path.display());
        Ok(backend)
    }

    /// Create an in-memory SQLite backend (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let backend = Self { conn };
        backend.init_schema()?;
        Ok(backend)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.pragma_update(None, "foreign_keys", true)?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS nodes (
                id TEXT PRIMARY KEY,
                label TEXT NOT NULL,
                kind TEXT NOT NULL,
                properties TEXT,
                source_document TEXT,
                confidence REAL NOT NULL DEFAULT 1.0,
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS edges (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source TEXT NOT NULL,
                target TEXT NOT NULL,
                relationship TEXT NOT NULL,
                properties TEXT,
                confidence REAL NOT NULL DEFAULT 1.0,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (source) REFERENCES nodes(id),
                FOREIGN KEY (target) REFERENCES nodes(id)
            )",
            [],
        )?;

        // Create indexes for fast lookups
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_nodes_kind ON nodes(kind)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_edges_relationship ON edges(relationship)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_edges_source ON edges(source)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_edges_target ON edges(target)",
            [],
        )?;

        Ok(())
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _) if inner.code == ErrorCode::ConstraintViolation
    )
}

impl GraphBackend for SqliteGraphBackend {
    fn insert_node(&mut self, node: &Node) -> Result<()> {
        let properties = encode_properties(&node.properties)?;
        self.conn
            .execute(
                "INSERT INTO nodes (id, label, kind, properties, source_document, confidence, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    &node.id,
                    &node.label,
                    &node.kind,
                    properties,
                    &node.source_document,
                    node.confidence,
                    chrono::Utc::now().timestamp()
                ],
            )
            .map_err(|err| {
                if is_constraint_violation(&err) {
                    StorageError::duplicate_node(&node.id).with_source(err)
                } else {
                    err.into()
                }
            })?;
        Ok(())
    }

    fn insert_edge(&mut self, edge: &Edge) -> Result<i64> {
        let properties = encode_properties(&edge.properties)?;
        self.conn
            .execute(
                "INSERT INTO edges (source, target, relationship, properties, confidence, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    &edge.source,
                    &edge.target,
                    &edge.relationship,
                    properties,
                    edge.confidence,
                    chrono::Utc::now().timestamp()
                ],
            )
            .map_err(|err| {
                if is_constraint_violation(&err) {
                    StorageError::missing_endpoint(&edge.source, &edge.target).with_source(err)
                } else {
                    err.into()
                }
            })?;
        Ok(self.conn.last_insert_rowid())
    }

    fn load_nodes(&self) -> Result<Vec<Node>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, label, kind, properties, source_document, confidence
             FROM nodes ORDER BY rowid",
        )?;

        let nodes = stmt
            .query_map([], |row| {
                let properties: Option<String> = row.get(3)?;
                let source_document: Option<String> = row.get(4)?;
                let confidence: Option<f64> = row.get(5)?;
                Ok(Node {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    kind: row.get(2)?,
                    properties: decode_properties(properties.as_deref()),
                    source_document: source_document.unwrap_or_default(),
                    confidence: confidence.unwrap_or(1.0),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(nodes)
    }

    fn load_edges(&self) -> Result<Vec<Edge>> {
        let mut stmt = self.conn.prepare(
            "SELECT source, target, relationship, properties, confidence
             FROM edges ORDER BY id",
        )?;

        let edges = stmt
            .query_map([], |row| {
                let properties: Option<String> = row.get(3)?;
                let confidence: Option<f64> = row.get(4)?;
                Ok(Edge {
                    source: row.get(0)?,
                    target: row.get(1)?,
                    relationship: row.get(2)?,
                    properties: decode_properties(properties.as_deref()),
                    confidence: confidence.unwrap_or(1.0),
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(edges)
    }

    fn clear(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM edges", [])?;
        tx.execute("DELETE FROM nodes", [])?;
        tx.commit()
            .map_err(|err| StorageError::transaction(format!("clear failed: {}", err)))?;
        Ok(())
    }

    fn stats(&self) -> Result<BackendStats> {
        let node_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM nodes", [], |row| row.get(0))?;
        let edge_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM edges", [], |row| row.get(0))?;

        Ok(BackendStats {
            node_count: node_count as usize,
            edge_count: edge_count as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyMap, Value};
    use crate::ErrorKind;

    fn node(id: &str) -> Node {
        Node::new(id, id, "ENTITY")
    }

    #[test]
    fn test_insert_and_load_nodes() {
        let mut backend = SqliteGraphBackend::in_memory().unwrap();

        let mut props = PropertyMap::new();
        props.insert("original_text".into(), Value::from("JFACC"));
        props.insert("start_pos".into(), Value::from(0i64));
        let jfacc = Node::new("AUTHORITY_jfacc", "JFACC", "AUTHORITY")
            .with_properties(props)
            .with_source("doc.pdf");

        backend.insert_node(&jfacc).unwrap();
        backend.insert_node(&node("entity_radar")).unwrap();

        let nodes = backend.load_nodes().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], jfacc);
        assert_eq!(nodes[1].id, "entity_radar");
    }

    #[test]
    fn test_duplicate_node_is_constraint_error() {
        let mut backend = SqliteGraphBackend::in_memory().unwrap();
        backend.insert_node(&node("a")).unwrap();

        let err = backend.insert_node(&node("a")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Constraint);
        assert_eq!(backend.stats().unwrap().node_count, 1);
    }

    #[test]
    fn test_parallel_edges_get_distinct_ids() {
        let mut backend = SqliteGraphBackend::in_memory().unwrap();
        backend.insert_node(&node("a")).unwrap();
        backend.insert_node(&node("b")).unwrap();

        let edge = Edge::new("a", "b", "JAMS");
        let first = backend.insert_edge(&edge).unwrap();
        let second = backend.insert_edge(&edge).unwrap();

        assert_ne!(first, second);
        assert_eq!(backend.load_edges().unwrap().len(), 2);
    }

    #[test]
    fn test_edge_with_missing_endpoint_rejected() {
        let mut backend = SqliteGraphBackend::in_memory().unwrap();
        backend.insert_node(&node("a")).unwrap();

        let err = backend
            .insert_edge(&Edge::new("a", "ghost", "CONTROLS"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Constraint);
        assert_eq!(backend.stats().unwrap().edge_count, 0);
    }

    #[test]
    fn test_malformed_properties_load_as_empty() {
        let backend = SqliteGraphBackend::in_memory().unwrap();
        backend
            .conn
            .execute(
                "INSERT INTO nodes (id, label, kind, properties, source_document, confidence, created_at)
                 VALUES ('x', 'X', 'ENTITY', '{broken', NULL, 0.5, 0)",
                [],
            )
            .unwrap();

        let nodes = backend.load_nodes().unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].properties.is_empty());
        assert_eq!(nodes[0].source_document, "");
        assert_eq!(nodes[0].confidence, 0.5);
    }

    #[test]
    fn test_clear() {
        let mut backend = SqliteGraphBackend::in_memory().unwrap();
        backend.insert_node(&node("a")).unwrap();
        backend.insert_node(&node("b")).unwrap();
        backend.insert_edge(&Edge::new("a", "b", "COORDINATES")).unwrap();

        backend.clear().unwrap();

        assert_eq!(backend.stats().unwrap(), BackendStats::default());
    }
}
