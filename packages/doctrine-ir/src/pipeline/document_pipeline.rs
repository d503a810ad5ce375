//! Document pipeline
//!
//! ```text
//! Document.content
//!   ├─▶ EntityAnnotator ─▶ entities ─▶ statistics
//!   ├─▶ RuleExtractor   ─▶ rules    ─▶ conflicts (this document only)
//!   └─▶ GraphStore      ◀─ entities + relation triples
//! ```

use std::time::Instant;

use tracing::info;

use doctrine_storage::GraphBackend;

use crate::features::entity_recognition::EntityAnnotator;
use crate::features::knowledge_graph::GraphStore;
use crate::features::rule_extraction::RuleExtractor;
use crate::pipeline::report::ProcessingReport;
use crate::shared::models::{Document, Result};

pub struct DocumentPipeline<B: GraphBackend> {
    entities: EntityAnnotator,
    rules: RuleExtractor,
    graph: GraphStore<B>,
}

impl<B: GraphBackend> DocumentPipeline<B> {
    /// Default annotators over an existing graph store
    pub fn new(graph: GraphStore<B>) -> Self {
        Self::with_components(EntityAnnotator::default(), RuleExtractor::default(), graph)
    }

    pub fn with_components(
        entities: EntityAnnotator,
        rules: RuleExtractor,
        graph: GraphStore<B>,
    ) -> Self {
        Self {
            entities,
            rules,
            graph,
        }
    }

    /// Run every stage over `document.content`
    ///
    /// Graph writes are the only fallible step; entities already written
    /// stay in the graph when a later write fails.
    pub fn process(&mut self, document: &Document) -> Result<ProcessingReport> {
        let start = Instant::now();
        let document_id = document.filename.as_str();
        info!("Processing document {}", document_id);

        let entities = self.entities.extract_entities(&document.content);
        let entity_statistics = self.entities.entity_statistics(&entities);

        let rules = self.rules.extract_rules(&document.content, document_id, "");

        let nodes_added = self
            .graph
            .add_entities_from_document(&entities, document_id)
            .map_err(|e| e.with_document(document_id))?;
        let triples = self
            .entities
            .extract_relationships(&document.content, &entities);
        let edges_added = self
            .graph
            .add_relationships_from_data(&triples, document_id)
            .map_err(|e| e.with_document(document_id))?;

        let conflicts = self.rules.detect_conflicts(&rules);

        let report = ProcessingReport {
            document: document_id.to_string(),
            processed_at: chrono::Utc::now(),
            duration_ms: start.elapsed().as_millis() as u64,
            entity_count: entities.len(),
            entity_statistics,
            rule_count: rules.len(),
            rules,
            relationship_count: triples.len(),
            nodes_added,
            edges_added,
            conflicts,
        };
        info!(
            "Processed {}: {} entities, {} rules, {} conflicts",
            document_id,
            report.entity_count,
            report.rule_count,
            report.conflicts.len()
        );
        Ok(report)
    }

    pub fn graph(&self) -> &GraphStore<B> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut GraphStore<B> {
        &mut self.graph
    }

    pub fn rule_extractor(&self) -> &RuleExtractor {
        &self.rules
    }

    pub fn entity_annotator(&self) -> &EntityAnnotator {
        &self.entities
    }
}

#[cfg(feature = "sqlite")]
impl DocumentPipeline<doctrine_storage::SqliteGraphBackend> {
    /// SQLite-backed pipeline with every setting taken from `config`
    pub fn from_config(config: &crate::config::DoctrineConfig) -> Result<Self> {
        config.validate()?;
        let graph = GraphStore::open(&config.knowledge_graph)?;
        let rules = RuleExtractor::default().with_config(config.rule_extraction.clone());
        Ok(Self::with_components(EntityAnnotator::default(), rules, graph))
    }
}
