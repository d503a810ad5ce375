//! Result of processing one document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::features::entity_recognition::EntityKind;
use crate::features::rule_extraction::{Rule, RuleConflict};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingReport {
    /// Source document filename
    pub document: String,
    pub processed_at: DateTime<Utc>,
    pub duration_ms: u64,

    // ═══════════════════════════════════════════════════════════════════
    // Entities
    // ═══════════════════════════════════════════════════════════════════
    pub entity_count: usize,
    pub entity_statistics: BTreeMap<EntityKind, usize>,

    // ═══════════════════════════════════════════════════════════════════
    // Rules
    // ═══════════════════════════════════════════════════════════════════
    pub rule_count: usize,
    pub rules: Vec<Rule>,
    /// Conflicts among this document's rules only
    pub conflicts: Vec<RuleConflict>,

    // ═══════════════════════════════════════════════════════════════════
    // Graph
    // ═══════════════════════════════════════════════════════════════════
    /// Relation triples found in the text
    pub relationship_count: usize,
    /// Entity nodes that were new to the graph
    pub nodes_added: usize,
    pub edges_added: usize,
}
