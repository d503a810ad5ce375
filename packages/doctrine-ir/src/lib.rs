/*
 * Doctrine IR - EMS doctrine knowledge extraction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Document, Token, errors), ports, id/text utilities
 * - features/    : Vertical slices (linguistic → entity_recognition → rule_extraction → knowledge_graph)
 * - pipeline/    : Per-document orchestration
 * - config/      : Versioned YAML configuration
 *
 * Durable graph persistence lives in the doctrine-storage crate.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models, ports and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Document pipeline
pub mod pipeline;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use shared::models::{
    Document, DocumentSection, DoctrineError, Edge, ErrorKind, Node, PartOfSpeech, PropertyMap,
    Result, SentenceSpan, Token, Value,
};
pub use shared::ports::LinguisticAnnotator;
pub use shared::utils::{RuleIdGenerator, RuleOrigin, SequentialIdGenerator};

pub use features::entity_recognition::{
    resolve_overlaps, Entity, EntityAnnotator, EntityKind, RelationKind, RelationTriple,
    TokenClassifier,
};
pub use features::knowledge_graph::{
    GraphSnapshot, GraphStatistics, GraphStore, DEFAULT_MAX_PATH_LENGTH,
};
pub use features::linguistic::HeuristicAnnotator;
pub use features::rule_extraction::{
    detect_conflicts, ConflictKind, DeonticKind, Rule, RuleConflict, RuleExtractor,
    RuleStatistics,
};

pub use config::{ConfigError, DoctrineConfig};
pub use pipeline::{DocumentPipeline, ProcessingReport};
