//! EntityAnnotator
//!
//! Runs every matcher over the text, unions the candidates in matcher
//! order, and resolves overlaps with one shared policy.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::features::entity_recognition::domain::{
    resolve_overlaps, Entity, EntityKind, RelationTriple,
};
use crate::features::entity_recognition::infrastructure::{match_relations, TokenClassifier};
use crate::features::linguistic::HeuristicAnnotator;
use crate::shared::ports::LinguisticAnnotator;

pub struct EntityAnnotator {
    linguistic: Arc<dyn LinguisticAnnotator>,
    classifiers: Vec<TokenClassifier>,
}

impl Default for EntityAnnotator {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicAnnotator::new()))
    }
}

impl EntityAnnotator {
    pub fn new(linguistic: Arc<dyn LinguisticAnnotator>) -> Self {
        Self {
            linguistic,
            classifiers: TokenClassifier::standard_set(),
        }
    }

    /// Non-overlapping entities sorted by `start`
    pub fn extract_entities(&self, text: &str) -> Vec<Entity> {
        let tokens = self.linguistic.annotate(text);

        let mut candidates = Vec::new();
        for classifier in &self.classifiers {
            let found = classifier.classify(text, &tokens);
            debug!(
                classifier = classifier.name(),
                count = found.len(),
                "entity candidates"
            );
            candidates.extend(found);
        }

        let entities = resolve_overlaps(candidates);
        info!("Extracted {} entities from text", entities.len());
        entities
    }

    /// Relation triples from the fixed templates
    ///
    /// `entities` is accepted for interface symmetry; triples are not
    /// checked against it.
    pub fn extract_relationships(&self, text: &str, entities: &[Entity]) -> Vec<RelationTriple> {
        let triples = match_relations(text);
        debug!(
            relations = triples.len(),
            entities = entities.len(),
            "Extracted relationships"
        );
        triples
    }

    /// Count per kind
    pub fn entity_statistics(&self, entities: &[Entity]) -> BTreeMap<EntityKind, usize> {
        let mut stats = BTreeMap::new();
        for entity in entities {
            *stats.entry(entity.label).or_insert(0) += 1;
        }
        stats
    }
}
