//! RuleExtractor
//!
//! Per sentence: deontic cue patterns over tagged tokens, then the canonical
//! regex phrasings over the raw sentence. Each call dedups by signature and
//! drops low-confidence rules before appending to the extractor's store.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::RuleExtractionConfig;
use crate::features::linguistic::HeuristicAnnotator;
use crate::features::rule_extraction::domain::{
    self, DeonticKind, Rule, RuleConflict, RuleStatistics,
};
use crate::features::rule_extraction::infrastructure::{
    extract_components, find_deontic_matches, match_templates, TEMPLATE_CONFIDENCE,
};
use crate::shared::models::Result;
use crate::shared::ports::LinguisticAnnotator;
use crate::shared::utils::{RuleIdGenerator, RuleOrigin, SequentialIdGenerator};

pub struct RuleExtractor {
    linguistic: Arc<dyn LinguisticAnnotator>,
    ids: Arc<dyn RuleIdGenerator>,
    config: RuleExtractionConfig,
    rules: Vec<Rule>,
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new(
            Arc::new(HeuristicAnnotator::new()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }
}

impl RuleExtractor {
    pub fn new(linguistic: Arc<dyn LinguisticAnnotator>, ids: Arc<dyn RuleIdGenerator>) -> Self {
        Self {
            linguistic,
            ids,
            config: RuleExtractionConfig::default(),
            rules: Vec::new(),
        }
    }

    /// Builder: Replace extraction settings
    pub fn with_config(mut self, config: RuleExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract, dedup and filter the rules of `text`; they are also kept
    pub fn extract_rules(&mut self, text: &str, document_id: &str, section: &str) -> Vec<Rule> {
        let mut extracted = Vec::new();

        for span in self.linguistic.sentences(text) {
            let sentence = span.slice(text).trim();
            if sentence.chars().count() <= self.config.min_sentence_chars {
                continue;
            }
            extracted.extend(self.pattern_rules(sentence, document_id, section));
            extracted.extend(self.template_rules(sentence, document_id, section));
        }

        let found = extracted.len();
        let rules = self.post_process(extracted);
        debug!(
            document = document_id,
            candidates = found,
            kept = rules.len(),
            "Post-processed rules"
        );
        info!("Extracted {} rules from {}", rules.len(), document_id);

        self.rules.extend(rules.iter().cloned());
        rules
    }

    fn pattern_rules(&self, sentence: &str, document_id: &str, section: &str) -> Vec<Rule> {
        let tokens = self.linguistic.annotate(sentence);
        find_deontic_matches(&tokens)
            .iter()
            .filter_map(|m| {
                let components = extract_components(sentence, &tokens, m)?;
                Some(Rule {
                    id: self.ids.next_id(RuleOrigin::Pattern),
                    kind: m.kind,
                    confidence: components.confidence(),
                    subject: components.subject,
                    action: components.action,
                    object: components.object,
                    condition: components.condition,
                    text: sentence.to_string(),
                    source_document: document_id.to_string(),
                    section: section.to_string(),
                })
            })
            .collect()
    }

    fn template_rules(&self, sentence: &str, document_id: &str, section: &str) -> Vec<Rule> {
        match_templates(sentence)
            .into_iter()
            .map(|m| Rule {
                id: self.ids.next_id(RuleOrigin::Regex),
                kind: m.kind,
                subject: m.subject,
                action: m.action,
                object: String::new(),
                condition: String::new(),
                text: m.text,
                confidence: TEMPLATE_CONFIDENCE,
                source_document: document_id.to_string(),
                section: section.to_string(),
            })
            .collect()
    }

    /// First occurrence per signature, then the confidence floor
    fn post_process(&self, rules: Vec<Rule>) -> Vec<Rule> {
        let mut seen = HashSet::new();
        rules
            .into_iter()
            .filter(|rule| seen.insert(rule.signature()))
            .filter(|rule| rule.confidence >= self.config.min_confidence)
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════

    /// Every rule kept so far, in extraction order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rules_by_kind(&self, kind: DeonticKind) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.kind == kind).collect()
    }

    /// Like `rules_by_kind`, parsing the kind name first
    pub fn rules_by_kind_str(&self, kind: &str) -> Result<Vec<&Rule>> {
        let kind: DeonticKind = kind.parse()?;
        Ok(self.rules_by_kind(kind))
    }

    /// Case-insensitive substring match on the subject
    pub fn rules_by_subject(&self, subject: &str) -> Vec<&Rule> {
        let needle = subject.to_lowercase();
        self.rules
            .iter()
            .filter(|r| r.subject.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn statistics(&self) -> RuleStatistics {
        RuleStatistics::from_rules(&self.rules)
    }

    /// Pairwise conflicts within `rules`
    pub fn detect_conflicts(&self, rules: &[Rule]) -> Vec<RuleConflict> {
        let conflicts = domain::detect_conflicts(rules);
        info!(
            "Detected {} conflicts among {} rules",
            conflicts.len(),
            rules.len()
        );
        conflicts
    }

    // ═══════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════

    /// Every kept rule as a pretty-printed JSON array
    pub fn export_rules_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.rules)?;
        Ok(())
    }

    pub fn export_rules_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.export_rules_json(&mut writer)?;
        writer.flush()?;
        info!("Exported {} rules to {}", self.rules.len(), path.display());
        Ok(())
    }
}
