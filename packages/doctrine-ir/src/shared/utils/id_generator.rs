//! ID generation utilities
//!
//! Two families of ids:
//! - Rule ids, handed out by an injected `RuleIdGenerator` so that separate
//!   extractor instances never share a counter and tests can pin ids.
//! - Graph node ids, a pure function of `(kind, normalized label)`.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Which extraction pass produced a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Token-pattern pass
    Pattern,
    /// Regex fallback pass
    Regex,
}

/// Source of unique rule ids
pub trait RuleIdGenerator: Send + Sync {
    fn next_id(&self, origin: RuleOrigin) -> String;
}

/// Monotonic counter shared by both origins
///
/// Produces `rule_0001`, `rule_regex_0002`, `rule_0003`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicUsize,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after `issued` ids
    pub fn starting_after(issued: usize) -> Self {
        Self {
            counter: AtomicUsize::new(issued),
        }
    }

    pub fn issued(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }
}

impl RuleIdGenerator for SequentialIdGenerator {
    fn next_id(&self, origin: RuleOrigin) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        match origin {
            RuleOrigin::Pattern => format!("rule_{:04}", n),
            RuleOrigin::Regex => format!("rule_regex_{:04}", n),
        }
    }
}

/// Lowercase and replace spaces with underscores
pub fn normalize_label(text: &str) -> String {
    text.replace(' ', "_").to_lowercase()
}

/// Node id for a recognised entity: `FREQUENCY_121.5_mhz`
pub fn entity_node_id(kind: &str, text: &str) -> String {
    format!("{}_{}", kind, normalize_label(text))
}

/// Node id for a relation-triple endpoint: `entity_jfacc`
pub fn related_entity_node_id(text: &str) -> String {
    format!("entity_{}", normalize_label(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_share_counter() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id(RuleOrigin::Pattern), "rule_0001");
        assert_eq!(ids.next_id(RuleOrigin::Regex), "rule_regex_0002");
        assert_eq!(ids.next_id(RuleOrigin::Pattern), "rule_0003");
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn test_independent_generators_do_not_collide_with_themselves() {
        let a = SequentialIdGenerator::new();
        let b = SequentialIdGenerator::starting_after(100);
        assert_eq!(a.next_id(RuleOrigin::Pattern), "rule_0001");
        assert_eq!(b.next_id(RuleOrigin::Pattern), "rule_0101");
    }

    #[test]
    fn test_node_ids_are_deterministic() {
        assert_eq!(normalize_label("EMS Operations"), "ems_operations");
        assert_eq!(
            entity_node_id("FREQUENCY", "121.5 MHz"),
            "FREQUENCY_121.5_mhz"
        );
        assert_eq!(
            related_entity_node_id("Spectrum Manager"),
            "entity_spectrum_manager"
        );
        assert_eq!(
            entity_node_id("AUTHORITY", "JFACC"),
            entity_node_id("AUTHORITY", "JFACC")
        );
    }
}
