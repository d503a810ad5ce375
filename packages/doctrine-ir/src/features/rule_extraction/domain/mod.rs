//! Rule extraction domain models

pub mod conflict;
pub mod rule;

pub use conflict::{detect_conflicts, rule_similarity, ConflictKind, RuleConflict};
pub use rule::{DeonticKind, Rule, RuleStatistics};
