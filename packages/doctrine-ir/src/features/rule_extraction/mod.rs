//! Rule extraction feature
//!
//! ```text
//! text ─▶ sentences ─┬─▶ tokens ─▶ deontic cues ─▶ components ─┐
//!                    └─▶ canonical regex phrasings ─────────────┤
//!                                                               ▼
//!                                   dedup by signature ─▶ confidence floor
//! ```
//!
//! Conflict detection is a pure function over any rule slice.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::RuleExtractor;
pub use domain::{
    detect_conflicts, rule_similarity, ConflictKind, DeonticKind, Rule, RuleConflict,
    RuleStatistics,
};
