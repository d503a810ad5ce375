//! Feature modules
//!
//! Each feature follows the domain / infrastructure / application split.

pub mod entity_recognition;
pub mod knowledge_graph;
pub mod linguistic;
pub mod rule_extraction;
