//! Utility modules shared across features
//!
//! - `id_generator`: rule ids and deterministic graph node ids
//! - `text`: char-boundary-safe context windows

pub mod id_generator;
pub mod text;

pub use id_generator::{
    entity_node_id, normalize_label, related_entity_node_id, RuleIdGenerator, RuleOrigin,
    SequentialIdGenerator,
};
pub use text::{token_window, CharIndex};
