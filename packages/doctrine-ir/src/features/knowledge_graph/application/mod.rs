//! Knowledge graph application layer

mod graph_store;

pub use graph_store::{GraphStore, DEFAULT_MAX_PATH_LENGTH};
