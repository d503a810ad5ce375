//! Shared models

mod document;
mod error;
mod token;

pub use document::{Document, DocumentSection};
pub use error::{DoctrineError, ErrorKind, Result};
pub use token::{PartOfSpeech, SentenceSpan, Token};

// Graph value objects live in the storage crate and are shared as-is
pub use doctrine_storage::{Edge, Node, NodeId, PropertyMap, Value};
