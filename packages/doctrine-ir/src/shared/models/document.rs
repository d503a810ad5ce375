//! Document input model
//!
//! Produced by an external ingestion step (file-format parsing, section
//! segmentation). The core reads `content` and `filename` only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Section of an already-extracted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub level: u32,
}

/// Already-extracted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sections: Vec<DocumentSection>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Document {
    /// Create a document with no sections or metadata
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: String::new(),
            content: content.into(),
            sections: Vec::new(),
            metadata: HashMap::new(),
        }
    }
}
