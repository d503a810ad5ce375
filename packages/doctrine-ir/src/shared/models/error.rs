//! Error types for the doctrine-ir crate
//!
//! Features:
//! - Categorized error kinds for boundary parsing, storage and config
//! - Optional document context
//! - Source error chaining

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown kind/filter strings presented at the boundary
    InvalidArgument,
    /// Durable store errors (database, serialization)
    Storage,
    /// Configuration errors
    Config,
    /// IO errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Storage => "storage",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct DoctrineError {
    pub kind: ErrorKind,
    pub message: String,
    pub document: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DoctrineError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            document: None,
            source: None,
        }
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Unknown value for a named closed set, e.g. `unknown_variant("deontic kind", "must")`
    pub fn unknown_variant(what: &str, value: &str, valid: &[&str]) -> Self {
        Self::invalid_argument(format!(
            "Unknown {} '{}'. Valid values: {}",
            what,
            value,
            valid.join(", ")
        ))
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }
}

impl fmt::Display for DoctrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref document) = self.document {
            write!(f, " in {}", document)?;
        }
        Ok(())
    }
}

impl std::error::Error for DoctrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DoctrineError>;

impl From<doctrine_storage::StorageError> for DoctrineError {
    fn from(err: doctrine_storage::StorageError) -> Self {
        DoctrineError::storage(format!("Graph store error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for DoctrineError {
    fn from(err: serde_json::Error) -> Self {
        DoctrineError::storage(format!("JSON serialization error: {}", err)).with_source(err)
    }
}

impl From<std::io::Error> for DoctrineError {
    fn from(err: std::io::Error) -> Self {
        DoctrineError::new(ErrorKind::IO, format!("IO error: {}", err)).with_source(err)
    }
}

impl From<crate::config::ConfigError> for DoctrineError {
    fn from(err: crate::config::ConfigError) -> Self {
        DoctrineError::config(err.to_string()).with_source(err)
    }
}
