//! Error types for doctrine-storage

use std::fmt;
use thiserror::Error;

/// Storage error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Database errors (SQLite)
    Database,
    /// Property blob serialization errors
    Serialization,
    /// Unique/foreign-key violations detected by the backend
    Constraint,
    /// Transaction errors
    Transaction,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Database => "database",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Constraint => "constraint",
            ErrorKind::Transaction => "transaction",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn duplicate_node(node_id: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Constraint,
            format!("Node already persisted: {}", node_id.into()),
        )
    }

    pub fn missing_endpoint(source: &str, target: &str) -> Self {
        Self::new(
            ErrorKind::Constraint,
            format!("Edge endpoint not persisted: {} -> {}", source, target),
        )
    }

    pub fn transaction(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transaction, message)
    }
}

// SQLite error conversions
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::database(format!("SQLite error: {}", err)).with_source(err)
    }
}

// JSON error conversions
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::new(ErrorKind::IO, format!("I/O error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    // ═══════════════════════════════════════════════════════════════════════
    // Error Construction Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_database_error_display() {
        let err = StorageError::database("Connection failed");
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.source.is_none());
        assert_eq!(format!("{}", err), "[database] Connection failed");
    }

    #[test]
    fn test_duplicate_node() {
        let err = StorageError::duplicate_node("AUTHORITY_jfacc");
        assert_eq!(err.kind, ErrorKind::Constraint);

        let msg = format!("{}", err);
        assert!(msg.contains("[constraint]"));
        assert!(msg.contains("AUTHORITY_jfacc"));
    }

    #[test]
    fn test_missing_endpoint() {
        let err = StorageError::missing_endpoint("a", "b");
        assert_eq!(err.kind, ErrorKind::Constraint);
        assert!(err.message.contains("a -> b"));
    }

    #[test]
    fn test_with_source() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = StorageError::database("DB file missing").with_source(io_err);

        let source = err.source().unwrap();
        assert!(source.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Database.as_str(), "database");
        assert_eq!(ErrorKind::Serialization.as_str(), "serialization");
        assert_eq!(ErrorKind::Constraint.as_str(), "constraint");
        assert_eq!(ErrorKind::Transaction.as_str(), "transaction");
        assert_eq!(ErrorKind::IO.as_str(), "io");
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Conversion Tests
    // ═══════════════════════════════════════════════════════════════════════

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_from_rusqlite_error() {
        let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.contains("SQLite error"));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
            .err()
            .unwrap();
        let err: StorageError = json_err.into();

        assert_eq!(err.kind, ErrorKind::Serialization);
        assert!(err.message.contains("JSON error"));
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(StorageError::transaction("ROLLBACK failed"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transaction);
    }
}
