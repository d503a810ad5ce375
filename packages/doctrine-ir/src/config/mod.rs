//! Configuration
//!
//! ```rust,ignore
//! use doctrine_ir::config::DoctrineConfig;
//!
//! // Defaults
//! let config = DoctrineConfig::default();
//!
//! // Versioned YAML
//! let config = DoctrineConfig::from_yaml("doctrine.yaml")?;
//! ```
//!
//! Pattern vocabularies are compiled in and not configurable.

pub mod doctrine_config;
pub mod error;
pub mod io;

// Re-exports
pub use doctrine_config::{DoctrineConfig, KnowledgeGraphConfig, RuleExtractionConfig};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
