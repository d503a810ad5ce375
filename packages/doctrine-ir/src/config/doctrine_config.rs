//! DoctrineConfig
//!
//! Defaults reproduce the extraction and graph constants; a YAML file
//! overrides whole sections or single fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::io::{check_fields, ConfigFileV1, SUPPORTED_VERSIONS};

/// Graph store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnowledgeGraphConfig {
    /// SQLite database file
    pub database_path: PathBuf,
    /// Edge bound used by `find_paths` callers that take the default
    pub default_max_path_length: usize,
}

impl Default for KnowledgeGraphConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("data/processed/ems_knowledge.db"),
            default_max_path_length: 3,
        }
    }
}

impl KnowledgeGraphConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_max_path_length == 0 || self.default_max_path_length > 10 {
            return Err(ConfigError::range_with_hint(
                "knowledge_graph.default_max_path_length",
                self.default_max_path_length,
                1,
                10,
                "Path enumeration is exponential in this bound",
            ));
        }
        Ok(())
    }

    /// Builder: Set database path
    pub fn database_path(mut self, v: impl Into<PathBuf>) -> Self {
        self.database_path = v.into();
        self
    }

    /// Builder: Set default path bound
    pub fn default_max_path_length(mut self, v: usize) -> Self {
        self.default_max_path_length = v;
        self
    }
}

/// Rule extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleExtractionConfig {
    /// Rules below this confidence are dropped
    pub min_confidence: f64,
    /// Sentences whose trimmed length is at most this are skipped
    pub min_sentence_chars: usize,
}

impl Default for RuleExtractionConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.3,
            min_sentence_chars: 10,
        }
    }
}

impl RuleExtractionConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::range_with_hint(
                "rule_extraction.min_confidence",
                self.min_confidence,
                0.0,
                1.0,
                "Rule confidence is a probability-like score",
            ));
        }
        Ok(())
    }

    /// Builder: Set confidence floor
    pub fn min_confidence(mut self, v: f64) -> Self {
        self.min_confidence = v;
        self
    }

    /// Builder: Set sentence length floor
    pub fn min_sentence_chars(mut self, v: usize) -> Self {
        self.min_sentence_chars = v;
        self
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoctrineConfig {
    pub knowledge_graph: KnowledgeGraphConfig,
    pub rule_extraction: RuleExtractionConfig,
}

impl DoctrineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.knowledge_graph.validate()?;
        self.rule_extraction.validate()?;
        Ok(())
    }

    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)?;
        check_fields(&document)?;
        let file: ConfigFileV1 = serde_yaml::from_value(document)?;

        // Version check
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            knowledge_graph: file.knowledge_graph.unwrap_or_default(),
            rule_extraction: file.rule_extraction.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            knowledge_graph: Some(self.knowledge_graph.clone()),
            rule_extraction: Some(self.rule_extraction.clone()),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DoctrineConfig::default();
        assert_eq!(config.rule_extraction.min_confidence, 0.3);
        assert_eq!(config.rule_extraction.min_sentence_chars, 10);
        assert_eq!(config.knowledge_graph.default_max_path_length, 3);
        assert_eq!(
            config.knowledge_graph.database_path,
            PathBuf::from("data/processed/ems_knowledge.db")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
knowledge_graph:
  database_path: /tmp/ems.db
  default_max_path_length: 5
rule_extraction:
  min_confidence: 0.6
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = DoctrineConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.knowledge_graph.database_path, PathBuf::from("/tmp/ems.db"));
        assert_eq!(config.knowledge_graph.default_max_path_length, 5);
        assert_eq!(config.rule_extraction.min_confidence, 0.6);
        // unspecified field keeps its default
        assert_eq!(config.rule_extraction.min_sentence_chars, 10);
    }

    #[test]
    fn test_yaml_version_only() {
        let config = DoctrineConfig::from_yaml_str("version: 1\n").unwrap();
        assert_eq!(config, DoctrineConfig::default());
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = DoctrineConfig::from_yaml_str("rule_extraction:\n  min_confidence: 0.4\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = DoctrineConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_out_of_range() {
        let result = DoctrineConfig::from_yaml_str(
            "version: 1\nknowledge_graph:\n  default_max_path_length: 0\n",
        );
        assert!(matches!(result, Err(ConfigError::Range { .. })));

        let result =
            DoctrineConfig::from_yaml_str("version: 1\nrule_extraction:\n  min_confidence: 1.5\n");
        assert!(matches!(result, Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_yaml_unknown_field() {
        let result = DoctrineConfig::from_yaml_str(
            "version: 1\nrule_extraction:\n  min_confidense: 0.4\n",
        );
        assert!(matches!(result, Err(ConfigError::UnknownField { .. })));
    }

    #[test]
    fn test_yaml_missing_file() {
        let result = DoctrineConfig::from_yaml("/nonexistent/doctrine.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DoctrineConfig {
            knowledge_graph: KnowledgeGraphConfig::default().default_max_path_length(4),
            rule_extraction: RuleExtractionConfig::default().min_confidence(0.5),
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("default_max_path_length: 4"));

        let loaded = DoctrineConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_nan_confidence_rejected() {
        let config = RuleExtractionConfig::default().min_confidence(f64::NAN);
        assert!(config.validate().is_err());
    }
}
