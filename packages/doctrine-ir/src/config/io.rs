//! Configuration I/O (YAML schema)
//!
//! Loading itself lives on `DoctrineConfig`; this module owns the on-disk
//! shape and the field check that runs before deserialisation.

use serde::{Deserialize, Serialize};

use super::doctrine_config::{KnowledgeGraphConfig, RuleExtractionConfig};
use super::error::{ConfigError, ConfigResult};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version, required
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<KnowledgeGraphConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_extraction: Option<RuleExtractionConfig>,
}

const TOP_LEVEL_FIELDS: &[&str] = &["version", "knowledge_graph", "rule_extraction"];
const KNOWLEDGE_GRAPH_FIELDS: &[&str] = &["database_path", "default_max_path_length"];
const RULE_EXTRACTION_FIELDS: &[&str] = &["min_confidence", "min_sentence_chars"];

/// Reject unknown keys with a spelling suggestion
pub fn check_fields(document: &serde_yaml::Value) -> ConfigResult<()> {
    let Some(root) = document.as_mapping() else {
        return Ok(());
    };
    check_section(root, "root", TOP_LEVEL_FIELDS)?;

    for (section, fields) in [
        ("knowledge_graph", KNOWLEDGE_GRAPH_FIELDS),
        ("rule_extraction", RULE_EXTRACTION_FIELDS),
    ] {
        if let Some(mapping) = root.get(section).and_then(|v| v.as_mapping()) {
            check_section(mapping, section, fields)?;
        }
    }
    Ok(())
}

fn check_section(
    mapping: &serde_yaml::Mapping,
    section: &str,
    valid: &[&str],
) -> ConfigResult<()> {
    for key in mapping.keys() {
        let Some(name) = key.as_str() else {
            continue;
        };
        if !valid.contains(&name) {
            return Err(ConfigError::unknown_field_with_suggestion(
                name,
                section,
                valid.iter().map(|f| f.to_string()).collect(),
            ));
        }
    }
    Ok(())
}
