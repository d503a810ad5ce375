//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Unknown field in YAML
    #[error("Unknown field '{field}' in section '{section}'. {suggestion}")]
    UnknownField {
        field: String,
        section: String,
        suggestion: String,
        valid_fields: Vec<String>,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Create an unknown field error with suggestion
    pub fn unknown_field_with_suggestion(
        field: impl Into<String>,
        section: impl Into<String>,
        valid_fields: Vec<String>,
    ) -> Self {
        let field = field.into();
        let suggestion = find_closest_match(&field, &valid_fields);

        Self::UnknownField {
            field,
            section: section.into(),
            suggestion,
            valid_fields,
        }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[String]) -> String {
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No valid fields available".to_string(),
    }
}

/// Levenshtein distance over chars
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, c1) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in b.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("min_confidence", "min_confidence"), 0);
        assert_eq!(levenshtein_distance("min_confidnce", "min_confidence"), 1);
    }

    #[test]
    fn test_levenshtein_edge_cases() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("a", "b"), 1);
    }

    #[test]
    fn test_closest_match() {
        let valid_fields = vec![
            "min_confidence".to_string(),
            "min_sentence_chars".to_string(),
        ];

        let suggestion = find_closest_match("min_confidense", &valid_fields);
        assert!(suggestion.contains("min_confidence"));
    }

    #[test]
    fn test_closest_match_empty_candidates() {
        let suggestion = find_closest_match("database_path", &[]);
        assert!(suggestion.contains("No valid fields"));
    }

    #[test]
    fn test_error_formatting() {
        let err = ConfigError::range_with_hint(
            "knowledge_graph.default_max_path_length",
            0,
            1,
            10,
            "Path search needs at least one edge",
        );

        let msg = err.to_string();
        assert!(msg.contains("default_max_path_length"));
        assert!(msg.contains("1..=10"));
        assert!(msg.contains("at least one edge"));
    }

    #[test]
    fn test_unknown_field_error() {
        let valid = vec!["database_path".to_string(), "default_max_path_length".to_string()];
        let err = ConfigError::unknown_field_with_suggestion("databse_path", "knowledge_graph", valid);

        let msg = err.to_string();
        assert!(msg.contains("databse_path"));
        assert!(msg.contains("knowledge_graph"));
        assert!(msg.contains("Did you mean 'database_path'?"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };

        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }

    #[test]
    fn test_missing_version_error() {
        let msg = ConfigError::MissingVersion.to_string();
        assert!(msg.contains("version: 1"));
    }
}
