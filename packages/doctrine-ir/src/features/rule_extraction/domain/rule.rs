//! Deontic rule model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::shared::models::DoctrineError;

/// Deontic modality of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeonticKind {
    /// must, shall, will, required
    Obligation,
    /// may, can, allowed, authorized
    Permission,
    /// must not, shall not, prohibited, forbidden
    Prohibition,
}

impl DeonticKind {
    pub const ALL: [DeonticKind; 3] = [
        DeonticKind::Obligation,
        DeonticKind::Permission,
        DeonticKind::Prohibition,
    ];

    /// Lowercase name, as used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            DeonticKind::Obligation => "obligation",
            DeonticKind::Permission => "permission",
            DeonticKind::Prohibition => "prohibition",
        }
    }
}

impl fmt::Display for DeonticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeonticKind {
    type Err = DoctrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeonticKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = DeonticKind::ALL.iter().map(|k| k.as_str()).collect();
                DoctrineError::unknown_variant("deontic kind", s, &valid)
            })
    }
}

/// Rule extracted from doctrine text
///
/// `action` is never empty. Serialises to the export record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub kind: DeonticKind,
    pub subject: String,
    pub action: String,
    pub object: String,
    pub condition: String,
    pub text: String,
    pub confidence: f64,
    pub source_document: String,
    pub section: String,
}

impl Rule {
    /// Signature used for deduplication: kind + lowercase trimmed text
    pub fn signature(&self) -> (DeonticKind, String) {
        (self.kind, self.text.trim().to_lowercase())
    }
}

/// Aggregate counts over a rule collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleStatistics {
    pub total_rules: usize,
    pub obligations: usize,
    pub permissions: usize,
    pub prohibitions: usize,
    pub average_confidence: f64,
    pub documents_processed: usize,
}

impl RuleStatistics {
    pub fn from_rules(rules: &[Rule]) -> Self {
        let count = |kind: DeonticKind| rules.iter().filter(|r| r.kind == kind).count();
        let average_confidence = if rules.is_empty() {
            0.0
        } else {
            rules.iter().map(|r| r.confidence).sum::<f64>() / rules.len() as f64
        };
        let documents: HashSet<&str> = rules.iter().map(|r| r.source_document.as_str()).collect();

        Self {
            total_rules: rules.len(),
            obligations: count(DeonticKind::Obligation),
            permissions: count(DeonticKind::Permission),
            prohibitions: count(DeonticKind::Prohibition),
            average_confidence,
            documents_processed: documents.len(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn rule(id: &str, kind: DeonticKind, subject: &str, action: &str, object: &str) -> Rule {
        Rule {
            id: id.to_string(),
            kind,
            subject: subject.to_string(),
            action: action.to_string(),
            object: object.to_string(),
            condition: String::new(),
            text: format!("{} {} {}", subject, action, object),
            confidence: 0.9,
            source_document: "jp3-85.pdf".to_string(),
            section: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::rule;
    use super::*;
    use crate::shared::models::ErrorKind;

    #[test]
    fn test_deontic_kind_parse_is_case_insensitive() {
        assert_eq!(
            "PROHIBITION".parse::<DeonticKind>().unwrap(),
            DeonticKind::Prohibition
        );
        assert_eq!(
            "obligation".parse::<DeonticKind>().unwrap(),
            DeonticKind::Obligation
        );
    }

    #[test]
    fn test_unknown_deontic_kind_is_invalid_argument() {
        let err = "duty".parse::<DeonticKind>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_rule_serialises_lowercase_kind() {
        let permission = rule("rule_0001", DeonticKind::Permission, "units", "use", "radio");
        let json = serde_json::to_value(permission).unwrap();
        assert_eq!(json["kind"], "permission");
        assert_eq!(json["id"], "rule_0001");
        assert_eq!(json["source_document"], "jp3-85.pdf");
    }

    #[test]
    fn test_signature_normalises_text() {
        let mut a = rule("a", DeonticKind::Obligation, "x", "y", "z");
        let mut b = a.clone();
        a.text = "  Units MUST comply ".to_string();
        b.text = "units must comply".to_string();
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_statistics() {
        let mut rules = vec![
            rule("1", DeonticKind::Obligation, "a", "b", "c"),
            rule("2", DeonticKind::Prohibition, "a", "b", "c"),
            rule("3", DeonticKind::Prohibition, "a", "b", "c"),
        ];
        rules[2].source_document = "other.pdf".to_string();
        rules[2].confidence = 0.6;

        let stats = RuleStatistics::from_rules(&rules);
        assert_eq!(stats.total_rules, 3);
        assert_eq!(stats.obligations, 1);
        assert_eq!(stats.permissions, 0);
        assert_eq!(stats.prohibitions, 2);
        assert!((stats.average_confidence - 0.8).abs() < 1e-9);
        assert_eq!(stats.documents_processed, 2);
    }

    #[test]
    fn test_statistics_empty() {
        assert_eq!(RuleStatistics::from_rules(&[]), RuleStatistics::default());
    }
}
