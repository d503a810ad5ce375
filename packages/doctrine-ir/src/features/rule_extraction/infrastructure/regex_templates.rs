//! Canonical rule phrasings matched directly on sentence text
//!
//! Independent of tagging, so they still fire when the tagger misses a verb.

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::rule_extraction::domain::DeonticKind;

/// Confidence assigned to every template match
pub const TEMPLATE_CONFIDENCE: f64 = 0.7;

/// How the subject of a template match is found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubjectSource {
    FirstGroup,
    /// Impersonal phrasing ("it is prohibited to ...")
    Impersonal,
}

struct RuleTemplate {
    kind: DeonticKind,
    regex: Regex,
    subject: SubjectSource,
}

impl RuleTemplate {
    fn new(pattern: &str, kind: DeonticKind, subject: SubjectSource) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("rule template regex is valid"),
            subject,
        }
    }
}

lazy_static! {
    static ref TEMPLATES: Vec<RuleTemplate> = vec![
        // "Commanders must ensure ..."
        RuleTemplate::new(
            r"(?i)(\w+(?:\s+\w+)*)\s+(must|shall|will)\s+(ensure|verify|confirm)\s+(.+)",
            DeonticKind::Obligation,
            SubjectSource::FirstGroup,
        ),
        // "Personnel may not ..."
        RuleTemplate::new(
            r"(?i)(\w+(?:\s+\w+)*)\s+(may\s+not|cannot|shall\s+not)\s+(.+)",
            DeonticKind::Prohibition,
            SubjectSource::FirstGroup,
        ),
        // "Units are authorized to ..."
        RuleTemplate::new(
            r"(?i)(\w+(?:\s+\w+)*)\s+(?:are|is)\s+(authorized|permitted|allowed)\s+to\s+(.+)",
            DeonticKind::Permission,
            SubjectSource::FirstGroup,
        ),
        // "It is prohibited to ..."
        RuleTemplate::new(
            r"(?i)it\s+is\s+(prohibited|forbidden)\s+to\s+(.+)",
            DeonticKind::Prohibition,
            SubjectSource::Impersonal,
        ),
        // "Frequency assignments must be coordinated ..."
        RuleTemplate::new(
            r"(?i)(frequency\s+\w+)\s+(must|shall)\s+be\s+(.+)",
            DeonticKind::Obligation,
            SubjectSource::FirstGroup,
        ),
        // "EMS operations require ..."
        RuleTemplate::new(
            r"(?i)(EMS\s+operations?|Electronic\s+warfare)\s+(require|need)\s+(.+)",
            DeonticKind::Obligation,
            SubjectSource::FirstGroup,
        ),
    ];
}

/// One template hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatch {
    pub kind: DeonticKind,
    pub subject: String,
    pub action: String,
    /// Full matched text
    pub text: String,
}

/// Template hits in template order; hits with an empty action are dropped
pub fn match_templates(sentence: &str) -> Vec<TemplateMatch> {
    let mut found = Vec::new();
    for template in TEMPLATES.iter() {
        for caps in template.regex.captures_iter(sentence) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let action = caps
                .iter()
                .skip(1)
                .flatten()
                .last()
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            if action.is_empty() {
                continue;
            }
            let subject = match template.subject {
                SubjectSource::Impersonal => "entity".to_string(),
                SubjectSource::FirstGroup => caps
                    .get(1)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_else(|| "entity".to_string()),
            };
            found.push(TemplateMatch {
                kind: template.kind,
                subject,
                action,
                text: whole.as_str().to_string(),
            });
        }
    }
    found
}
