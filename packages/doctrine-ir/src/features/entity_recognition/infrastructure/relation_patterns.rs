//! Relation templates over raw text

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::entity_recognition::domain::{RelationKind, RelationTriple};
use crate::shared::utils::CharIndex;

const RELATION_CONFIDENCE: f64 = 0.8;
const RELATION_CONTEXT: usize = 30;

lazy_static! {
    static ref RELATION_PATTERNS: Vec<(Regex, RelationKind)> = vec![
        (
            Regex::new(r"(?i)(\w+)\s+operates?\s+on\s+(\d+(?:\.\d+)?\s*(?:MHz|GHz|KHz|Hz))")
                .expect("operates-on regex is valid"),
            RelationKind::OperatesOn,
        ),
        (
            Regex::new(r"(?i)(\w+)\s+jams?\s+(\w+)").expect("jams regex is valid"),
            RelationKind::Jams,
        ),
        (
            Regex::new(r"(?i)(\w+)\s+coordinates?\s+(\w+)").expect("coordinates regex is valid"),
            RelationKind::Coordinates,
        ),
        (
            Regex::new(r"(?i)(\w+)\s+controls?\s+(\w+)").expect("controls regex is valid"),
            RelationKind::Controls,
        ),
    ];
}

/// All template matches, grouped by template in the order above
pub fn match_relations(text: &str) -> Vec<RelationTriple> {
    let index = CharIndex::new(text);
    let mut triples = Vec::new();
    for (pattern, predicate) in RELATION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(subject), Some(object)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let (start, end) = (index.char_offset(whole.start()), index.char_offset(whole.end()));
            triples.push(RelationTriple {
                subject: subject.as_str().to_string(),
                predicate: *predicate,
                object: object.as_str().to_string(),
                confidence: RELATION_CONFIDENCE,
                context: index.window(start, end, RELATION_CONTEXT).to_string(),
            });
        }
    }
    triples
}
