//! Subject-predicate-object relation triples

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::models::DoctrineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    OperatesOn,
    Jams,
    Coordinates,
    Controls,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::OperatesOn,
        RelationKind::Jams,
        RelationKind::Coordinates,
        RelationKind::Controls,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::OperatesOn => "OPERATES_ON",
            RelationKind::Jams => "JAMS",
            RelationKind::Coordinates => "COORDINATES",
            RelationKind::Controls => "CONTROLS",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = DoctrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = RelationKind::ALL.iter().map(|k| k.as_str()).collect();
                DoctrineError::unknown_variant("relation kind", s, &valid)
            })
    }
}

/// Relation found in raw text
///
/// Subject and object are the matched words, not anchored to entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationTriple {
    pub subject: String,
    pub predicate: RelationKind,
    pub object: String,
    pub confidence: f64,
    pub context: String,
}
