//! Pairwise rule conflict detection
//!
//! Only ordered kind pairs are candidates: the earlier rule must be an
//! OBLIGATION or PERMISSION and the later one a PROHIBITION. A PROHIBITION
//! that precedes the obligation it contradicts is not reported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::rule::{DeonticKind, Rule};
use crate::shared::models::DoctrineError;

// Scores are kept in hundredths so threshold comparisons are exact.

/// Similarity must exceed this for obligation vs prohibition
const OBLIGATION_THRESHOLD: u32 = 50;
/// Similarity must exceed this for permission vs prohibition
const PERMISSION_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    ObligationProhibition,
    PermissionProhibition,
}

impl ConflictKind {
    pub const ALL: [ConflictKind; 2] = [
        ConflictKind::ObligationProhibition,
        ConflictKind::PermissionProhibition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::ObligationProhibition => "OBLIGATION_PROHIBITION",
            ConflictKind::PermissionProhibition => "PERMISSION_PROHIBITION",
        }
    }

    /// Conflict kind for an ordered pair, if the pair can conflict at all
    ///
    /// Similarity is summed in exact hundredths, so a score of exactly 0.6
    /// does not exceed the permission threshold (float summing would yield
    /// 0.6000000000000001 and report it).
    pub fn for_pair(first: DeonticKind, second: DeonticKind) -> Option<Self> {
        match (first, second) {
            (DeonticKind::Obligation, DeonticKind::Prohibition) => {
                Some(ConflictKind::ObligationProhibition)
            }
            (DeonticKind::Permission, DeonticKind::Prohibition) => {
                Some(ConflictKind::PermissionProhibition)
            }
            _ => None,
        }
    }

    fn threshold(&self) -> u32 {
        match self {
            ConflictKind::ObligationProhibition => OBLIGATION_THRESHOLD,
            ConflictKind::PermissionProhibition => PERMISSION_THRESHOLD,
        }
    }

    fn describe(&self, first: &str, second: &str) -> String {
        match self {
            ConflictKind::ObligationProhibition => {
                format!("Rule {} requires action while rule {} prohibits it", first, second)
            }
            ConflictKind::PermissionProhibition => {
                format!("Rule {} permits action while rule {} prohibits it", first, second)
            }
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictKind {
    type Err = DoctrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConflictKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = ConflictKind::ALL.iter().map(|k| k.as_str()).collect();
                DoctrineError::unknown_variant("conflict kind", s, &valid)
            })
    }
}

/// Two rules that appear to contradict each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConflict {
    pub rule1_id: String,
    pub rule2_id: String,
    pub kind: ConflictKind,
    pub description: String,
    pub confidence: f64,
}

/// Weighted component overlap in `[0, 1]`
///
/// | component | exact | substring |
/// |-----------|-------|-----------|
/// | subject   | 0.3   | 0.2       |
/// | action    | 0.4   | 0.2       |
/// | object    | 0.3   | 0.1       |
pub fn rule_similarity(a: &Rule, b: &Rule) -> f64 {
    f64::from(similarity_points(a, b)) / 100.0
}

fn similarity_points(a: &Rule, b: &Rule) -> u32 {
    component_points(&a.subject, &b.subject, 30, 20)
        + component_points(&a.action, &b.action, 40, 20)
        + component_points(&a.object, &b.object, 30, 10)
}

fn component_points(a: &str, b: &str, exact: u32, partial: u32) -> u32 {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    if a == b {
        exact
    } else if a.contains(&b) || b.contains(&a) {
        partial
    } else {
        0
    }
}

fn check_pair(first: &Rule, second: &Rule) -> Option<RuleConflict> {
    let kind = ConflictKind::for_pair(first.kind, second.kind)?;
    let points = similarity_points(first, second);
    if points <= kind.threshold() {
        return None;
    }
    Some(RuleConflict {
        rule1_id: first.id.clone(),
        rule2_id: second.id.clone(),
        kind,
        description: kind.describe(&first.id, &second.id),
        confidence: f64::from(points) / 100.0,
    })
}

/// All conflicts over index pairs `i < j`, in scan order
pub fn detect_conflicts(rules: &[Rule]) -> Vec<RuleConflict> {
    let mut conflicts = Vec::new();
    for (i, first) in rules.iter().enumerate() {
        for second in &rules[i + 1..] {
            if let Some(conflict) = check_pair(first, second) {
                conflicts.push(conflict);
            }
        }
    }
    conflicts
}
