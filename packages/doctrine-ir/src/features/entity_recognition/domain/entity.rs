//! Entity span and kind
//!
//! Offsets are char offsets into the annotated text, half-open `[start, end)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::models::DoctrineError;

/// Entity kind enumeration
///
/// The last four are only produced by the acronym dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Frequency,
    FrequencyRange,
    EmsEquipment,
    EmsOperation,
    Authority,
    ElectronicAttack,
    ElectronicProtection,
    ElectronicSupport,
    ElectronicWarfare,
}

impl EntityKind {
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Frequency,
        EntityKind::FrequencyRange,
        EntityKind::EmsEquipment,
        EntityKind::EmsOperation,
        EntityKind::Authority,
        EntityKind::ElectronicAttack,
        EntityKind::ElectronicProtection,
        EntityKind::ElectronicSupport,
        EntityKind::ElectronicWarfare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Frequency => "FREQUENCY",
            EntityKind::FrequencyRange => "FREQUENCY_RANGE",
            EntityKind::EmsEquipment => "EMS_EQUIPMENT",
            EntityKind::EmsOperation => "EMS_OPERATION",
            EntityKind::Authority => "AUTHORITY",
            EntityKind::ElectronicAttack => "ELECTRONIC_ATTACK",
            EntityKind::ElectronicProtection => "ELECTRONIC_PROTECTION",
            EntityKind::ElectronicSupport => "ELECTRONIC_SUPPORT",
            EntityKind::ElectronicWarfare => "ELECTRONIC_WARFARE",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DoctrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = EntityKind::ALL.iter().map(|k| k.as_str()).collect();
                DoctrineError::unknown_variant("entity kind", s, &valid)
            })
    }
}

/// Recognised entity span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityKind,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
    pub context: String,
}

impl Entity {
    /// Entity with confidence 1.0 and no context
    pub fn new(text: impl Into<String>, label: EntityKind, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
            confidence: 1.0,
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Span length in chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && self.end > other.start
    }
}
