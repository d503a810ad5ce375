//! Entity matchers
//!
//! Three independent sources of candidate spans:
//! - `LexicalPatternMatcher`: token sequences (equipment, operations, authorities, units, bands)
//! - `NumericRegexMatcher`: `<number><unit>` values and `<number>-<number><unit>` ranges
//! - `AcronymLookup`: fixed dictionary of 2-6 letter military acronyms
//!
//! Candidates may overlap each other; `resolve_overlaps` settles them.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::entity_recognition::domain::{Entity, EntityKind};
use crate::shared::models::Token;
use crate::shared::utils::{token_window, CharIndex};

/// Token radius of lexical match context
const TOKEN_CONTEXT: usize = 5;
/// Char radius of regex match context
const CHAR_CONTEXT: usize = 20;

const UNITS: &[&str] = &["mhz", "ghz", "khz", "hz"];
const BANDS: &[&str] = &["hf", "vhf", "uhf", "shf", "ehf"];

lazy_static! {
    static ref FREQUENCY_RE: Regex = Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(MHz|GHz|kHz|Hz)\b")
        .expect("frequency regex is valid");
    static ref FREQUENCY_RANGE_RE: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*[-–—]\s*(\d+(?:\.\d+)?)\s*(MHz|GHz|kHz|Hz)\b")
            .expect("range regex is valid");
    static ref ACRONYM_RE: Regex = Regex::new(r"\b([A-Z]{2,6})\b").expect("acronym regex is valid");
    static ref ACRONYMS: HashMap<&'static str, EntityKind> = {
        let mut map = HashMap::new();
        map.insert("EA", EntityKind::ElectronicAttack);
        map.insert("EP", EntityKind::ElectronicProtection);
        map.insert("ES", EntityKind::ElectronicSupport);
        map.insert("EW", EntityKind::ElectronicWarfare);
        map.insert("SEAD", EntityKind::EmsOperation);
        map.insert("DEAD", EntityKind::EmsOperation);
        map.insert("ECM", EntityKind::EmsEquipment);
        map.insert("ECCM", EntityKind::EmsEquipment);
        map.insert("ESM", EntityKind::EmsEquipment);
        map.insert("ELINT", EntityKind::EmsOperation);
        map.insert("COMINT", EntityKind::EmsOperation);
        map.insert("SIGINT", EntityKind::EmsOperation);
        map
    };
}

// ═══════════════════════════════════════════════════════════════════════════
// Classifier set
// ═══════════════════════════════════════════════════════════════════════════

/// One matcher over an annotated text
#[derive(Debug, Clone)]
pub enum TokenClassifier {
    Lexical(LexicalPatternMatcher),
    Numeric(NumericRegexMatcher),
    Acronym(AcronymLookup),
}

impl TokenClassifier {
    /// The fixed matcher set, in union order
    pub fn standard_set() -> Vec<TokenClassifier> {
        vec![
            TokenClassifier::Lexical(LexicalPatternMatcher::new()),
            TokenClassifier::Numeric(NumericRegexMatcher),
            TokenClassifier::Acronym(AcronymLookup),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenClassifier::Lexical(_) => "lexical",
            TokenClassifier::Numeric(_) => "numeric",
            TokenClassifier::Acronym(_) => "acronym",
        }
    }

    /// Candidate spans; `tokens` must come from annotating `text`
    pub fn classify(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        match self {
            TokenClassifier::Lexical(m) => m.classify(text, tokens),
            TokenClassifier::Numeric(m) => m.classify(text),
            TokenClassifier::Acronym(m) => m.classify(text),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Lexical patterns
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
enum TokenTest {
    /// Lowercased text is one of
    LowerIn(&'static [&'static str]),
    /// Exact text is one of
    TextIn(&'static [&'static str]),
    /// Starts with a digit
    Number,
}

impl TokenTest {
    fn accepts(&self, token: &Token) -> bool {
        match self {
            TokenTest::LowerIn(words) => {
                let lower = token.lower();
                words.iter().any(|w| *w == lower)
            }
            TokenTest::TextIn(words) => words.iter().any(|w| *w == token.text),
            TokenTest::Number => token
                .text
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_digit()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    test: TokenTest,
    optional: bool,
}

const fn one(test: TokenTest) -> Step {
    Step {
        test,
        optional: false,
    }
}

const fn opt(test: TokenTest) -> Step {
    Step {
        test,
        optional: true,
    }
}

use TokenTest::{LowerIn, Number, TextIn};

#[derive(Debug, Clone, Copy)]
struct LexicalPattern {
    kind: EntityKind,
    steps: &'static [Step],
}

const LEXICAL_PATTERNS: &[LexicalPattern] = &[
    // Frequencies
    LexicalPattern {
        kind: EntityKind::Frequency,
        steps: &[opt(Number), one(LowerIn(UNITS))],
    },
    LexicalPattern {
        kind: EntityKind::FrequencyRange,
        steps: &[one(Number), one(TextIn(&["-"])), one(Number), one(LowerIn(UNITS))],
    },
    LexicalPattern {
        kind: EntityKind::Frequency,
        steps: &[one(LowerIn(BANDS))],
    },
    // Equipment
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[
            one(LowerIn(&["jammer", "jammers", "jamming"])),
            opt(LowerIn(&["system"])),
        ],
    },
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[one(LowerIn(&["radar", "radars"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[one(LowerIn(&["radio", "radios"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[
            one(LowerIn(&["antenna", "antennas"])),
            opt(LowerIn(&["system"])),
        ],
    },
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[one(LowerIn(&["transmitter", "transmitters"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsEquipment,
        steps: &[one(LowerIn(&["receiver", "receivers"]))],
    },
    // Operations
    LexicalPattern {
        kind: EntityKind::EmsOperation,
        steps: &[
            one(LowerIn(&["electronic"])),
            one(LowerIn(&["attack", "warfare", "protection"])),
        ],
    },
    LexicalPattern {
        kind: EntityKind::EmsOperation,
        steps: &[one(LowerIn(&["spectrum"])), one(LowerIn(&["management"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsOperation,
        steps: &[one(LowerIn(&["sead"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsOperation,
        steps: &[one(LowerIn(&["electromagnetic"])), one(LowerIn(&["warfare"]))],
    },
    LexicalPattern {
        kind: EntityKind::EmsOperation,
        steps: &[
            one(LowerIn(&["ems"])),
            one(LowerIn(&["operation", "operations"])),
        ],
    },
    // Authorities
    LexicalPattern {
        kind: EntityKind::Authority,
        steps: &[one(TextIn(&["JFACC", "JFC", "JEMSO"]))],
    },
    LexicalPattern {
        kind: EntityKind::Authority,
        steps: &[one(LowerIn(&["spectrum"])), one(LowerIn(&["manager"]))],
    },
    LexicalPattern {
        kind: EntityKind::Authority,
        steps: &[
            one(LowerIn(&["electronic"])),
            one(LowerIn(&["warfare"])),
            one(LowerIn(&["officer"])),
        ],
    },
    LexicalPattern {
        kind: EntityKind::Authority,
        steps: &[one(TextIn(&["EWO"]))],
    },
];

impl LexicalPattern {
    /// Every end index reachable from `start`; optional steps fork the match
    fn match_ends(&self, tokens: &[Token], start: usize) -> Vec<usize> {
        let mut positions = vec![start];
        for step in self.steps {
            let mut next = Vec::new();
            for &pos in &positions {
                if step.optional {
                    next.push(pos);
                }
                if pos < tokens.len() && step.test.accepts(&tokens[pos]) {
                    next.push(pos + 1);
                }
            }
            next.sort_unstable();
            next.dedup();
            positions = next;
            if positions.is_empty() {
                break;
            }
        }
        positions.retain(|&end| end > start);
        positions
    }
}

/// Token-sequence matcher over the fixed domain vocabulary
#[derive(Debug, Clone)]
pub struct LexicalPatternMatcher {
    patterns: &'static [LexicalPattern],
}

impl Default for LexicalPatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalPatternMatcher {
    pub fn new() -> Self {
        Self {
            patterns: LEXICAL_PATTERNS,
        }
    }

    /// All matches at all token positions, including shorter optional variants
    pub fn classify(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        let index = CharIndex::new(text);
        let mut entities = Vec::new();
        for start in 0..tokens.len() {
            for pattern in self.patterns {
                for end in pattern.match_ends(tokens, start) {
                    let (from, to) = (tokens[start].start, tokens[end - 1].end);
                    let Some(span_text) = text.get(from..to) else {
                        continue;
                    };
                    entities.push(
                        Entity::new(
                            span_text,
                            pattern.kind,
                            index.char_offset(from),
                            index.char_offset(to),
                        )
                        .with_context(token_window(text, tokens, start, end, TOKEN_CONTEXT)),
                    );
                }
            }
        }
        entities
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Regex matchers
// ═══════════════════════════════════════════════════════════════════════════

/// Frequency values and ranges found directly in the text
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRegexMatcher;

impl NumericRegexMatcher {
    pub fn classify(&self, text: &str) -> Vec<Entity> {
        let index = CharIndex::new(text);
        let values = FREQUENCY_RE
            .find_iter(text)
            .map(|m| (m, EntityKind::Frequency));
        let ranges = FREQUENCY_RANGE_RE
            .find_iter(text)
            .map(|m| (m, EntityKind::FrequencyRange));

        values
            .chain(ranges)
            .map(|(m, kind)| regex_entity(&index, m, kind))
            .collect()
    }
}

fn regex_entity(index: &CharIndex<'_>, m: regex::Match<'_>, kind: EntityKind) -> Entity {
    let (start, end) = (index.char_offset(m.start()), index.char_offset(m.end()));
    Entity::new(m.as_str(), kind, start, end).with_context(index.window(start, end, CHAR_CONTEXT))
}

/// Dictionary lookup of uppercase acronyms
#[derive(Debug, Clone, Copy, Default)]
pub struct AcronymLookup;

impl AcronymLookup {
    pub fn classify(&self, text: &str) -> Vec<Entity> {
        let index = CharIndex::new(text);
        ACRONYM_RE
            .find_iter(text)
            .filter_map(|m| {
                let kind = ACRONYMS.get(m.as_str())?;
                Some(regex_entity(&index, m, *kind))
            })
            .collect()
    }

    /// Kind for a known acronym
    pub fn lookup(acronym: &str) -> Option<EntityKind> {
        ACRONYMS.get(acronym).copied()
    }
}
