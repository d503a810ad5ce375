//! Deontic cue patterns over tagged tokens
//!
//! A match is a token span `[start, end)` covering the modal cue and the
//! verb that licenses it, e.g. `must not transmit` or `are prohibited from transmitting`.

use crate::features::rule_extraction::domain::DeonticKind;
use crate::shared::models::{PartOfSpeech, Token};

#[derive(Debug, Clone, Copy)]
enum Cue {
    LemmaIn(&'static [&'static str]),
    Verb,
}

impl Cue {
    fn accepts(&self, token: &Token) -> bool {
        match self {
            Cue::LemmaIn(lemmas) => lemmas.iter().any(|l| l.eq_ignore_ascii_case(&token.lemma)),
            Cue::Verb => token.pos == PartOfSpeech::Verb,
        }
    }
}

use Cue::{LemmaIn, Verb};

const BE: Cue = LemmaIn(&["be"]);
const TO: Cue = LemmaIn(&["to"]);
const NOT: Cue = LemmaIn(&["not"]);

const PATTERNS: &[(DeonticKind, &[Cue])] = &[
    // X must|shall|will VERB
    (DeonticKind::Obligation, &[LemmaIn(&["must", "shall", "will"]), Verb]),
    // X is required to VERB
    (DeonticKind::Obligation, &[BE, LemmaIn(&["require"]), TO, Verb]),
    // X shall ensure
    (DeonticKind::Obligation, &[LemmaIn(&["shall"]), LemmaIn(&["ensure"])]),
    // X may|can VERB
    (DeonticKind::Permission, &[LemmaIn(&["may", "can"]), Verb]),
    // X is authorized|allowed to VERB
    (DeonticKind::Permission, &[BE, LemmaIn(&["authorize", "allow"]), TO, Verb]),
    // X has permission to VERB
    (DeonticKind::Permission, &[LemmaIn(&["have"]), LemmaIn(&["permission"]), TO, Verb]),
    // X must|shall not VERB
    (DeonticKind::Prohibition, &[LemmaIn(&["must", "shall"]), NOT, Verb]),
    // X is prohibited|forbidden from VERB
    (DeonticKind::Prohibition, &[BE, LemmaIn(&["prohibit", "forbid"]), LemmaIn(&["from"]), Verb]),
    // X cannot VERB
    (DeonticKind::Prohibition, &[LemmaIn(&["can"]), NOT, Verb]),
];

/// Condition markers; the condition runs from the first one to sentence end
const CONDITION_MARKERS: &[&str] = &["if", "when", "unless", "provided", "except", "during"];

/// Lemmas skipped by the sentence-wide action fallback
const LIGHT_VERBS: &[&str] = &["be", "have", "do"];

/// Tokens before the cue searched for a subject
const SUBJECT_WINDOW: usize = 10;
/// Tokens after the cue searched for an action
const ACTION_WINDOW: usize = 5;

/// A deontic cue found in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeonticMatch {
    pub kind: DeonticKind,
    pub start: usize,
    pub end: usize,
}

/// Every pattern match at every position, by start then pattern order
pub fn find_deontic_matches(tokens: &[Token]) -> Vec<DeonticMatch> {
    let mut matches = Vec::new();
    for start in 0..tokens.len() {
        for (kind, cues) in PATTERNS {
            let end = start + cues.len();
            if end > tokens.len() {
                continue;
            }
            let hit = cues
                .iter()
                .zip(&tokens[start..end])
                .all(|(cue, token)| cue.accepts(token));
            if hit {
                matches.push(DeonticMatch {
                    kind: *kind,
                    start,
                    end,
                });
            }
        }
    }
    matches
}

/// Subject / action / object / condition of one deontic match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleComponents {
    pub subject: String,
    pub action: String,
    pub object: String,
    pub condition: String,
}

impl RuleComponents {
    /// `0.5 + 0.2·[|subject|>1] + 0.2·[|action|>2] + 0.1·[|object|>1]`, capped at 1.0
    pub fn confidence(&self) -> f64 {
        let mut tenths: u32 = 5;
        if self.subject.chars().count() > 1 {
            tenths += 2;
        }
        if self.action.chars().count() > 2 {
            tenths += 2;
        }
        if self.object.chars().count() > 1 {
            tenths += 1;
        }
        (f64::from(tenths) / 10.0).min(1.0)
    }
}

fn is_content_noun(token: &Token) -> bool {
    token.pos.is_nominal() && !token.is_stopword
}

/// Decompose the sentence around `m`; `None` when no action verb exists
///
/// `tokens` must come from annotating `sentence`.
pub fn extract_components(
    sentence: &str,
    tokens: &[Token],
    m: &DeonticMatch,
) -> Option<RuleComponents> {
    let action = find_action(tokens, m.end)?;

    let window_start = m.start.saturating_sub(SUBJECT_WINDOW);
    let subjects: Vec<&str> = tokens[window_start..m.start]
        .iter()
        .filter(|t| is_content_noun(t))
        .map(|t| t.text.as_str())
        .collect();
    let subject = if subjects.is_empty() {
        "entity".to_string()
    } else {
        subjects[subjects.len().saturating_sub(2)..].join(" ")
    };

    let mut verb_seen = false;
    let mut objects = Vec::new();
    for token in &tokens[m.end.min(tokens.len())..] {
        if token.pos == PartOfSpeech::Verb {
            verb_seen = true;
        } else if verb_seen && is_content_noun(token) {
            objects.push(token.text.as_str());
        }
    }
    let object = objects.iter().take(3).copied().collect::<Vec<_>>().join(" ");

    let condition = tokens
        .iter()
        .position(|t| {
            let lower = t.lower();
            CONDITION_MARKERS.iter().any(|marker| *marker == lower)
        })
        .and_then(|i| sentence.get(tokens[i].start..))
        .map(|rest| rest.trim_end().to_string())
        .unwrap_or_default();

    Some(RuleComponents {
        subject,
        action,
        object,
        condition,
    })
}

fn find_action(tokens: &[Token], after: usize) -> Option<String> {
    let window_end = (after + ACTION_WINDOW).min(tokens.len());
    let near = tokens
        .get(after..window_end)
        .and_then(|window| window.iter().find(|t| t.pos == PartOfSpeech::Verb));
    let token = near.or_else(|| {
        tokens.iter().find(|t| {
            t.pos == PartOfSpeech::Verb && !LIGHT_VERBS.iter().any(|l| *l == t.lemma)
        })
    })?;
    if token.lemma.is_empty() {
        None
    } else {
        Some(token.lemma.clone())
    }
}
