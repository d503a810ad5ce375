//! Lexicon-driven reference tagger
//!
//! Deterministic adapter for the `LinguisticAnnotator` port. Tags are
//! assigned left to right, so each decision can look at the tags already
//! given to the previous tokens:
//!
//! 1. Punctuation, numbers
//! 2. Closed-class words (modals, auxiliaries, determiners, ...)
//! 3. Known domain verbs, with noun/verb disambiguation for words like `report`
//! 4. Unknown lowercase word right after a modal (or `to` after `required`) → VERB
//! 5. Unknown `-ing` / `-ed` forms → VERB
//! 6. Capitalised → PROPN, adjective list → ADJ, everything else → NOUN

use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon;
use crate::shared::models::{PartOfSpeech, SentenceSpan, Token};
use crate::shared::ports::LinguisticAnnotator;

lazy_static! {
    static ref TOKEN_RE: Regex =
        Regex::new(r"\d+(?:\.\d+)?|\p{L}+(?:'\p{L}+)?|\S").expect("token regex is valid");
    static ref SENTENCE_BREAK_RE: Regex =
        Regex::new(r#"([.!?]+["')\]]*)\s+|\n[ \t]*\n"#).expect("sentence regex is valid");
}

/// Reference `LinguisticAnnotator`
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// Split into `(text, start, end)` pieces, with `cannot`/`n't` contractions separated
    fn tokenize(text: &str) -> Vec<(&str, usize, usize)> {
        let mut pieces = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            let word = m.as_str();
            let negated = word.len() > 3
                && word
                    .get(word.len() - 3..)
                    .map_or(false, |tail| tail.eq_ignore_ascii_case("n't"));
            if word.eq_ignore_ascii_case("cannot") {
                pieces.push((&word[..3], m.start(), m.start() + 3));
                pieces.push((&word[3..], m.start() + 3, m.end()));
            } else if negated {
                let split = word.len() - 3;
                pieces.push((&word[..split], m.start(), m.start() + split));
                pieces.push((&word[split..], m.start() + split, m.end()));
            } else {
                pieces.push((word, m.start(), m.end()));
            }
        }
        pieces
    }

    fn tag(&self, text: &str, lower: &str, previous: &[Token]) -> (PartOfSpeech, String) {
        let first = match text.chars().next() {
            Some(c) => c,
            None => return (PartOfSpeech::X, String::new()),
        };
        if !first.is_alphanumeric() {
            return (PartOfSpeech::Punct, text.to_string());
        }
        if first.is_numeric() {
            return (PartOfSpeech::Num, text.to_string());
        }

        let prev = previous.last();
        let prev2 = previous.len().checked_sub(2).map(|i| &previous[i]);

        let all_caps = text.chars().count() >= 2 && text.chars().all(|c| c.is_uppercase());
        if all_caps && !lexicon::is_modal(lower) && lower != "not" {
            return (PartOfSpeech::Propn, text.to_string());
        }

        if let Some(contracted) = contraction_base(lower) {
            return (PartOfSpeech::Aux, contracted.to_string());
        }
        if let Some((pos, lemma)) = lexicon::closed_class(lower) {
            return (pos, lemma.to_string());
        }

        if let Some(lemma) = lexicon::verb_lemma(lower) {
            if !lexicon::is_noun_verb(&lemma) || verb_context(lower, &lemma, prev) {
                return (PartOfSpeech::Verb, lemma);
            }
            return (PartOfSpeech::Noun, lexicon::noun_lemma(lower));
        }

        let lowercase_word = first.is_lowercase();
        if lowercase_word && expects_verb(prev, prev2) {
            return (PartOfSpeech::Verb, lower.to_string());
        }
        if lowercase_word && looks_inflected(lower) {
            return (PartOfSpeech::Verb, lexicon::guess_verb_lemma(lower));
        }
        if first.is_uppercase() {
            return (PartOfSpeech::Propn, text.to_string());
        }
        if lexicon::is_adjective(lower) {
            return (PartOfSpeech::Adj, lower.to_string());
        }
        (PartOfSpeech::Noun, lexicon::noun_lemma(lower))
    }
}

impl LinguisticAnnotator for HeuristicAnnotator {
    fn sentences(&self, text: &str) -> Vec<SentenceSpan> {
        let mut spans = Vec::new();
        let mut cursor = 0;
        for caps in SENTENCE_BREAK_RE.captures_iter(text) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let end = match caps.get(1) {
                Some(terminal) => terminal.end(),
                None => whole.start(),
            };
            push_trimmed(text, cursor, end, &mut spans);
            cursor = whole.end();
        }
        push_trimmed(text, cursor, text.len(), &mut spans);
        spans
    }

    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for (piece, start, end) in Self::tokenize(text) {
            let lower = piece.to_lowercase();
            let (pos, lemma) = self.tag(piece, &lower, &tokens);
            tokens.push(Token {
                text: piece.to_string(),
                lemma,
                pos,
                is_stopword: lexicon::is_stopword(&lower),
                start,
                end,
            });
        }
        tokens
    }
}

/// `ca` (from `can't`) → `can`, `wo` → `will`, `sha` → `shall`
fn contraction_base(lower: &str) -> Option<&'static str> {
    match lower {
        "ca" => Some("can"),
        "wo" => Some("will"),
        "sha" => Some("shall"),
        _ => None,
    }
}

/// A noun/verb word is a verb after modals, auxiliaries, `not`, `to`, pronouns,
/// or as a third-person form following a noun phrase (`JFACC controls`)
fn verb_context(lower: &str, lemma: &str, prev: Option<&Token>) -> bool {
    let prev = match prev {
        Some(p) => p,
        None => return true,
    };
    match prev.pos {
        PartOfSpeech::Aux | PartOfSpeech::Part | PartOfSpeech::Pron => true,
        PartOfSpeech::Adp => prev.lemma == "to",
        PartOfSpeech::Noun | PartOfSpeech::Propn => lower != lemma && lower.ends_with('s'),
        _ => false,
    }
}

/// Position right after a modal, `modal not`, or a licensed infinitival `to`
fn expects_verb(prev: Option<&Token>, prev2: Option<&Token>) -> bool {
    let prev = match prev {
        Some(p) => p,
        None => return false,
    };
    let is_modal = |t: &Token| t.pos == PartOfSpeech::Aux && lexicon::is_modal(&t.lemma);
    if is_modal(prev) {
        return true;
    }
    match prev2 {
        Some(before) if prev.lemma == "not" => is_modal(before),
        Some(before) if prev.lemma == "to" => {
            lexicon::INFINITIVE_LICENSORS
                .iter()
                .any(|licensor| *licensor == before.lemma)
        }
        _ => false,
    }
}

fn looks_inflected(lower: &str) -> bool {
    if lower.ends_with("eed") {
        return false;
    }
    let stem = lower
        .strip_suffix("ing")
        .or_else(|| lower.strip_suffix("ed"));
    matches!(stem, Some(s) if s.chars().count() >= 3)
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    if start >= end {
        return;
    }
    let slice = &text[start..end];
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    if leading + trailing >= slice.len() {
        return;
    }
    spans.push(SentenceSpan::new(start + leading, end - trailing));
}
