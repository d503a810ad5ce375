//! Token-level linguistic annotation types
//!
//! These are the values exchanged across the `LinguisticAnnotator` port.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags (Universal Dependencies subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    X,
}

impl PartOfSpeech {
    /// NOUN or PROPN
    pub fn is_nominal(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Propn)
    }
}

/// Annotated token
///
/// `start`/`end` are byte offsets into the text that was annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stopword: bool,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Sentence boundary as a half-open byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Sentence text; empty when the span does not fit `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}
