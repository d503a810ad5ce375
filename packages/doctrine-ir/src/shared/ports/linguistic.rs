//! Linguistic annotation port
//!
//! Sentence segmentation plus per-token lemma / part-of-speech tagging.
//! The entity and rule matchers are written purely against this contract,
//! so any tagger that can fill a `Token` can be plugged in.

use crate::shared::models::{SentenceSpan, Token};

/// Tokenizer + tagger + sentence splitter
///
/// Offsets in returned values are byte offsets into the `text` argument.
pub trait LinguisticAnnotator: Send + Sync {
    /// Sentence boundaries, in text order, non-overlapping
    fn sentences(&self, text: &str) -> Vec<SentenceSpan>;

    /// Tokens of `text`, in text order
    fn annotate(&self, text: &str) -> Vec<Token>;
}
