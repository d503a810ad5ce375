//! Linguistic annotation adapter
//!
//! `HeuristicAnnotator` implements the `LinguisticAnnotator` port with a
//! fixed lexicon and suffix rules. It is good enough for doctrine prose;
//! a statistical tagger can replace it behind the same trait.

mod heuristic_annotator;
mod lexicon;

pub use heuristic_annotator::HeuristicAnnotator;
