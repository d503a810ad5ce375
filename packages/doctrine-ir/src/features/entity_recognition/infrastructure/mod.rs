//! Entity recognition infrastructure (matchers)

pub mod classifiers;
pub mod relation_patterns;

pub use classifiers::{AcronymLookup, LexicalPatternMatcher, NumericRegexMatcher, TokenClassifier};
pub use relation_patterns::match_relations;
