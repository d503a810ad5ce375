//! Rule extraction application layer

mod rule_extractor;

pub use rule_extractor::RuleExtractor;
