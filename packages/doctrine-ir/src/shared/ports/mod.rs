//! Ports (interfaces) consumed by the extraction features

mod linguistic;

pub use linguistic::LinguisticAnnotator;
