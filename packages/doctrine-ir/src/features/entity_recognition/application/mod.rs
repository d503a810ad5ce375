//! Entity recognition application layer

mod entity_annotator;

pub use entity_annotator::EntityAnnotator;
