//! Extraction results → graph elements

use crate::features::entity_recognition::domain::{Entity, RelationTriple};
use crate::shared::models::{Edge, Node, PropertyMap, Value};
use crate::shared::utils::{entity_node_id, related_entity_node_id};

/// Kind given to relation endpoints that were not recognised as entities
pub const GENERIC_ENTITY_KIND: &str = "ENTITY";

/// Node for a recognised entity, keyed `KIND_normalized_text`
pub fn entity_node(entity: &Entity, document_id: &str) -> Node {
    let kind = entity.label.as_str();

    let mut properties = PropertyMap::new();
    properties.insert("original_text".to_string(), Value::from(entity.text.as_str()));
    properties.insert("context".to_string(), Value::from(entity.context.as_str()));
    properties.insert("start_pos".to_string(), Value::from(entity.start));
    properties.insert("end_pos".to_string(), Value::from(entity.end));

    Node::new(entity_node_id(kind, &entity.text), entity.text.as_str(), kind)
        .with_properties(properties)
        .with_source(document_id)
        .with_confidence(entity.confidence)
}

/// Generic node for one end of a relation triple, keyed `entity_normalized_text`
pub fn relation_endpoint_node(text: &str, document_id: &str) -> Node {
    let mut properties = PropertyMap::new();
    properties.insert("original_text".to_string(), Value::from(text));

    Node::new(related_entity_node_id(text), text, GENERIC_ENTITY_KIND)
        .with_properties(properties)
        .with_source(document_id)
}

/// Edge between the two endpoint nodes of `triple`
pub fn relation_edge(triple: &RelationTriple, document_id: &str) -> Edge {
    let mut properties = PropertyMap::new();
    properties.insert("context".to_string(), Value::from(triple.context.as_str()));
    properties.insert("source_document".to_string(), Value::from(document_id));

    Edge::new(
        related_entity_node_id(&triple.subject),
        related_entity_node_id(&triple.object),
        triple.predicate.as_str(),
    )
    .with_properties(properties)
    .with_confidence(triple.confidence)
}
