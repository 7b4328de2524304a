//! Recursive item construction with cycle detection.

use super::discovery::discover_properties;
use super::types::{ItemRecord, PropertyValue};
use super::value::resolve_scalar_value;
use crate::dom::{attribute_tokens, MarkupNode};

/// Build an [`ItemRecord`] from an `itemscope` element.
///
/// `ancestors` holds the item roots currently being built above `node`.
/// A nested item that is already on that path is replaced by
/// [`PropertyValue::CycleError`] instead of being built again. The stack is
/// restored before returning, so callers start each top-level item with an
/// empty one.
pub fn build_item<'a, N: MarkupNode<'a>>(node: N, ancestors: &mut Vec<N>) -> ItemRecord {
    let mut item = ItemRecord {
        types: attribute_tokens(node, "itemtype")
            .into_iter()
            .map(String::from)
            .collect(),
        id: node
            .attribute("itemid")
            .filter(|id| !id.is_empty())
            .map(String::from),
        raw_text: node.text_content(),
        ..Default::default()
    };

    for property in discover_properties(node) {
        let value = if property.has_attribute("itemscope") {
            if ancestors.iter().any(|a| a.is_same_node(&property)) {
                tracing::debug!(
                    tag = property.tag_name(),
                    depth = ancestors.len(),
                    "Item would re-enter itself, emitting cycle sentinel"
                );
                PropertyValue::CycleError
            } else {
                ancestors.push(node);
                let nested = build_item(property, ancestors);
                ancestors.pop();
                PropertyValue::from(nested)
            }
        } else {
            PropertyValue::Text(resolve_scalar_value(property))
        };

        for name in attribute_tokens(property, "itemprop") {
            item.push_property(name, value.clone());
        }
    }

    tracing::trace!(
        types = ?item.types,
        properties = item.properties.len(),
        "Built item"
    );
    item
}
