//! Selection of top-level items.

use crate::config::normalize_type_filter;
use crate::dom::MarkupNode;

/// Whether `node` starts an item that is nobody's property.
fn is_top_level_item<'a, N: MarkupNode<'a>>(node: N, type_filter: Option<&str>) -> bool {
    if !node.has_attribute("itemscope") || node.has_attribute("itemprop") {
        return false;
    }
    match type_filter {
        // Exact match on the whole attribute value, not token membership
        Some(filter) => node.attribute("itemtype") == Some(filter),
        None => true,
    }
}

fn collect<'a, N: MarkupNode<'a>>(node: N, type_filter: Option<&str>, items: &mut Vec<N>) {
    if is_top_level_item(node, type_filter) {
        items.push(node);
    }
    for child in node.element_children() {
        collect(child, type_filter, items);
    }
}

/// Find every top-level item at or below `root`, in document order.
///
/// A top-level item has `itemscope` and no `itemprop`. Items nested inside
/// other items are still top-level when they lack `itemprop`.
///
/// # Arguments
/// * `root` - Element to search from, usually the document element
/// * `type_filter` - When set, the `itemtype` attribute must equal it exactly
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_microdata::microdata::select_top_level_items;
///
/// let xml = r#"<body><div itemscope="" itemtype="Person"/><p itemscope="" itemprop="x"/></body>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(select_top_level_items(doc.root_element(), None).len(), 1);
/// assert!(select_top_level_items(doc.root_element(), Some("Event")).is_empty());
/// ```
pub fn select_top_level_items<'a, N: MarkupNode<'a>>(root: N, type_filter: Option<&str>) -> Vec<N> {
    let type_filter = normalize_type_filter(type_filter);
    let mut items = Vec::new();
    collect(root, type_filter, &mut items);
    tracing::debug!(count = items.len(), filter = ?type_filter, "Selected top-level items");
    items
}
