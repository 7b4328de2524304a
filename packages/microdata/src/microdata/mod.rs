//! Microdata extraction over any [`MarkupNode`] tree.
//!
//! The pipeline is: select top-level items, discover each item's property
//! elements, resolve scalar values by tag, and build nested items
//! recursively with a cycle guard.

mod builder;
mod discovery;
mod selector;
mod types;
mod value;

pub use builder::build_item;
pub use discovery::discover_properties;
pub use selector::select_top_level_items;
pub use types::{ItemRecord, PropertyValue};
pub use value::{resolve_scalar_value, ValueSource};

use crate::dom::MarkupNode;

/// Extract all top-level items at or below `root`.
///
/// Every item is built with a fresh ancestor stack. Calling this twice on
/// the same tree yields equal results.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_microdata::microdata::extract;
///
/// let xml = r#"<div itemscope="" itemtype="Person"><span itemprop="name">Alice</span></div>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items = extract(doc.root_element(), None);
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].first_text("name"), Some("Alice"));
/// ```
pub fn extract<'a, N: MarkupNode<'a>>(root: N, type_filter: Option<&str>) -> Vec<ItemRecord> {
    select_top_level_items(root, type_filter)
        .into_iter()
        .map(|item| build_item(item, &mut Vec::new()))
        .collect()
}
