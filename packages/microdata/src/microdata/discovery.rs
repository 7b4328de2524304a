//! Property discovery: which elements are the direct properties of an item.
//!
//! Discovery runs in two phases. Phase A walks the subtrees named by the
//! item's `itemref` ids, in token order. Phase B walks the item's own
//! children. Both use the same boundary-limited walk:
//!
//! - an element declaring `itemprop` is a property, even if it also starts
//!   an item of its own;
//! - an element with `itemscope` is a scope boundary, its descendants belong
//!   to that nested item and are not visited;
//! - anything else is descended into in document order.
//!
//! The item root is special. It is never reported as its own property and
//! never acts as a boundary. When a Phase A walk reaches it (an `itemref`
//! naming the root or one of its ancestors), its children are walked right
//! there and Phase B does not walk them again.
//!
//! No deduplication happens across phases: an element that is both an
//! `itemref` target and a descendant of the root is reported twice.

use crate::dom::{attribute_tokens, MarkupNode};

/// Accumulates the property elements of one item root.
struct Discovery<N> {
    root: N,
    properties: Vec<N>,
    root_walked: bool,
}

impl<'a, N: MarkupNode<'a>> Discovery<N> {
    fn new(root: N) -> Self {
        Self {
            root,
            properties: Vec::new(),
            root_walked: false,
        }
    }

    fn walk(&mut self, node: N) {
        if node.is_same_node(&self.root) {
            self.root_walked = true;
        } else {
            if !attribute_tokens(node, "itemprop").is_empty() {
                self.properties.push(node);
            }
            if node.has_attribute("itemscope") {
                return;
            }
        }

        for child in node.element_children() {
            self.walk(child);
        }
    }

    /// Phase A: subtrees referenced through `itemref`.
    fn walk_references(&mut self) {
        for id in attribute_tokens(self.root, "itemref") {
            // Only the first element carrying a duplicated id is followed
            match self.root.find_by_id(id) {
                Some(target) => self.walk(target),
                None => tracing::debug!(id, "Skipping unresolved itemref"),
            }
        }
    }

    /// Phase B: the root's own subtree.
    fn walk_own_subtree(&mut self) {
        if !self.root_walked {
            self.walk(self.root);
        }
    }
}

/// Compute the ordered direct properties of an item root.
///
/// Returns an empty list when `root` has no `itemscope`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use regelrecht_microdata::microdata::discover_properties;
///
/// let xml = r#"<body>
///     <div itemscope="" itemref="extra"><span itemprop="name">Bob</span></div>
///     <p id="extra" itemprop="email">bob@example.com</p>
/// </body>"#;
/// let doc = Document::parse(xml).unwrap();
/// let item = doc.descendants().find(|n| n.has_attribute("itemref")).unwrap();
///
/// let props = discover_properties(item);
/// assert_eq!(props[0].attribute("itemprop"), Some("email"));
/// assert_eq!(props[1].attribute("itemprop"), Some("name"));
/// ```
pub fn discover_properties<'a, N: MarkupNode<'a>>(root: N) -> Vec<N> {
    if !root.has_attribute("itemscope") {
        return Vec::new();
    }

    let mut discovery = Discovery::new(root);
    discovery.walk_references();
    discovery.walk_own_subtree();
    discovery.properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::{Document, Node};

    fn find_by_id<'a, 'input>(doc: &'a Document<'input>, id: &str) -> Node<'a, 'input> {
        doc.descendants()
            .find(|n| n.attribute("id") == Some(id))
            .unwrap()
    }

    fn ids<'a>(nodes: &[Node<'a, '_>]) -> Vec<&'a str> {
        nodes.iter().map(|n| n.attribute("id").unwrap_or("?")).collect()
    }

    #[test]
    fn test_own_subtree_in_document_order() {
        let xml = r#"<div id="item" itemscope="">
            <span id="a" itemprop="x"/>
            <div><span id="b" itemprop="y"/></div>
            <span id="c" itemprop="z"/>
        </div>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_scope_is_boundary() {
        let xml = r#"<div id="item" itemscope="">
            <div id="nested" itemscope="" itemprop="author">
                <span id="inner" itemprop="name"/>
            </div>
            <div id="anon" itemscope="">
                <span id="hidden" itemprop="name"/>
            </div>
            <span id="after" itemprop="title"/>
        </div>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["nested", "after"]);
    }

    #[test]
    fn test_itemref_targets_come_first() {
        let xml = r#"<body>
            <p id="r2" itemprop="second"/>
            <div id="item" itemscope="" itemref="r1 r2">
                <span id="own" itemprop="own"/>
            </div>
            <p id="r1" itemprop="first"/>
        </body>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["r1", "r2", "own"]);
    }

    #[test]
    fn test_itemref_target_subtree_is_walked() {
        let xml = r#"<body>
            <div id="item" itemscope="" itemref="group"/>
            <section id="group">
                <span id="a" itemprop="a"/>
                <div id="scoped" itemscope=""><span id="no" itemprop="b"/></div>
            </section>
        </body>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["a"]);
    }

    #[test]
    fn test_unresolved_itemref_is_skipped() {
        let xml = r#"<body>
            <div id="item" itemscope="" itemref="missing ok"><span id="own" itemprop="x"/></div>
            <p id="ok" itemprop="y"/>
        </body>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["ok", "own"]);
    }

    #[test]
    fn test_duplicate_id_follows_first_element() {
        let xml = r#"<body>
            <div id="item" itemscope="" itemref="shared"/>
            <p id="shared" itemprop="first"/>
            <p id="shared" itemprop="second"/>
        </body>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        let names: Vec<_> = props.iter().filter_map(|n| n.attribute("itemprop")).collect();
        assert_eq!(names, vec!["first"]);
    }

    #[test]
    fn test_reference_inside_own_subtree_is_reported_twice() {
        let xml = r#"<div id="item" itemscope="" itemref="dup">
            <span id="dup" itemprop="name"/>
        </div>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["dup", "dup"]);
    }

    #[test]
    fn test_root_with_itemprop_is_not_its_own_property() {
        let xml = r#"<body>
            <div id="item" itemscope="" itemprop="self"><span id="a" itemprop="x"/></div>
        </body>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["a"]);
    }

    #[test]
    fn test_itemref_to_self_walks_children_once() {
        let xml = r#"<div id="item" itemscope="" itemref="item">
            <span id="a" itemprop="x"/>
        </div>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["a"]);
    }

    #[test]
    fn test_itemref_to_ancestor_walks_root_children_once() {
        let xml = r#"<section id="wrap">
            <span id="before" itemprop="b"/>
            <div id="item" itemscope="" itemref="wrap">
                <span id="a" itemprop="x"/>
            </div>
        </section>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["before", "a"]);
    }

    #[test]
    fn test_empty_itemprop_is_not_a_property() {
        let xml = r#"<div id="item" itemscope="">
            <span id="blank" itemprop="  "/>
            <span id="a" itemprop="x"/>
        </div>"#;
        let doc = Document::parse(xml).unwrap();

        let props = discover_properties(find_by_id(&doc, "item"));
        assert_eq!(ids(&props), vec!["a"]);
    }

    #[test]
    fn test_non_item_root_has_no_properties() {
        let xml = r#"<div id="item"><span id="a" itemprop="x"/></div>"#;
        let doc = Document::parse(xml).unwrap();

        assert!(discover_properties(find_by_id(&doc, "item")).is_empty());
    }
}
