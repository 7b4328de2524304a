//! Markup tree access for the extractor.
//!
//! The extraction algorithm never talks to a parser directly. It works on
//! any node handle implementing [`MarkupNode`], so the same code runs over
//! an XHTML tree from `roxmltree` and an HTML tree from `scraper`.

mod html;
mod xml;

/// Read-only view of an element in a parsed markup tree.
///
/// Handles are cheap to copy and borrow the document they belong to for
/// `'a`. Only element nodes are ever exposed; text and comment nodes are
/// reachable through [`MarkupNode::text_content`] alone.
pub trait MarkupNode<'a>: Copy {
    /// Local tag name, as the parser reports it.
    fn tag_name(&self) -> &'a str;

    /// Attribute value, or `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// Whether the attribute is present at all (boolean attributes such as
    /// `itemscope` carry no meaningful value).
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Element children in document order.
    fn element_children(&self) -> Vec<Self>;

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// First element of the owning document whose `id` attribute equals `id`.
    fn find_by_id(&self, id: &str) -> Option<Self>;

    /// Whether both handles point at the same element of the same document.
    fn is_same_node(&self, other: &Self) -> bool;
}

/// Split a space-separated attribute value into tokens.
///
/// Used for `itemtype`, `itemprop` and `itemref`. Runs of whitespace never
/// produce empty tokens.
///
/// # Examples
/// ```
/// use regelrecht_microdata::dom::tokenize;
///
/// assert_eq!(tokenize("  name   givenName "), vec!["name", "givenName"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(value: &str) -> Vec<&str> {
    value.split_whitespace().collect()
}

/// Tokens of an attribute on `node`, empty when the attribute is absent.
pub fn attribute_tokens<'a, N: MarkupNode<'a>>(node: N, name: &str) -> Vec<&'a str> {
    node.attribute(name).map(tokenize).unwrap_or_default()
}
