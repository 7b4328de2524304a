//! [`MarkupNode`] over `roxmltree`, for XHTML and other well-formed input.

use roxmltree::Node;

use super::MarkupNode;

impl<'a, 'input: 'a> MarkupNode<'a> for Node<'a, 'input> {
    fn tag_name(&self) -> &'a str {
        Node::tag_name(self).name()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        Node::attribute(self, name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter(|child| child.is_element()).collect()
    }

    fn text_content(&self) -> String {
        self.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        self.document()
            .descendants()
            .find(|n| n.is_element() && Node::attribute(n, "id") == Some(id))
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_tag_name_without_namespace() {
        let xml = r#"<html xmlns="http://www.w3.org/1999/xhtml"><body/></html>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(MarkupNode::tag_name(&doc.root_element()), "html");
    }

    #[test]
    fn test_element_children_skip_text() {
        let xml = r#"<root>text<a/>more<!-- c --><b/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let children = doc.root_element().element_children();

        let names: Vec<_> = children.iter().map(|c| MarkupNode::tag_name(c)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let xml = r#"<p>Hello <b>brave <i>new</i></b> world</p>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            doc.root_element().text_content(),
            "Hello brave new world"
        );
    }

    #[test]
    fn test_find_by_id() {
        let xml = r#"<root><a id="x"/><b><c id="y">found</c></b></root>"#;
        let doc = Document::parse(xml).unwrap();
        let a = doc.root_element().first_element_child().unwrap();

        let found = a.find_by_id("y").unwrap();
        assert_eq!(MarkupNode::tag_name(&found), "c");
        assert!(a.find_by_id("missing").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let xml = r#"<root><a id="dup"/><b id="dup"/></root>"#;
        let doc = Document::parse(xml).unwrap();

        let found = doc.root_element().find_by_id("dup").unwrap();
        assert_eq!(MarkupNode::tag_name(&found), "a");
    }

    #[test]
    fn test_is_same_node() {
        let xml = r#"<root><a id="x"/><a/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();
        let children = root.element_children();

        let by_id = root.find_by_id("x").unwrap();
        assert!(by_id.is_same_node(&children[0]));
        assert!(!by_id.is_same_node(&children[1]));
    }
}
