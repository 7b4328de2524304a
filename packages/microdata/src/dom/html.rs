//! [`MarkupNode`] over `scraper`, for real-world (tag soup) HTML.

use scraper::ElementRef;

use super::MarkupNode;

impl<'a> MarkupNode<'a> for ElementRef<'a> {
    fn tag_name(&self) -> &'a str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        let root = self.ancestors().last().unwrap_or(**self);
        root.descendants()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().id() == Some(id))
    }

    fn is_same_node(&self, other: &Self) -> bool {
        self == other
    }
}
