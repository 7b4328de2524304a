//! Scalar values of property elements.
//!
//! Which attribute holds an element's value depends on its tag. The
//! mapping is a static table; tags not listed use their text content.

use crate::dom::MarkupNode;

/// Where a property element keeps its scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Value of the named attribute, empty when the attribute is missing.
    Attribute(&'static str),
    /// The `datetime` attribute when non-empty, the text content otherwise.
    DateTime,
    /// Full text content of the element.
    TextContent,
}

/// Tag to value source table.
const VALUE_SOURCES: &[(&str, ValueSource)] = &[
    ("meta", ValueSource::Attribute("content")),
    // Embedded media
    ("audio", ValueSource::Attribute("src")),
    ("embed", ValueSource::Attribute("src")),
    ("iframe", ValueSource::Attribute("src")),
    ("img", ValueSource::Attribute("src")),
    ("source", ValueSource::Attribute("src")),
    ("track", ValueSource::Attribute("src")),
    ("video", ValueSource::Attribute("src")),
    // Hyperlinks
    ("a", ValueSource::Attribute("href")),
    ("area", ValueSource::Attribute("href")),
    ("link", ValueSource::Attribute("href")),
    ("object", ValueSource::Attribute("data")),
    ("data", ValueSource::Attribute("value")),
    ("time", ValueSource::DateTime),
];

impl ValueSource {
    /// Look up the value source for a tag name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use regelrecht_microdata::microdata::ValueSource;
    ///
    /// assert_eq!(ValueSource::for_tag("IMG"), ValueSource::Attribute("src"));
    /// assert_eq!(ValueSource::for_tag("span"), ValueSource::TextContent);
    /// ```
    #[must_use]
    pub fn for_tag(tag_name: &str) -> Self {
        VALUE_SOURCES
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(tag_name))
            .map_or(Self::TextContent, |(_, source)| *source)
    }
}

/// Resolve the scalar value of a property element without `itemscope`.
///
/// URLs are returned verbatim; nothing is resolved or validated.
pub fn resolve_scalar_value<'a, N: MarkupNode<'a>>(node: N) -> String {
    match ValueSource::for_tag(node.tag_name()) {
        ValueSource::Attribute(name) => node.attribute(name).unwrap_or_default().to_string(),
        ValueSource::DateTime => match node.attribute("datetime") {
            Some(datetime) if !datetime.is_empty() => datetime.to_string(),
            _ => node.text_content(),
        },
        ValueSource::TextContent => node.text_content(),
    }
}
