//! Entry points that tie parsing, extraction and source loading together.

use std::borrow::Cow;
use std::fs;
use std::io::Read;

use clap::ValueEnum;
use roxmltree::{Document, ParsingOptions};
use scraper::{ElementRef, Html};

use crate::config::{SourceKind, STDIN_SOURCE};
use crate::error::Result;
use crate::http::{bytes_to_string, fetch_document};
use crate::microdata::{extract, ItemRecord};
use crate::output::to_json;

/// Parser to use for a source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Error-tolerant HTML parsing.
    #[default]
    Html,
    /// Strict XML parsing, for XHTML.
    Xml,
}

/// A parsed HTML document ready for microdata queries.
///
/// # Examples
/// ```
/// use regelrecht_microdata::MicrodataDocument;
///
/// let document = MicrodataDocument::parse_html(
///     r#"<div itemscope itemtype="Person"><span itemprop="name">Alice</span></div>"#,
/// );
/// assert_eq!(
///     document.json().unwrap(),
///     r#"{"items":[{"type":["Person"],"properties":{"name":["Alice"]}}]}"#
/// );
/// ```
pub struct MicrodataDocument {
    html: Html,
}

impl MicrodataDocument {
    /// Parse HTML. Parsing never fails; problems are recorded as parse errors.
    #[must_use]
    pub fn parse_html(content: &str) -> Self {
        let html = Html::parse_document(content);
        for error in &html.errors {
            tracing::debug!(%error, "HTML parse error");
        }
        Self { html }
    }

    /// Check if the parser reported no errors.
    ///
    /// This is strict: html5ever reports recoverable problems such as stray
    /// end tags or a missing doctype, and any of them makes this `false`.
    /// Such documents still parse and extract normally, so `false` does not
    /// mean the document is unusable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.html.errors.is_empty()
    }

    /// Messages reported by the HTML parser.
    #[must_use]
    pub fn parse_errors(&self) -> &[Cow<'static, str>] {
        &self.html.errors
    }

    /// The document element.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Extract top-level items, optionally filtered by exact `itemtype`.
    #[must_use]
    pub fn items(&self, type_filter: Option<&str>) -> Vec<ItemRecord> {
        extract(self.root(), type_filter)
    }

    /// All items as a compact JSON document.
    pub fn json(&self) -> Result<String> {
        to_json(&self.items(None))
    }
}

/// Extract items from an HTML string.
#[must_use]
pub fn extract_from_html(content: &str, type_filter: Option<&str>) -> Vec<ItemRecord> {
    MicrodataDocument::parse_html(content).items(type_filter)
}

/// Extract items from an XML or XHTML string.
///
/// A document type declaration is allowed; malformed XML is an error.
pub fn extract_from_xml(content: &str, type_filter: Option<&str>) -> Result<Vec<ItemRecord>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)?;
    Ok(extract(doc.root_element(), type_filter))
}

/// Extract items from markup text with the given parser.
pub fn extract_from_str(
    content: &str,
    format: InputFormat,
    type_filter: Option<&str>,
) -> Result<Vec<ItemRecord>> {
    match format {
        InputFormat::Html => Ok(extract_from_html(content, type_filter)),
        InputFormat::Xml => extract_from_xml(content, type_filter),
    }
}

/// Load markup text from a path, a URL, or standard input (`-`).
///
/// # Arguments
/// * `source` - Source argument as given on the command line
/// * `max_size` - Maximum accepted size for fetched documents, in bytes
pub fn load_source(source: &str, max_size: u64) -> Result<String> {
    match SourceKind::detect(source) {
        SourceKind::Stdin => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes_to_string(&bytes, STDIN_SOURCE))
        }
        SourceKind::Url => fetch_document(source, max_size),
        SourceKind::Path => {
            let bytes = fs::read(source)?;
            Ok(bytes_to_string(&bytes, source))
        }
    }
}
