//! RegelRecht Microdata - Extract HTML microdata items into JSON.
//!
//! This crate finds top-level microdata items in an HTML (or XHTML) document,
//! collects their properties following `itemref` references, and renders the
//! result as the JSON document `{"items": [...]}`.
//!
//! # Example
//!
//! ```
//! use regelrecht_microdata::{extract_from_html, to_json};
//!
//! let items = extract_from_html(
//!     r#"<div itemscope itemtype="Person"><span itemprop="name">Alice</span></div>"#,
//!     None,
//! );
//! assert_eq!(items[0].first_text("name"), Some("Alice"));
//! assert_eq!(
//!     to_json(&items).unwrap(),
//!     r#"{"items":[{"type":["Person"],"properties":{"name":["Alice"]}}]}"#
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`dom`]: Read-only element tree abstraction over roxmltree and scraper
//! - [`microdata`]: Item selection, property discovery and item building
//! - [`output`]: JSON/YAML rendering and file output
//! - [`http`]: HTTP client for fetching remote documents
//! - [`extractor`]: Document facade and source loading
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod extractor;
pub mod http;
pub mod microdata;
pub mod output;

// Re-export main functions
pub use extractor::{extract_from_html, extract_from_xml, MicrodataDocument};
pub use microdata::extract;
pub use output::to_json;

// Re-export commonly used items
pub use error::{MicrodataError, Result};
pub use microdata::{ItemRecord, PropertyValue};
