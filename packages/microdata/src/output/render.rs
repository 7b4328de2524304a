//! Rendering of extracted items as JSON or YAML.

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::CYCLE_SENTINEL;
use crate::error::Result;
use crate::microdata::{ItemRecord, PropertyValue};

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"items": [...]}` as JSON.
    #[default]
    Json,
    /// The same document as YAML.
    Yaml,
}

/// Options controlling how items are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Indent JSON output.
    pub pretty: bool,
    /// Add each item's text content as `rawText`.
    pub include_raw_text: bool,
}

impl SerializeOptions {
    /// Enable indented JSON.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Include the `rawText` debug field.
    #[must_use]
    pub fn with_raw_text(mut self) -> Self {
        self.include_raw_text = true;
        self
    }
}

/// Top-level output document.
#[derive(Debug, Serialize)]
struct OutputDocument<'a> {
    items: Vec<OutputItem<'a>>,
}

/// Item representation for serialization.
#[derive(Debug, Serialize)]
struct OutputItem<'a> {
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    types: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    properties: IndexMap<&'a str, Vec<OutputValue<'a>>>,
    #[serde(rename = "rawText", skip_serializing_if = "Option::is_none")]
    raw_text: Option<&'a str>,
}

/// Property value: a string, a nested item, or the cycle sentinel string.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum OutputValue<'a> {
    Text(&'a str),
    Item(OutputItem<'a>),
}

impl<'a> OutputItem<'a> {
    fn new(item: &'a ItemRecord, options: &SerializeOptions) -> Self {
        let properties = item
            .properties
            .iter()
            .map(|(name, values)| {
                let values = values
                    .iter()
                    .map(|value| OutputValue::new(value, options))
                    .collect();
                (name.as_str(), values)
            })
            .collect();

        Self {
            types: item.types.iter().map(String::as_str).collect(),
            id: item.id.as_deref(),
            properties,
            raw_text: options
                .include_raw_text
                .then_some(item.raw_text.as_str()),
        }
    }
}

impl<'a> OutputValue<'a> {
    fn new(value: &'a PropertyValue, options: &SerializeOptions) -> Self {
        match value {
            PropertyValue::Text(text) => Self::Text(text),
            PropertyValue::Item(item) => Self::Item(OutputItem::new(item, options)),
            PropertyValue::CycleError => Self::Text(CYCLE_SENTINEL),
        }
    }
}

fn output_document<'a>(items: &'a [ItemRecord], options: &SerializeOptions) -> OutputDocument<'a> {
    OutputDocument {
        items: items
            .iter()
            .map(|item| OutputItem::new(item, options))
            .collect(),
    }
}

/// Render items as compact JSON with the default options.
///
/// # Examples
/// ```
/// use regelrecht_microdata::microdata::{ItemRecord, PropertyValue};
/// use regelrecht_microdata::output::to_json;
///
/// let mut item = ItemRecord::default();
/// item.types.push("Person".to_string());
/// item.push_property("name", PropertyValue::Text("Alice".to_string()));
///
/// assert_eq!(
///     to_json(&[item]).unwrap(),
///     r#"{"items":[{"type":["Person"],"properties":{"name":["Alice"]}}]}"#
/// );
/// ```
pub fn to_json(items: &[ItemRecord]) -> Result<String> {
    to_json_with(items, &SerializeOptions::default())
}

/// Render items as JSON.
pub fn to_json_with(items: &[ItemRecord], options: &SerializeOptions) -> Result<String> {
    let document = output_document(items, options);
    let json = if options.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Render items as a YAML document.
pub fn to_yaml(items: &[ItemRecord], options: &SerializeOptions) -> Result<String> {
    let document = output_document(items, options);
    let yaml = serde_yaml_ng::to_string(&document)?;
    Ok(format!("---\n{}\n", yaml.trim_end()))
}

/// Render items in the requested format.
pub fn render(items: &[ItemRecord], format: OutputFormat, options: &SerializeOptions) -> Result<String> {
    match format {
        OutputFormat::Json => to_json_with(items, options),
        OutputFormat::Yaml => to_yaml(items, options),
    }
}
