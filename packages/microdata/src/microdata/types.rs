//! Output types of an extraction run.

use indexmap::IndexMap;

/// One value of a microdata property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Scalar value taken from an attribute or the element text.
    Text(String),
    /// Nested item (the property element carries `itemscope`).
    Item(Box<ItemRecord>),
    /// Building this item would re-enter an item already on the build path.
    CycleError,
}

impl PropertyValue {
    /// Get the scalar text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the nested item, if this is an item value.
    #[must_use]
    pub fn as_item(&self) -> Option<&ItemRecord> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Check if this is the cycle sentinel.
    #[must_use]
    pub fn is_cycle_error(&self) -> bool {
        matches!(self, Self::CycleError)
    }
}

impl From<ItemRecord> for PropertyValue {
    fn from(item: ItemRecord) -> Self {
        Self::Item(Box::new(item))
    }
}

/// A microdata item built from an `itemscope` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    /// Tokens of the `itemtype` attribute, empty if absent.
    pub types: Vec<String>,

    /// The `itemid` attribute, `None` if absent or empty.
    pub id: Option<String>,

    /// Text content of the item element.
    pub raw_text: String,

    /// Property values keyed by property name, in discovery order.
    pub properties: IndexMap<String, Vec<PropertyValue>>,
}

impl ItemRecord {
    /// Append a value to a property, creating the property on first use.
    pub fn push_property(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.properties.entry(name.into()).or_default().push(value);
    }

    /// Get all values of a property.
    #[must_use]
    pub fn property(&self, name: &str) -> &[PropertyValue] {
        self.properties.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Get the first text value of a property.
    #[must_use]
    pub fn first_text(&self, name: &str) -> Option<&str> {
        self.property(name).iter().find_map(PropertyValue::as_text)
    }

    /// Check if the item declares the given type token.
    #[must_use]
    pub fn has_type(&self, item_type: &str) -> bool {
        self.types.iter().any(|t| t == item_type)
    }
}
