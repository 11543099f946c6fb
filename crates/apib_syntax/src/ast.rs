//! Document model assembled from the token stream.
//!
//! The model mirrors the source order of the input: metadata pairs, headed sections, and the named
//! structures of the `Data Structures` section with their properties.

use apib_core::lang::types::{self, PrimitiveId};
use serde::Serialize;

use crate::lexer::HeadingLevel;

/// Source location span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A fully assembled document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub metadata: Vec<MetadataEntry>,
    pub sections: Vec<Section>,
    pub structures: Vec<StructureDef>,
}

impl Document {
    /// The API name: the title of the first level-1 section.
    pub fn name(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.level == HeadingLevel::H1)
            .map(|s| s.title.as_str())
    }

    /// Look up a metadata value by key (first match wins).
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// Look up a structure by name.
    pub fn structure(&self, name: &str) -> Option<&StructureDef> {
        self.structures.iter().find(|s| s.name == name)
    }

    /// Total number of properties across all structures.
    pub fn property_count(&self) -> usize {
        self.structures.iter().map(|s| s.properties.len()).sum()
    }
}

/// One `key: value` line of the metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// A heading outside the `Data Structures` section, with the overview text that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub level: HeadingLevel,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

/// A named data structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureDef {
    pub name: String,
    pub properties: Vec<PropertyDef>,
}

impl StructureDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// A typed property of a structure.
///
/// `type_name` is the element type for array properties: `(array[number])` has `type_name == "number"` and
/// `is_array == true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDef {
    pub name: String,
    pub type_name: String,
    pub is_array: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, is_array: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_array,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The primitive type, or `None` when `type_name` refers to another structure.
    pub fn primitive(&self) -> Option<PrimitiveId> {
        types::from_str(&self.type_name)
    }
}
