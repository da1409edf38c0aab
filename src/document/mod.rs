//! Layered annotation container shared by every pipeline stage.
//!
//! A [`Document`] owns the raw text plus an append-only list of [`Layer`]s.
//! Each stage reads the layers it needs and returns one new layer; nothing is
//! ever mutated after the producing stage returns. Cross-layer references are
//! plain identifier strings (the `Group` feature) resolved through
//! [`Layer::annotation`], never structural pointers, so every layer stays
//! independently serializable.


use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature name carrying the segment type (`Question` / `Answer`).
pub const FEATURE_TYPE: &str = "Type";
/// Feature name carrying a segment's sentence text.
pub const FEATURE_TEXT: &str = "Text";
/// Feature name carrying a score (string on answers, number on scored output).
pub const FEATURE_SCORE: &str = "Score";
/// Feature name carrying the identifier back-reference to a source annotation.
pub const FEATURE_GROUP: &str = "Group";
/// Feature name carrying a token's normalized word form.
pub const FEATURE_WORD: &str = "word";

/// Returns the feature name of the order-n frequency table (`"1-Gram"` etc).
pub fn gram_feature(order: usize) -> String {
    format!("{order}-Gram")
}

/// Surface string → occurrence count for one n-gram order.
pub type FrequencyTable = BTreeMap<String, u64>;

/// Annotation category label (the vocabulary the pipeline emits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sentence-level span (segments and n-gram bundles).
    Sentence,
    /// Token-level span (word tokens and per-answer scores).
    Token,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sentence => "Sentence",
            Category::Token => "Token",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature value: scalar text, a number, or a nested frequency table.
///
/// Serialized untagged so the persisted form is plain JSON
/// (`"Question"`, `0.6`, `{"the sky": 1}`) and round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Nested string → count map (n-gram tables).
    Table(FrequencyTable),
    /// Numeric value (overlap scores).
    Number(f64),
    /// Plain string value.
    Text(String),
}

impl FeatureValue {
    /// Returns the string value, if this is a text feature.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number feature.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the frequency table, if this is a table feature.
    pub fn as_table(&self) -> Option<&FrequencyTable> {
        match self {
            FeatureValue::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<FrequencyTable> for FeatureValue {
    fn from(value: FrequencyTable) -> Self {
        FeatureValue::Table(value)
    }
}

/// A labeled half-open character span `[start, end)` with a feature map.
///
/// Identifiers are unique within their layer. Spans index into the original
/// document text except where a stage deliberately preserves the legacy
/// line-relative quirk (see the segmenter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    pub category: Category,
    pub start: usize,
    pub end: usize,
    pub features: BTreeMap<String, FeatureValue>,
}

impl Annotation {
    pub fn new(id: impl Into<String>, category: Category, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "annotation span must be well-formed");
        Self {
            id: id.into(),
            category,
            start,
            end,
            features: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a feature.
    pub fn add_feature(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        self.features.insert(name.into(), value.into());
    }

    /// Looks up a feature by name.
    pub fn feature(&self, name: &str) -> Option<&FeatureValue> {
        self.features.get(name)
    }

    /// Looks up a string feature by name.
    pub fn text_feature(&self, name: &str) -> Option<&str> {
        self.feature(name).and_then(FeatureValue::as_str)
    }

    /// Looks up a frequency-table feature by name.
    pub fn table_feature(&self, name: &str) -> Option<&FrequencyTable> {
        self.feature(name).and_then(FeatureValue::as_table)
    }
}

/// One stage's complete output: ordered annotations plus metadata naming the
/// producing stage and the category it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Name of the stage that produced this layer.
    pub producer: String,
    /// Category of the annotations this layer contains.
    pub contains: Category,
    /// Annotations in production order.
    pub annotations: Vec<Annotation>,
}

impl Layer {
    pub fn new(producer: &str, contains: Category) -> Self {
        Self {
            producer: producer.to_string(),
            contains,
            annotations: Vec::new(),
        }
    }

    /// Appends an annotation.
    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Annotations in production order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Resolves an identifier back-reference within this layer.
    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

/// Raw text plus the ordered annotation layers produced over it.
///
/// The text is immutable and the layer list is append-only; a document is
/// owned exclusively by one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    layers: Vec<Layer>,
}

impl Document {
    /// Creates a document with no layers.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            layers: Vec::new(),
        }
    }

    /// The original raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All layers, oldest first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer by index (0 is the first stage's output).
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// The most recently appended layer.
    pub fn last_layer(&self) -> Option<&Layer> {
        self.layers.last()
    }

    /// Appends a completed layer.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Deserializes a document from its JSON container form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the document to its JSON container form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
