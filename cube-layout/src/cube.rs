//! FILENAME: cube-layout/src/cube.rs
//! Cube - The read-only input of a layout.
//!
//! A cube is an N-dimensional array of values addressed by one category
//! index per dimension and stored flat in row-major order (the last
//! dimension varies fastest). The layout engine only ever reads a cube
//! through the `Cube` trait; `CubeData` is an owned implementation that can
//! be built in code or deserialized from JSON.

use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use crate::error::LayoutError;

// ============================================================================
// CUBE TRAIT
// ============================================================================

/// Read access to a labeled cube.
///
/// Label lookups return `None` when the label cannot be produced; the engine
/// reports that as `LayoutError::LabelResolution` instead of guessing text.
pub trait Cube {
    /// Cardinality of each dimension, in canonical order.
    fn sizes(&self) -> &[usize];

    /// Length of the flat value sequence.
    fn value_count(&self) -> usize;

    /// Rendered text of the value at `offset`. `None` is a missing value.
    fn value_text(&self, offset: usize) -> Option<Cow<'_, str>>;

    /// Name of dimension `dim`.
    fn dimension_label(&self, dim: usize) -> Option<Cow<'_, str>>;

    /// Label of category `category` within dimension `dim`.
    fn category_label(&self, dim: usize, category: usize) -> Option<Cow<'_, str>>;
}

// ============================================================================
// VALUES
// ============================================================================

/// A single cube value. `null` in JSON deserializes to `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CubeValue {
    Empty,
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl CubeValue {
    pub fn text(s: impl Into<String>) -> Self {
        CubeValue::Text(s.into())
    }

    /// Rendered form of the value, or `None` for `Empty`.
    pub fn display_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CubeValue::Empty => None,
            CubeValue::Number(n) => Some(Cow::Owned(n.to_string())),
            CubeValue::Boolean(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            CubeValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

impl Default for CubeValue {
    fn default() -> Self {
        CubeValue::Empty
    }
}

impl From<f64> for CubeValue {
    fn from(value: f64) -> Self {
        CubeValue::Number(value)
    }
}

impl From<Option<f64>> for CubeValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(CubeValue::Empty, CubeValue::Number)
    }
}

impl From<&str> for CubeValue {
    fn from(value: &str) -> Self {
        CubeValue::Text(value.to_string())
    }
}

// ============================================================================
// OWNED CUBE
// ============================================================================

/// A named dimension and its ordered category labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionData {
    pub label: String,
    pub categories: Vec<String>,
}

impl DimensionData {
    pub fn new<S: Into<String>>(label: impl Into<String>, categories: impl IntoIterator<Item = S>) -> Self {
        DimensionData {
            label: label.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// An in-memory cube.
///
/// Nothing is validated on construction; sizes and value count are checked
/// when a layout is calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeData {
    pub sizes: Vec<usize>,
    pub values: Vec<CubeValue>,
    #[serde(default)]
    pub dimensions: Vec<DimensionData>,
}

impl CubeData {
    pub fn new(sizes: Vec<usize>, values: Vec<CubeValue>, dimensions: Vec<DimensionData>) -> Self {
        CubeData { sizes, values, dimensions }
    }

    /// Builds a cube whose sizes are the category counts of `dimensions`.
    pub fn from_dimensions(dimensions: Vec<DimensionData>, values: Vec<CubeValue>) -> Self {
        let sizes = dimensions.iter().map(|d| d.categories.len()).collect();
        CubeData { sizes, values, dimensions }
    }

    /// Parses a cube from JSON of the form
    /// `{"sizes": [..], "values": [..], "dimensions": [{"label": .., "categories": [..]}]}`.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Cube for CubeData {
    fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    fn value_count(&self) -> usize {
        self.values.len()
    }

    fn value_text(&self, offset: usize) -> Option<Cow<'_, str>> {
        self.values.get(offset).and_then(CubeValue::display_text)
    }

    fn dimension_label(&self, dim: usize) -> Option<Cow<'_, str>> {
        self.dimensions
            .get(dim)
            .map(|d| Cow::Borrowed(d.label.as_str()))
    }

    fn category_label(&self, dim: usize, category: usize) -> Option<Cow<'_, str>> {
        self.dimensions
            .get(dim)?
            .categories
            .get(category)
            .map(|c| Cow::Borrowed(c.as_str()))
    }
}
