//! FILENAME: cube-layout/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Shape mismatch: sizes describe {expected} values but the cube holds {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("{}", label_message(.dim, .category))]
    LabelResolution { dim: usize, category: Option<usize> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problems with the cube's sizes or the layout configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("cube has no dimensions")]
    NoDimensions,

    #[error("dimension {dim} has size 0")]
    EmptyDimension { dim: usize },

    #[error("split index {split_index} exceeds dimension count {dimension_count}")]
    SplitOutOfRange { split_index: usize, dimension_count: usize },

    #[error("product of dimension sizes overflows")]
    SizeOverflow,

    #[error("offset {offset} is outside the cube ({value_count} values)")]
    OffsetOutOfRange { offset: usize, value_count: usize },
}

fn label_message(dim: &usize, category: &Option<usize>) -> String {
    match category {
        Some(cat) => format!("No label for category {} of dimension {}", cat, dim),
        None => format!("No label for dimension {}", dim),
    }
}

impl LayoutError {
    /// Shorthand for a missing category label.
    pub fn missing_category(dim: usize, category: usize) -> Self {
        LayoutError::LabelResolution { dim, category: Some(category) }
    }

    /// Shorthand for a missing dimension name.
    pub fn missing_dimension(dim: usize) -> Self {
        LayoutError::LabelResolution { dim, category: None }
    }
}
