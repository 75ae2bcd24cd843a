//! FILENAME: cube-layout/src/definition.rs
//! Layout Definition - The serializable configuration.
//!
//! Describes how a cube is split into row and column dimensions.
//! These structures are designed to be:
//! - Serializable (for saving alongside a report)
//! - Immutable snapshots of user intent
//! - Validated only against a concrete cube (see `shape`)

use serde::{Deserialize, Serialize};
use crate::error::LayoutError;

/// Number of leading dimensions used as row labels when unspecified.
pub const DEFAULT_SPLIT_INDEX: usize = 2;

// ============================================================================
// HEADER MODE
// ============================================================================

/// How column dimensions are mapped onto header rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderMode {
    /// Two header rows per column dimension. Header row `r` is labeled from
    /// dimension `split + r % 2`, so only the first two column dimensions are
    /// ever named. Rows past the last column dimension repeat category 0 of
    /// that dimension, and stay blank only when the dimension does not exist.
    Paired,
    /// One header row per column dimension, each labeled from its own
    /// dimension.
    PerDimension,
}

impl Default for HeaderMode {
    fn default() -> Self {
        HeaderMode::Paired
    }
}

// ============================================================================
// LAYOUT CONFIG
// ============================================================================

/// Where to split the cube's dimensions, and how to label columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Dimensions `[0, split_index)` become row labels, the rest columns.
    pub split_index: usize,

    /// Header row strategy for the column dimensions.
    pub header_mode: HeaderMode,
}

impl LayoutConfig {
    pub fn new(split_index: usize) -> Self {
        LayoutConfig {
            split_index,
            header_mode: HeaderMode::default(),
        }
    }

    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::new(DEFAULT_SPLIT_INDEX)
    }
}
