//! FILENAME: cube-layout/src/shape.rs
//! PURPOSE: Splits a cube's dimensions into row and column groups.
//! CONTEXT: Row dimensions are always the low-index prefix of the cube's
//! canonical dimension order and column dimensions the suffix. Everything
//! the grid builders need (label column count, value column count, header
//! and body row counts) is derived here once and never changes afterwards.

use smallvec::SmallVec;
use crate::definition::{HeaderMode, LayoutConfig};
use crate::error::{ConfigurationError, LayoutError};
use crate::stride;

/// Sizes of one dimension group.
pub type DimGroup = SmallVec<[usize; 4]>;

/// Structural constants of one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutShape {
    pub split_index: usize,
    pub header_mode: HeaderMode,
    /// Number of dimensions in the cube.
    pub dimension_count: usize,
    pub row_dims: DimGroup,
    pub col_dims: DimGroup,
    pub num_label_cols: usize,
    pub num_value_cols: usize,
    pub num_header_rows: usize,
    pub num_body_rows: usize,
}

impl LayoutShape {
    /// Validates `sizes` and `value_count` against `config` and derives the
    /// grid constants. Configuration problems are reported before a shape
    /// mismatch.
    pub fn new(
        sizes: &[usize],
        value_count: usize,
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        if sizes.is_empty() {
            return Err(ConfigurationError::NoDimensions.into());
        }
        if let Some(dim) = sizes.iter().position(|&s| s < 1) {
            return Err(ConfigurationError::EmptyDimension { dim }.into());
        }
        if config.split_index > sizes.len() {
            return Err(ConfigurationError::SplitOutOfRange {
                split_index: config.split_index,
                dimension_count: sizes.len(),
            }
            .into());
        }

        let expected = stride::checked_product(sizes).ok_or(ConfigurationError::SizeOverflow)?;
        if value_count != expected {
            return Err(LayoutError::ShapeMismatch {
                expected,
                actual: value_count,
            });
        }

        let (row, col) = sizes.split_at(config.split_index);
        let row_dims: DimGroup = row.iter().copied().collect();
        let col_dims: DimGroup = col.iter().copied().collect();

        let num_header_rows = match config.header_mode {
            HeaderMode::Paired => 2 * col_dims.len(),
            HeaderMode::PerDimension => col_dims.len(),
        };

        Ok(LayoutShape {
            split_index: config.split_index,
            header_mode: config.header_mode,
            dimension_count: sizes.len(),
            num_label_cols: row_dims.len(),
            num_value_cols: stride::product(&col_dims),
            num_header_rows,
            num_body_rows: stride::product(&row_dims),
            row_dims,
            col_dims,
        })
    }

    /// Total number of flat values covered by this shape.
    pub fn value_count(&self) -> usize {
        self.num_body_rows * self.num_value_cols
    }

    /// Cells per body row (label cells followed by value cells).
    pub fn row_width(&self) -> usize {
        self.num_label_cols + self.num_value_cols
    }
}
