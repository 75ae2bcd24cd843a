//! FILENAME: cube-layout/src/engine.rs
//! Layout Engine - Assembles a cube into a GridModel.
//!
//! Algorithm:
//! 1. Validate sizes and configuration, derive the layout shape
//! 2. Build the header rows (corner cells + nested column headers)
//! 3. Stream the values into body rows, prefixing each with its row labels
//! 4. Return the finished GridModel
//!
//! Nothing survives between two calculations. Label lookups are memoized
//! for the duration of one run only.

use serde::{Deserialize, Serialize};
use crate::cube::Cube;
use crate::definition::LayoutConfig;
use crate::error::LayoutError;
use crate::header::build_header_rows;
use crate::labels::LabelResolver;
use crate::row_labels::row_categories;
use crate::shape::LayoutShape;
use crate::stride;
use crate::values::{build_body_rows, locate};
use crate::view::GridModel;

// ============================================================================
// LAYOUT CALCULATOR
// ============================================================================

/// One layout run over a cube.
pub struct LayoutCalculator<'a, C: Cube + ?Sized> {
    cube: &'a C,
    shape: LayoutShape,
    labels: LabelResolver<'a, C>,
}

impl<'a, C: Cube + ?Sized> LayoutCalculator<'a, C> {
    /// Validates the cube against `config`. Fails before any layout work.
    pub fn new(cube: &'a C, config: &LayoutConfig) -> Result<Self, LayoutError> {
        let shape = LayoutShape::new(cube.sizes(), cube.value_count(), config)?;
        log::debug!(
            "layout shape: rows {:?} cols {:?} -> {} header rows, {} body rows, {}+{} columns",
            shape.row_dims,
            shape.col_dims,
            shape.num_header_rows,
            shape.num_body_rows,
            shape.num_label_cols,
            shape.num_value_cols,
        );

        Ok(LayoutCalculator {
            cube,
            shape,
            labels: LabelResolver::new(cube),
        })
    }

    pub fn shape(&self) -> &LayoutShape {
        &self.shape
    }

    /// Runs the layout and returns the finished grid.
    pub fn calculate(mut self) -> Result<GridModel, LayoutError> {
        let header_rows = build_header_rows(&self.shape, &mut self.labels)?;
        let body_rows = build_body_rows(self.cube, &self.shape, &mut self.labels)?;

        log::debug!(
            "layout complete: {} header rows, {} body rows, {} distinct labels",
            header_rows.len(),
            body_rows.len(),
            self.labels.resolved_count(),
        );

        Ok(GridModel {
            header_rows,
            body_rows,
            num_label_cols: self.shape.num_label_cols,
            num_value_cols: self.shape.num_value_cols,
        })
    }
}

// ============================================================================
// CELL ADDRESS
// ============================================================================

/// Where one flat value lands in the grid, and the labels that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAddress {
    pub offset: usize,
    /// Body row index.
    pub row: usize,
    /// Value column index (label columns not counted).
    pub col: usize,
    /// Row in the full grid, header rows included.
    pub grid_row: usize,
    /// Column in the full grid, label columns included.
    pub grid_col: usize,
    /// Category label of each row dimension.
    pub row_labels: Vec<String>,
    /// Category label of each column dimension.
    pub col_labels: Vec<String>,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Calculates the grid for `cube` split according to `config`.
/// This is the main entry point for the layout engine.
pub fn calculate_layout<C: Cube + ?Sized>(
    cube: &C,
    config: &LayoutConfig,
) -> Result<GridModel, LayoutError> {
    LayoutCalculator::new(cube, config)?.calculate()
}

/// Locates a single flat offset without building the whole grid.
///
/// Column labels name each column dimension by its own index, whatever the
/// header mode.
pub fn describe_offset<C: Cube + ?Sized>(
    cube: &C,
    config: &LayoutConfig,
    offset: usize,
) -> Result<CellAddress, LayoutError> {
    let shape = LayoutShape::new(cube.sizes(), cube.value_count(), config)?;
    let position = locate(&shape, offset)?;
    let mut labels = LabelResolver::new(cube);

    let mut row_labels = Vec::with_capacity(shape.num_label_cols);
    for (dim, category) in row_categories(&shape, position.row).into_iter().enumerate() {
        row_labels.push(labels.category(dim, category)?);
    }

    let mut col_labels = Vec::with_capacity(shape.col_dims.len());
    for (level, category) in stride::decompose(&shape.col_dims, position.col).into_iter().enumerate() {
        col_labels.push(labels.category(shape.split_index + level, category)?);
    }

    Ok(CellAddress {
        offset,
        row: position.row,
        col: position.col,
        grid_row: shape.num_header_rows + position.row,
        grid_col: shape.num_label_cols + position.col,
        row_labels,
        col_labels,
    })
}
