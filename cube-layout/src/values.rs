//! FILENAME: cube-layout/src/values.rs
//! PURPOSE: Places every flat value offset into the grid body.
//! CONTEXT: Offsets are walked in order. Each run of `num_value_cols`
//! consecutive offsets forms one body row, so the column of an offset is
//! `offset % num_value_cols`, which matches the column-header ordering.

use crate::cube::Cube;
use crate::error::{ConfigurationError, LayoutError};
use crate::labels::LabelResolver;
use crate::row_labels::build_row_labels;
use crate::shape::LayoutShape;
use crate::view::BodyCell;

/// Body coordinates of one value (`col` counts value columns only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuePosition {
    pub row: usize,
    pub col: usize,
}

/// Row and value column of flat `offset`.
pub fn locate(shape: &LayoutShape, offset: usize) -> Result<ValuePosition, LayoutError> {
    let value_count = shape.value_count();
    if offset >= value_count {
        return Err(ConfigurationError::OffsetOutOfRange { offset, value_count }.into());
    }
    Ok(ValuePosition {
        row: offset / shape.num_value_cols,
        col: offset % shape.num_value_cols,
    })
}

/// Flat offset at body `row` and value column `col`.
pub fn offset_at(shape: &LayoutShape, row: usize, col: usize) -> Option<usize> {
    if row >= shape.num_body_rows || col >= shape.num_value_cols {
        return None;
    }
    Some(row * shape.num_value_cols + col)
}

/// Streams the cube's values into body rows, each prefixed with its labels.
pub fn build_body_rows<C: Cube + ?Sized>(
    cube: &C,
    shape: &LayoutShape,
    labels: &mut LabelResolver<'_, C>,
) -> Result<Vec<Vec<BodyCell>>, LayoutError> {
    let mut rows: Vec<Vec<BodyCell>> = Vec::with_capacity(shape.num_body_rows);
    let mut current: Vec<BodyCell> = Vec::new();

    for offset in 0..cube.value_count() {
        if offset % shape.num_value_cols == 0 {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let row = offset / shape.num_value_cols;
            current.reserve(shape.row_width());
            current.extend(build_row_labels(shape, labels, row)?);
            log::trace!("body row {} starts at offset {}", row, offset);
        }

        let text = cube
            .value_text(offset)
            .map(|t| t.into_owned())
            .unwrap_or_default();
        current.push(BodyCell::value(text));
    }

    if !current.is_empty() {
        rows.push(current);
    }
    Ok(rows)
}
