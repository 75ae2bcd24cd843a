//! FILENAME: cube-layout/src/header.rs
//! PURPOSE: Builds the nested column-header rows and the corner cells.
//! CONTEXT: Header row `r` decomposes each value column index at level `r`
//! of the column-dimension group. Because the label only changes when the
//! category index changes, runs of identical labels mark the natural spans
//! of a nested header without any explicit colspan bookkeeping.

use crate::cube::Cube;
use crate::definition::HeaderMode;
use crate::error::LayoutError;
use crate::labels::LabelResolver;
use crate::shape::LayoutShape;
use crate::stride;
use crate::view::HeaderCell;

/// Cube dimension that labels header row `row`, or `None` when that
/// dimension does not exist and the row stays blank.
///
/// Past the last column dimension the decomposition yields category 0, so
/// paired rows there repeat the first category of the dimension they name.
pub fn header_dimension(shape: &LayoutShape, row: usize) -> Option<usize> {
    let dim = match shape.header_mode {
        HeaderMode::Paired => shape.split_index + row % 2,
        HeaderMode::PerDimension => shape.split_index + row,
    };
    (dim < shape.dimension_count).then_some(dim)
}

/// Builds all header rows: corner cells followed by column header cells.
pub fn build_header_rows<C: Cube + ?Sized>(
    shape: &LayoutShape,
    labels: &mut LabelResolver<'_, C>,
) -> Result<Vec<Vec<HeaderCell>>, LayoutError> {
    (0..shape.num_header_rows)
        .map(|row| build_header_row(shape, labels, row))
        .collect()
}

fn build_header_row<C: Cube + ?Sized>(
    shape: &LayoutShape,
    labels: &mut LabelResolver<'_, C>,
    row: usize,
) -> Result<Vec<HeaderCell>, LayoutError> {
    let mut cells = Vec::with_capacity(shape.row_width());

    // Row dimension names sit only on the row directly above the body.
    let is_last = row + 1 == shape.num_header_rows;
    for k in 0..shape.num_label_cols {
        if is_last {
            cells.push(HeaderCell::corner(labels.dimension(k)?));
        } else {
            cells.push(HeaderCell::blank());
        }
    }

    match header_dimension(shape, row) {
        Some(dim) => {
            for col in 0..shape.num_value_cols {
                let category = stride::category_index(&shape.col_dims, row, col);
                cells.push(HeaderCell::column(labels.category(dim, category)?));
            }
        }
        None => cells.extend((0..shape.num_value_cols).map(|_| HeaderCell::blank_column())),
    }

    log::trace!("header row {}: {} cells", row, cells.len());
    Ok(cells)
}
