//! FILENAME: cube-layout/src/row_labels.rs
//! PURPOSE: Builds the label cells at the start of each body row.
//! CONTEXT: A body row index is decomposed over the row-dimension group the
//! same way a value column is decomposed over the column group; label
//! column `k` shows the category of row dimension `k`.

use crate::cube::Cube;
use crate::error::LayoutError;
use crate::labels::LabelResolver;
use crate::shape::LayoutShape;
use crate::stride::{self, IndexPath};
use crate::view::BodyCell;

/// Category index of each row dimension for body row `row`.
pub fn row_categories(shape: &LayoutShape, row: usize) -> IndexPath {
    stride::decompose(&shape.row_dims, row)
}

/// Label cells for body row `row`, one per row dimension.
pub fn build_row_labels<C: Cube + ?Sized>(
    shape: &LayoutShape,
    labels: &mut LabelResolver<'_, C>,
    row: usize,
) -> Result<Vec<BodyCell>, LayoutError> {
    let mut cells = Vec::with_capacity(shape.num_label_cols);
    for (dim, category) in row_categories(shape, row).into_iter().enumerate() {
        cells.push(BodyCell::label(labels.category(dim, category)?));
    }
    Ok(cells)
}
