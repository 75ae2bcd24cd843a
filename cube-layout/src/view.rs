//! FILENAME: cube-layout/src/view.rs
//! Grid View - Renderable output of a layout.
//!
//! The grid model is a plain 2D description of the table: header rows on
//! top, body rows below, each cell tagged with its text and the axis it
//! labels. It holds no reference back to the cube and can be serialized,
//! cached by the caller, or discarded and re-derived at any time.

use serde::{Deserialize, Serialize};

// ============================================================================
// CELL TAGS
// ============================================================================

/// Which axis a label cell describes.
/// Renderers map this to header scoping (row header vs column header).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Col,
}

/// The kind of a body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Row label (category of a row dimension).
    Label,
    /// A cube value.
    Value,
}

// ============================================================================
// CELLS
// ============================================================================

/// A cell in one of the header rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// `None` for blank cells.
    pub text: Option<String>,
    pub axis: Option<Axis>,
}

impl HeaderCell {
    /// Blank corner cell above a label column.
    pub fn blank() -> Self {
        HeaderCell { text: None, axis: None }
    }

    /// Corner cell naming a row dimension.
    pub fn corner(label: String) -> Self {
        HeaderCell { text: Some(label), axis: None }
    }

    /// Column header holding a category label.
    pub fn column(label: String) -> Self {
        HeaderCell { text: Some(label), axis: Some(Axis::Col) }
    }

    /// Column header without a label.
    pub fn blank_column() -> Self {
        HeaderCell { text: None, axis: Some(Axis::Col) }
    }

    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// A cell in one of the body rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyCell {
    pub kind: CellKind,
    pub text: String,
    pub axis: Option<Axis>,
}

impl BodyCell {
    /// Row label cell.
    pub fn label(text: String) -> Self {
        BodyCell { kind: CellKind::Label, text, axis: Some(Axis::Row) }
    }

    /// Value cell. Missing values are passed as an empty string.
    pub fn value(text: String) -> Self {
        BodyCell { kind: CellKind::Value, text, axis: None }
    }

    pub fn is_label(&self) -> bool {
        self.kind == CellKind::Label
    }
}

// ============================================================================
// GRID MODEL
// ============================================================================

/// The complete, renderer-agnostic table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridModel {
    pub header_rows: Vec<Vec<HeaderCell>>,
    pub body_rows: Vec<Vec<BodyCell>>,
    /// Label cells at the start of every row.
    pub num_label_cols: usize,
    /// Value cells following the label cells in every body row.
    pub num_value_cols: usize,
}

impl GridModel {
    /// Total rows, header rows included.
    pub fn row_count(&self) -> usize {
        self.header_rows.len() + self.body_rows.len()
    }

    /// Cells per row.
    pub fn col_count(&self) -> usize {
        self.num_label_cols + self.num_value_cols
    }

    /// The value cell for flat `offset`, if it is inside the grid.
    pub fn value_at(&self, offset: usize) -> Option<&BodyCell> {
        if self.num_value_cols == 0 {
            return None;
        }
        let row = offset / self.num_value_cols;
        let col = self.num_label_cols + offset % self.num_value_cols;
        self.body_rows.get(row)?.get(col)
    }

    /// The label cells of body row `row`.
    pub fn row_labels(&self, row: usize) -> Option<&[BodyCell]> {
        self.body_rows
            .get(row)
            .map(|cells| &cells[..self.num_label_cols.min(cells.len())])
    }
}
