//! FILENAME: cube-layout/src/lib.rs
//! Cube layout subsystem.
//!
//! This crate projects a labeled N-dimensional data cube (values stored flat
//! in row-major order) onto a two-dimensional grid: leading dimensions become
//! nested row labels, trailing dimensions become nested column headers.
//!
//! Layers:
//! - `stride`: Row-major offset arithmetic (products over dimension sizes)
//! - `definition`: Serializable configuration (how the cube is split)
//! - `cube`: The input abstraction and an owned, serde-backed cube
//! - `shape`: Structural constants derived from sizes + configuration
//! - `header`, `row_labels`, `values`: The three grid builders
//! - `view`: Renderable output (WHAT we display)
//! - `engine`: Assembly of the grid (HOW we calculate)
//! - `render`: Reference consumers of the grid (HTML, plain text, spans)

pub mod error;
pub mod stride;
pub mod definition;
pub mod cube;
pub mod shape;
pub mod labels;
pub mod header;
pub mod row_labels;
pub mod values;
pub mod view;
pub mod engine;
pub mod render;

pub use error::{ConfigurationError, LayoutError};
pub use definition::*;
pub use cube::{Cube, CubeData, CubeValue, DimensionData};
pub use shape::LayoutShape;
pub use values::ValuePosition;
pub use view::*;
pub use engine::{calculate_layout, describe_offset, CellAddress, LayoutCalculator};
pub use render::{
    merge_header_spans, nested_header_spans, render_html, render_text, HeaderSpan, HtmlOptions,
};
