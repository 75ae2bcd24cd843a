//! FILENAME: cube-layout/src/render.rs
//! Grid renderers - consumers of a finished GridModel.
//!
//! The layout engine never builds markup. These helpers turn a GridModel
//! into HTML or plain text and compute header spans, honoring the axis tags
//! (row vs column scoping) on every cell.

use serde::{Deserialize, Serialize};
use crate::view::{Axis, BodyCell, GridModel, HeaderCell};

// ============================================================================
// HEADER SPANS
// ============================================================================

/// A run of consecutive header cells with the same text and axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpan {
    /// Index of the first cell of the run.
    pub start: usize,
    /// Number of cells in the run (at least 1).
    pub span: usize,
    pub text: Option<String>,
    pub axis: Option<Axis>,
}

impl HeaderSpan {
    fn single(start: usize, cell: &HeaderCell) -> Self {
        HeaderSpan {
            start,
            span: 1,
            text: cell.text.clone(),
            axis: cell.axis,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.span
    }
}

/// Collapses consecutive column header cells with identical text into spans.
/// Corner cells are never merged.
pub fn merge_header_spans(row: &[HeaderCell]) -> Vec<HeaderSpan> {
    split_spans(row, &[])
}

/// Spans for every header row, where a run never crosses a span boundary of
/// the row above it. This keeps inner header levels nested under their
/// parents even when neighbouring parents repeat the same child label.
pub fn nested_header_spans(rows: &[Vec<HeaderCell>]) -> Vec<Vec<HeaderSpan>> {
    let mut result: Vec<Vec<HeaderSpan>> = Vec::with_capacity(rows.len());
    let mut boundaries: Vec<usize> = Vec::new();

    for row in rows {
        let spans = split_spans(row, &boundaries);
        boundaries.extend(spans.iter().map(HeaderSpan::end));
        boundaries.sort_unstable();
        boundaries.dedup();
        result.push(spans);
    }
    result
}

fn split_spans(row: &[HeaderCell], boundaries: &[usize]) -> Vec<HeaderSpan> {
    let mut spans: Vec<HeaderSpan> = Vec::new();

    for (idx, cell) in row.iter().enumerate() {
        if let Some(last) = spans.last_mut() {
            let mergeable = cell.axis == Some(Axis::Col)
                && last.axis == Some(Axis::Col)
                && last.text == cell.text
                && boundaries.binary_search(&idx).is_err();
            if mergeable {
                last.span += 1;
                continue;
            }
        }
        spans.push(HeaderSpan::single(idx, cell));
    }
    spans
}

// ============================================================================
// HTML
// ============================================================================

/// Options for `render_html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HtmlOptions {
    /// CSS class on the `<table>` element.
    pub class: Option<String>,
    /// Merge repeated column headers into `colspan` cells.
    pub merge_spans: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            class: Some("jst-viz".to_string()),
            merge_spans: false,
        }
    }
}

/// Renders the grid as an HTML table.
///
/// Header and label cells become `<th>` (with `scope` taken from the axis),
/// values become `<td>`. All text is escaped.
pub fn render_html(grid: &GridModel, options: &HtmlOptions) -> String {
    let mut out = String::new();

    match &options.class {
        Some(class) => out.push_str(&format!("<table class=\"{}\">", escape_html(class))),
        None => out.push_str("<table>"),
    }

    if !grid.header_rows.is_empty() {
        out.push_str("<thead>");
        let spans = if options.merge_spans {
            nested_header_spans(&grid.header_rows)
        } else {
            grid.header_rows
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(i, c)| HeaderSpan::single(i, c))
                        .collect::<Vec<_>>()
                })
                .collect()
        };
        for row in &spans {
            out.push_str("<tr>");
            for span in row {
                push_header_span(&mut out, span);
            }
            out.push_str("</tr>");
        }
        out.push_str("</thead>");
    }

    out.push_str("<tbody>");
    for row in &grid.body_rows {
        out.push_str("<tr>");
        for cell in row {
            push_body_cell(&mut out, cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn push_header_span(out: &mut String, span: &HeaderSpan) {
    out.push_str("<th");
    if let Some(axis) = span.axis {
        out.push_str(&format!(" scope=\"{}\"", scope(axis)));
    }
    if span.span > 1 {
        out.push_str(&format!(" colspan=\"{}\"", span.span));
    }
    out.push('>');
    if let Some(text) = &span.text {
        out.push_str(&escape_html(text));
    }
    out.push_str("</th>");
}

fn push_body_cell(out: &mut String, cell: &BodyCell) {
    let tag = if cell.is_label() { "th" } else { "td" };
    out.push('<');
    out.push_str(tag);
    if let Some(axis) = cell.axis {
        out.push_str(&format!(" scope=\"{}\"", scope(axis)));
    }
    out.push('>');
    out.push_str(&escape_html(&cell.text));
    out.push_str(&format!("</{}>", tag));
}

fn scope(axis: Axis) -> &'static str {
    match axis {
        Axis::Row => "row",
        Axis::Col => "col",
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// ============================================================================
// PLAIN TEXT
// ============================================================================

/// Renders the grid as column-aligned plain text, with a rule under the
/// header rows. Value cells are right-aligned, labels left-aligned.
///
/// Widths count `char`s, so wide (CJK, emoji) or combining characters
/// will not line up in a terminal.
pub fn render_text(grid: &GridModel) -> String {
    let columns = grid.col_count();
    let mut widths = vec![0usize; columns];

    for row in &grid.header_rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.text_or_empty().chars().count());
        }
    }
    for row in &grid.body_rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(grid.row_count() + 1);
    for row in &grid.header_rows {
        let texts: Vec<(&str, bool)> = row.iter().map(|c| (c.text_or_empty(), false)).collect();
        lines.push(format_line(&texts, &widths));
    }
    if !grid.header_rows.is_empty() {
        let total = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
        lines.push("-".repeat(total));
    }
    for row in &grid.body_rows {
        let texts: Vec<(&str, bool)> = row.iter().map(|c| (c.text.as_str(), !c.is_label())).collect();
        lines.push(format_line(&texts, &widths));
    }

    lines.join("\n")
}

fn format_line(cells: &[(&str, bool)], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(&(text, right), &width)| {
            if right {
                format!("{:>width$}", text, width = width)
            } else {
                format!("{:<width$}", text, width = width)
            }
        })
        .collect();
    parts.join("  ").trim_end().to_string()
}
