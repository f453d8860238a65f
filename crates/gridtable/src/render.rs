//! Grid emission: borders, padding, and horizontal/vertical alignment.
//!
//! Rendering consumes the widths and heights stored by
//! [`layout`](crate::layout) and writes one horizontal border above every
//! row, `row.height()` content lines per row, and a closing border:
//!
//! ```text
//! +------+-----+
//! | Name | Age |
//! +------+-----+
//! | Bob  | 42  |
//! +------+-----+
//! ```

use crate::cell::Cell;
use crate::column::Column;
use crate::measure::{align_text, blank};
use crate::row::Row;
use crate::style::{ColumnStyle, TableStyle, VerticalAlign};

/// Renders the whole grid. Every line, including the last, ends with `\n`.
pub(crate) fn render_grid(columns: &[Column], rows: &[Row], style: &TableStyle) -> String {
    let border = horizontal_border(columns, style);
    let mut out = String::new();

    for row in rows {
        out.push_str(&border);
        for line in 0..row.height() {
            write_row_line(&mut out, columns, row, line, style);
        }
    }
    out.push_str(&border);
    out
}

/// Corner glyphs joined by runs of the horizontal glyph, one run per column.
fn horizontal_border(columns: &[Column], style: &TableStyle) -> String {
    let run = style.vertical_width();
    let corner = style.corner_width();

    let mut line = String::new();
    for column in columns {
        line.push_str(&style.corner);
        line.push_str(
            &style
                .horizontal_border
                .repeat((run + column.width()).saturating_sub(corner)),
        );
    }
    line.push_str(&style.corner);
    line.push('\n');
    line
}

fn write_row_line(out: &mut String, columns: &[Column], row: &Row, line: usize, style: &TableStyle) {
    for (cell, column) in row.cells().iter().zip(columns) {
        out.push_str(&style.vertical_border);
        let column_style = column.style_for(row.is_header());
        out.push_str(&cell_line(cell, column, column_style, row.height(), line));
    }
    out.push_str(&style.vertical_border);
    out.push('\n');
}

/// One output line of a cell, exactly `column.width()` columns wide when the
/// content fits its usable width.
fn cell_line(
    cell: &Cell,
    column: &Column,
    style: &ColumnStyle,
    row_height: usize,
    line: usize,
) -> String {
    let band_end = row_height.saturating_sub(style.padding_bottom);
    if line < style.padding_top || line >= band_end {
        return blank(column.width());
    }

    let count = cell.line_count();
    let start = content_start(style, row_height, count);
    let text = if line >= start && line < start + count {
        if cell.is_wrapped() {
            cell.parts()[line - start].as_str()
        } else {
            cell.single_line()
        }
    } else {
        ""
    };

    let usable = column.width().saturating_sub(style.horizontal_padding());
    let mut out = blank(style.padding_left);
    out.push_str(&align_text(text, usable, style.align));
    out.push_str(&blank(style.padding_right));
    out
}

/// First line index of `count` content lines inside a row of `row_height`.
///
/// Middle centres over the whole row, then shifts down by the top padding;
/// it is pulled back up if that would run into the bottom padding.
pub(crate) fn content_start(style: &ColumnStyle, row_height: usize, count: usize) -> usize {
    let band = row_height.saturating_sub(style.vertical_padding());
    let last_start = style.padding_top + band.saturating_sub(count);
    match style.vertical_align {
        VerticalAlign::Top => style.padding_top,
        VerticalAlign::Middle => {
            let centred = row_height.saturating_sub(count) / 2 + style.padding_top;
            centred.min(last_start)
        }
        VerticalAlign::Bottom => last_start,
    }
}
