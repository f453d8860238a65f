//! Column width measurement, the shrink pass, and row height reconciliation.
//!
//! Layout runs from scratch on every render:
//!
//! 1. Each column gets its natural width: the widest cell plus that row's
//!    horizontal padding.
//! 2. If the bordered table is wider than the terminal, [`shrink`] takes the
//!    overflow (plus a small margin) out of the columns and cells that no
//!    longer fit are wrapped.
//! 3. Each row's height becomes the tallest cell's line count plus vertical
//!    padding.
//!
//! # The Shrink Heuristic
//!
//! [`shrink`] is not a constraint solver. It walks the columns in order,
//! accumulating each column's share of the total width, and cuts a column by
//! the accumulated share of whatever excess is still unassigned. Columns that
//! start out narrower than the mean are skipped while nothing has been cut
//! yet; a column exactly at the mean is cut, otherwise a table of equal
//! columns would never shrink. The rounding remainder comes off the widest column. The result depends
//! on column order and can push narrow tables far below the terminal width;
//! every column is clamped so at least one column of content stays visible.

use crate::column::Column;
use crate::row::Row;
use crate::style::TableStyle;
use crate::wrap::wrap;

/// Extra columns removed on top of the measured overflow.
pub const SHRINK_MARGIN: usize = 5;

/// Summary of the layout computed for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Final width of each column, padding included.
    pub widths: Vec<usize>,
    /// Height of each row in output lines.
    pub heights: Vec<usize>,
    /// Width of every rendered line, borders included.
    pub total_width: usize,
    /// Whether the shrink pass ran.
    pub shrunk: bool,
}

impl Layout {
    /// Number of output lines the table occupies, borders included.
    pub fn line_count(&self) -> usize {
        self.heights.iter().sum::<usize>() + self.heights.len() + 1
    }
}

/// Computes widths, wrapped parts and heights for `rows`, storing them on the
/// columns, cells and rows.
///
/// A `terminal_width` of zero or less means unconstrained.
pub(crate) fn apply(
    columns: &mut [Column],
    rows: &mut [Row],
    style: &TableStyle,
    terminal_width: i32,
) -> Layout {
    for row in rows.iter_mut() {
        for cell in row.cells_mut() {
            cell.clear_parts();
        }
    }

    let natural = natural_widths(columns, rows);
    for (column, &width) in columns.iter_mut().zip(&natural) {
        column.set_width(width);
    }

    let full_width = bordered_width(&natural, style);
    log::debug!(
        "natural widths {:?}, table width {}, terminal width {}",
        natural,
        full_width,
        terminal_width
    );

    let limit = usize::try_from(terminal_width).unwrap_or(0);
    let shrunk = limit > 0 && full_width > limit;
    if shrunk {
        let widths = shrink(&natural, &min_widths(columns, rows), full_width - limit);
        log::debug!("shrunk widths {:?}", widths);
        for (column, &width) in columns.iter_mut().zip(&widths) {
            column.set_width(width);
        }
        wrap_cells(columns, rows);
    }

    let heights = reconcile_heights(columns, rows);
    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    Layout {
        total_width: bordered_width(&widths, style),
        widths,
        heights,
        shrunk,
    }
}

/// Takes `overflow + SHRINK_MARGIN` columns out of `widths`.
///
/// `min_widths` holds the narrowest width each column may end at; columns the
/// heuristic drives below it are clamped, so the result can still exceed the
/// target for tables with few, narrow columns.
///
/// # Example
///
/// ```rust
/// use gridtable::layout::shrink;
///
/// let widths = shrink(&[20, 20, 20, 20, 20], &[3; 5], 46);
/// assert_eq!(widths, vec![10, 4, 5, 12, 18]);
/// ```
pub fn shrink(widths: &[usize], min_widths: &[usize], overflow: usize) -> Vec<usize> {
    let total: usize = widths.iter().sum();
    if total == 0 {
        return widths.to_vec();
    }

    let initial_excess = (overflow + SHRINK_MARGIN) as f64;
    let mean = total as f64 / widths.len() as f64;
    let mut excess = initial_excess;
    let mut cumulative_rate = 0.0;
    let mut widest = 0;
    let mut shrunk: Vec<i64> = widths.iter().map(|&w| w as i64).collect();

    for (i, &width) in widths.iter().enumerate() {
        cumulative_rate += 100.0 * width as f64 / total as f64;
        let applied = initial_excess - excess;
        if width as f64 + applied >= mean {
            let cut = (excess * cumulative_rate / 100.0).floor();
            shrunk[i] -= cut as i64;
            excess -= cut;
        }
        if shrunk[i] > shrunk[widest] {
            widest = i;
        }
    }

    if excess > 0.0 {
        shrunk[widest] -= excess.floor() as i64;
    }

    shrunk
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let min = min_widths.get(i).copied().unwrap_or(1) as i64;
            w.max(min) as usize
        })
        .collect()
}

fn natural_widths(columns: &[Column], rows: &[Row]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .filter_map(|row| {
                    let cell = row.cell(i)?;
                    let style = column.style_for(row.is_header());
                    Some(cell.width() + style.horizontal_padding())
                })
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Narrowest width per column that still leaves one column of content in
/// every row.
fn min_widths(columns: &[Column], rows: &[Row]) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            rows.iter()
                .map(|row| column.style_for(row.is_header()).horizontal_padding() + 1)
                .max()
                .unwrap_or(1)
        })
        .collect()
}

fn bordered_width(widths: &[usize], style: &TableStyle) -> usize {
    widths.iter().sum::<usize>() + style.vertical_width() * (widths.len() + 1)
}

fn wrap_cells(columns: &[Column], rows: &mut [Row]) {
    for row in rows.iter_mut() {
        let is_header = row.is_header();
        for (cell, column) in row.cells_mut().iter_mut().zip(columns) {
            let style = column.style_for(is_header);
            let usable = column
                .width()
                .saturating_sub(style.horizontal_padding())
                .max(1);
            if cell.width() > usable {
                let mut parts = wrap(cell.data(), usable);
                if parts.is_empty() {
                    parts.push(String::new());
                }
                cell.set_parts(parts);
            }
        }
    }
}

fn reconcile_heights(columns: &[Column], rows: &mut [Row]) -> Vec<usize> {
    rows.iter_mut()
        .map(|row| {
            let is_header = row.is_header();
            let height = row
                .cells()
                .iter()
                .zip(columns)
                .map(|(cell, column)| {
                    cell.line_count() + column.style_for(is_header).vertical_padding()
                })
                .max()
                .unwrap_or(1);
            row.set_height(height);
            row.height()
        })
        .collect()
}
