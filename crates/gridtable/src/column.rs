//! Named column slots and per-row style resolution.

use crate::row::Row;
use crate::style::ColumnStyle;

/// A named column with its current display width and presentation styles.
///
/// The width includes horizontal padding and is recomputed on every render.
/// An optional header style applies to the header row only; body rows (and
/// the header, when no header style is set) use [`Column::style`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    name: String,
    width: usize,
    style: ColumnStyle,
    header_style: Option<ColumnStyle>,
}

impl Column {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            width: 0,
            style: ColumnStyle::default(),
            header_style: None,
        }
    }

    /// The column's unique name (its header text).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in display columns from the last render, padding included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Style for body rows.
    pub fn style(&self) -> &ColumnStyle {
        &self.style
    }

    /// Style for the header row, if distinct from the body style.
    pub fn header_style(&self) -> Option<&ColumnStyle> {
        self.header_style.as_ref()
    }

    /// Replace the body style.
    pub fn set_style(&mut self, style: ColumnStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Give the header row its own style.
    pub fn set_header_style(&mut self, style: ColumnStyle) -> &mut Self {
        self.header_style = Some(style);
        self
    }

    /// Drop the header style so the header uses the body style again.
    pub fn clear_header_style(&mut self) -> &mut Self {
        self.header_style = None;
        self
    }

    pub(crate) fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    pub(crate) fn style_for(&self, is_header: bool) -> &ColumnStyle {
        match (&self.header_style, is_header) {
            (Some(header), true) => header,
            _ => &self.style,
        }
    }
}

/// Picks the style that governs `column` when rendering `row`.
///
/// # Example
///
/// ```rust
/// use gridtable::{resolve_style, Align, ColumnStyle, Table};
///
/// let mut table = Table::new(["Name"]).unwrap();
/// table.add_row(["Alice"]);
/// table
///     .column_by_name_mut("Name")
///     .unwrap()
///     .set_header_style(ColumnStyle::new().align(Align::Center));
///
/// let column = table.column(0).unwrap();
/// assert_eq!(resolve_style(column, &table.rows()[0]).align, Align::Center);
/// assert_eq!(resolve_style(column, &table.rows()[1]).align, Align::Left);
/// ```
pub fn resolve_style<'a>(column: &'a Column, row: &Row) -> &'a ColumnStyle {
    column.style_for(row.is_header())
}
