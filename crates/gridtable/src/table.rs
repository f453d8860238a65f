//! The table orchestrator: column/row ownership and the render pipeline.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};

use crate::cell::Cell;
use crate::column::Column;
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::layout::{self, Layout};
use crate::render::render_grid;
use crate::row::Row;
use crate::style::{default_table_style, TableStyle};
use crate::terminal;

/// A text table with a fixed set of named columns.
///
/// Columns come from the header names given to [`Table::new`]; the header
/// row is always row 0. Body rows are appended with [`Table::add_row`].
/// Widths, wrapping and row heights are recomputed on every render, so a
/// table can be rendered repeatedly at different terminal widths.
///
/// # Example
///
/// ```rust
/// use gridtable::Table;
///
/// let mut table = Table::new(["Name", "Age"]).unwrap();
/// table.add_row(["Alice", "30"]);
///
/// assert_eq!(
///     table.render(0),
///     "+-------+-----+\n\
///      | Name  | Age |\n\
///      +-------+-----+\n\
///      | Alice | 30  |\n\
///      +-------+-----+\n"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    rows: Vec<Row>,
    style: TableStyle,
}

impl Table {
    /// Create a table with one column per name and append the header row.
    ///
    /// Fails with [`TableError::DuplicateColumn`] if a name repeats.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = Vec::new();
        let mut index = HashMap::new();
        for name in names {
            let name = name.as_ref();
            if index.insert(name.to_string(), columns.len()).is_some() {
                return Err(TableError::DuplicateColumn(name.to_string()));
            }
            columns.push(Column::new(name));
        }

        let header = columns.iter().map(|c| Cell::new(c.name())).collect();
        Ok(Table {
            columns,
            index,
            rows: vec![Row::new(header, true)],
            style: default_table_style(),
        })
    }

    /// Append a body row.
    ///
    /// Values beyond the column count are dropped; missing values become
    /// empty cells.
    pub fn add_row<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let mut values = values.into_iter();
        let cells = (0..self.columns.len())
            .map(|_| match values.next() {
                Some(value) => Cell::new(value.to_string()),
                None => Cell::new(""),
            })
            .collect();
        self.rows.push(Row::new(cells, false));
    }

    /// Drop every body row, keeping the header.
    pub fn reset(&mut self) {
        self.rows.truncate(1);
    }

    /// Render the table for a terminal `terminal_width` columns wide.
    ///
    /// When the table is wider than the terminal, columns shrink and cell
    /// text wraps. A width of zero or less disables shrinking.
    pub fn render(&mut self, terminal_width: i32) -> String {
        self.layout(terminal_width);
        render_grid(&self.columns, &self.rows, &self.style)
    }

    /// Compute and store widths, wrapped lines and row heights without
    /// producing output.
    pub fn layout(&mut self, terminal_width: i32) -> Layout {
        layout::apply(&mut self.columns, &mut self.rows, &self.style, terminal_width)
    }

    /// Render at `terminal_width` into `writer`.
    ///
    /// Errors from `writer` are returned as they are.
    pub fn write_to<W: Write>(&mut self, writer: &mut W, terminal_width: i32) -> io::Result<()> {
        let output = self.render(terminal_width);
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render at the detected terminal width and write to stdout.
    pub fn print(&mut self) -> io::Result<()> {
        let width = terminal::detect_width();
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, width)
    }

    /// Apply border glyphs and column styles from a configuration.
    ///
    /// Fails with [`TableError::UnknownColumn`] if the configuration styles a
    /// column this table does not have; no style is changed in that case.
    pub fn apply_config(&mut self, config: &TableConfig) -> Result<()> {
        if let Some(name) = config.columns.keys().find(|n| !self.index.contains_key(*n)) {
            return Err(TableError::UnknownColumn(name.clone()));
        }

        if let Some(border) = &config.border {
            self.style = border.clone();
        }
        for column in &mut self.columns {
            let body = config
                .columns
                .get(column.name())
                .or(config.defaults.as_ref());
            if let Some(style) = body {
                column.set_style(style.clone());
            }
            if let Some(header) = &config.header {
                column.set_header_style(header.clone());
            }
        }
        Ok(())
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in order; row 0 is the header.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column at `index`, if any.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Mutable column at `index`, for assigning styles.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    /// Column named `name`, if any.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&i| &self.columns[i])
    }

    /// Mutable column named `name`, for assigning styles.
    pub fn column_by_name_mut(&mut self, name: &str) -> Option<&mut Column> {
        let i = *self.index.get(name)?;
        self.columns.get_mut(i)
    }

    /// The border glyphs in use.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Replace the border glyphs.
    pub fn set_style(&mut self, style: TableStyle) -> &mut Self {
        self.style = style;
        self
    }
}
