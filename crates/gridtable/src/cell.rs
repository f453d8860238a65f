//! A single table datum.

use crate::measure::display_width;

/// One cell: its text, measured width, and wrapped lines from the last render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    data: String,
    width: usize,
    parts: Vec<String>,
}

impl Cell {
    /// Create a cell and measure its display width.
    pub fn new(data: impl Into<String>) -> Self {
        let data = data.into();
        let width = display_width(&data);
        Cell {
            data,
            width,
            parts: Vec::new(),
        }
    }

    /// The cell text as supplied.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Display width of the cell text.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Lines produced by wrapping during the last render.
    ///
    /// Empty when the cell fit its column.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Whether the cell spans more than one line.
    pub fn is_wrapped(&self) -> bool {
        self.parts.len() > 1
    }

    /// Number of lines the cell occupies, ignoring padding.
    pub fn line_count(&self) -> usize {
        if self.is_wrapped() {
            self.parts.len()
        } else {
            1
        }
    }

    /// Text for a single-line cell: the sole wrapped part if wrapping cut the
    /// text down, otherwise the data itself.
    pub(crate) fn single_line(&self) -> &str {
        match self.parts.as_slice() {
            [only] => only,
            _ => &self.data,
        }
    }

    pub(crate) fn set_parts(&mut self, parts: Vec<String>) {
        self.parts = parts;
    }

    pub(crate) fn clear_parts(&mut self) {
        self.parts.clear();
    }
}

impl From<&str> for Cell {
    fn from(data: &str) -> Self {
        Cell::new(data)
    }
}

impl From<String> for Cell {
    fn from(data: String) -> Self {
        Cell::new(data)
    }
}
