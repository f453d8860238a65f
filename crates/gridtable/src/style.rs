//! Border glyphs and per-column presentation options.
//!
//! [`TableStyle`] holds the three glyphs a table is drawn with and
//! [`ColumnStyle`] holds alignment and padding for a single column. Both are
//! plain data and can be deserialized from configuration files.
//!
//! # The Default Table Style
//!
//! Tables created with [`Table::new`](crate::Table::new) start from the
//! process-wide default style, which is ASCII (`|`, `-`, `+`) unless replaced
//! with [`set_default_table_style`].
//!
//! ```rust
//! use gridtable::{default_table_style, TableStyle};
//!
//! assert_eq!(default_table_style(), TableStyle::ascii());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::measure::display_width;

/// Horizontal text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, extra space on the right).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

/// Vertical placement of cell content inside a row taller than the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Content starts right after the top padding.
    #[default]
    Top,
    /// Content is centered over the row and shifted down by the top padding,
    /// staying clear of the bottom padding.
    Middle,
    /// Content ends right before the bottom padding.
    Bottom,
}

/// Presentation options for one column.
///
/// Padding is measured in display columns (left/right) and lines
/// (top/bottom). The default pads one space on each side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnStyle {
    pub align: Align,
    pub vertical_align: VerticalAlign,
    pub padding_left: usize,
    pub padding_right: usize,
    pub padding_top: usize,
    pub padding_bottom: usize,
}

impl Default for ColumnStyle {
    fn default() -> Self {
        ColumnStyle {
            align: Align::Left,
            vertical_align: VerticalAlign::Top,
            padding_left: 1,
            padding_right: 1,
            padding_top: 0,
            padding_bottom: 0,
        }
    }
}

impl ColumnStyle {
    /// Create a style with default alignment and padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set vertical alignment.
    pub fn vertical_align(mut self, vertical_align: VerticalAlign) -> Self {
        self.vertical_align = vertical_align;
        self
    }

    /// Set left and right padding.
    pub fn padding_x(mut self, left: usize, right: usize) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Set top and bottom padding.
    pub fn padding_y(mut self, top: usize, bottom: usize) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Remove all padding.
    pub fn no_padding(self) -> Self {
        self.padding_x(0, 0).padding_y(0, 0)
    }

    /// Total horizontal padding.
    pub fn horizontal_padding(&self) -> usize {
        self.padding_left + self.padding_right
    }

    /// Total vertical padding.
    pub fn vertical_padding(&self) -> usize {
        self.padding_top + self.padding_bottom
    }
}

/// Glyphs used to draw table borders.
///
/// Each field may be more than one character wide; border lines repeat
/// `horizontal_border` so that every line of the table has the same width.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    pub vertical_border: String,
    pub horizontal_border: String,
    pub corner: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::ascii()
    }
}

impl TableStyle {
    /// Create a style from the three border glyphs.
    pub fn new(
        vertical_border: impl Into<String>,
        horizontal_border: impl Into<String>,
        corner: impl Into<String>,
    ) -> Self {
        TableStyle {
            vertical_border: vertical_border.into(),
            horizontal_border: horizontal_border.into(),
            corner: corner.into(),
        }
    }

    /// ASCII borders: `|`, `-`, `+`.
    pub fn ascii() -> Self {
        Self::new("|", "-", "+")
    }

    /// Light box-drawing borders: `│`, `─`, `┼`.
    pub fn light() -> Self {
        Self::new("│", "─", "┼")
    }

    /// Heavy box-drawing borders: `┃`, `━`, `╋`.
    pub fn heavy() -> Self {
        Self::new("┃", "━", "╋")
    }

    /// Double-line borders: `║`, `═`, `╬`.
    pub fn double() -> Self {
        Self::new("║", "═", "╬")
    }

    pub(crate) fn vertical_width(&self) -> usize {
        display_width(&self.vertical_border)
    }

    pub(crate) fn corner_width(&self) -> usize {
        display_width(&self.corner)
    }
}

static DEFAULT_TABLE_STYLE: Lazy<RwLock<TableStyle>> =
    Lazy::new(|| RwLock::new(TableStyle::ascii()));

/// Returns a copy of the process-wide default table style.
pub fn default_table_style() -> TableStyle {
    match DEFAULT_TABLE_STYLE.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replaces the process-wide default table style.
///
/// Only tables created afterwards pick up the new style.
pub fn set_default_table_style(style: TableStyle) {
    let mut guard = match DEFAULT_TABLE_STYLE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = style;
}
