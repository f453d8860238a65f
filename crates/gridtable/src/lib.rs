//! # gridtable - Bordered Text Tables for the Terminal
//!
//! `gridtable` lays out rows of text as a bordered, padded, aligned grid. When
//! the table is wider than the terminal, columns shrink and cell text wraps
//! onto several lines so that the grid still fits.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridtable::Table;
//!
//! let mut table = Table::new(["Name", "Age"]).unwrap();
//! table.add_row(["Alice", "30"]);
//! table.add_row(["Bob"]);
//!
//! let output = table.render(0);
//! assert!(output.contains("| Bob   |     |"));
//! ```
//!
//! ## Core Concepts
//!
//! - [`Table`]: owns columns and rows and runs the render pipeline
//! - [`Column`]: a named slot with a width and a [`ColumnStyle`]
//! - [`Row`] / [`Cell`]: appended data; row 0 is always the header
//! - [`TableStyle`]: border glyphs, defaulting to [`default_table_style`]
//! - [`TableConfig`]: YAML configuration for borders and column styles
//!
//! ## Rendering Pipeline
//!
//! Every call to [`Table::render`] starts from scratch:
//!
//! 1. **Measure** - each column's natural width is its widest cell plus padding.
//! 2. **Shrink** - if the bordered table exceeds the terminal width, the
//!    [`layout::shrink`] heuristic narrows the columns.
//! 3. **Wrap** - cells wider than their column are reflowed with [`wrap::wrap`].
//! 4. **Heights** - each row is as tall as its tallest cell plus vertical padding.
//! 5. **Emit** - borders, padding and alignment are written line by line.
//!
//! ```rust
//! use gridtable::Table;
//!
//! let mut table = Table::new(["Id", "Description"]).unwrap();
//! table.add_row(["1", "the quick brown fox jumps over the lazy dog"]);
//!
//! let output = table.render(30);
//! assert!(output.lines().all(|line| gridtable::measure::display_width(line) <= 30));
//! ```
//!
//! ## Terminal Width
//!
//! [`Table::render`] takes the terminal width as an argument; zero or a
//! negative value renders at natural width. [`Table::print`] discovers the
//! width through [`terminal::detect_width`].

mod cell;
mod column;
mod config;
mod error;
pub mod layout;
pub mod measure;
mod render;
mod row;
mod style;
mod table;
pub mod terminal;
pub mod wrap;

pub use cell::Cell;
pub use column::{resolve_style, Column};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use layout::Layout;
pub use row::Row;
pub use style::{
    default_table_style, set_default_table_style, Align, ColumnStyle, TableStyle, VerticalAlign,
};
pub use table::Table;
