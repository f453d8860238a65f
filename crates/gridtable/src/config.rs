//! YAML table configuration.
//!
//! A configuration file sets the border glyphs, a default body style, a header
//! style, and per-column overrides keyed by column name. Every section is
//! optional, and every style field falls back to its default.
//!
//! ```rust
//! use gridtable::{Align, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! border:
//!   vertical_border: "│"
//!   horizontal_border: "─"
//!   corner: "┼"
//! header:
//!   align: center
//! columns:
//!   Age:
//!     align: right
//! "#).unwrap();
//!
//! assert_eq!(config.columns["Age"].align, Align::Right);
//! ```
//!
//! A column listed under `columns` takes that style in full; other columns
//! take `defaults` when present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::style::{ColumnStyle, TableStyle};

/// Table presentation loaded from configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Border glyphs; the table keeps its current glyphs when absent.
    pub border: Option<TableStyle>,
    /// Body style for columns without their own entry.
    pub defaults: Option<ColumnStyle>,
    /// Style for the header row of every column.
    pub header: Option<ColumnStyle>,
    /// Body styles by column name.
    pub columns: BTreeMap<String, ColumnStyle>,
}

impl TableConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded table configuration from {}", path.as_ref().display());
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::style::{Align, VerticalAlign};
    use std::io::Write;

    #[test]
    fn empty_yaml_is_default() {
        let config = TableConfig::from_yaml("{}").unwrap();
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn partial_border_keeps_other_glyphs() {
        let config = TableConfig::from_yaml("border:\n  corner: \"*\"\n").unwrap();
        let border = config.border.unwrap();
        assert_eq!(border.corner, "*");
        assert_eq!(border.vertical_border, "|");
        assert_eq!(border.horizontal_border, "-");
    }

    #[test]
    fn full_config() {
        let config = TableConfig::from_yaml(
            r#"
defaults:
  padding_left: 0
  padding_right: 0
header:
  align: center
  vertical_align: middle
columns:
  Notes:
    vertical_align: bottom
    padding_top: 1
"#,
        )
        .unwrap();

        assert_eq!(config.defaults.as_ref().map(|s| s.horizontal_padding()), Some(0));
        let header = config.header.unwrap();
        assert_eq!(header.align, Align::Center);
        assert_eq!(header.vertical_align, VerticalAlign::Middle);
        let notes = &config.columns["Notes"];
        assert_eq!(notes.vertical_align, VerticalAlign::Bottom);
        assert_eq!(notes.padding_top, 1);
    }

    #[test]
    fn invalid_alignment_is_config_error() {
        let err = TableConfig::from_yaml("header:\n  align: sideways\n").unwrap_err();
        assert!(matches!(err, TableError::Config(_)));
    }

    #[test]
    fn from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "columns:\n  Age:\n    align: right").unwrap();
        let config = TableConfig::from_file(file.path()).unwrap();
        assert_eq!(config.columns["Age"].align, Align::Right);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
