//! Display-width measurement, truncation and padding.
//!
//! Widths are counted in terminal columns, not bytes: CJK characters take two
//! columns and zero-width marks take none.

use console::{measure_text_width, pad_str, truncate_str, Alignment};

use crate::style::Align;

/// Returns the number of terminal columns `s` occupies.
///
/// # Example
///
/// ```rust
/// use gridtable::measure::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Cuts `s` down to at most `max_width` columns, keeping the start.
///
/// No marker is appended. Strings that already fit are returned unchanged.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    truncate_str(s, max_width, "").into_owned()
}

/// Pads `s` with spaces to `width` columns according to `align`.
///
/// Center alignment puts `floor(diff / 2)` spaces on the left and the rest on
/// the right. Content wider than `width` is returned as-is.
///
/// # Example
///
/// ```rust
/// use gridtable::measure::align_text;
/// use gridtable::Align;
///
/// assert_eq!(align_text("ab", 5, Align::Left), "ab   ");
/// assert_eq!(align_text("ab", 5, Align::Right), "   ab");
/// assert_eq!(align_text("ab", 5, Align::Center), " ab  ");
/// ```
pub fn align_text(s: &str, width: usize, align: Align) -> String {
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    };
    pad_str(s, width, alignment, None).into_owned()
}

/// A run of `width` spaces.
pub fn blank(width: usize) -> String {
    " ".repeat(width)
}
