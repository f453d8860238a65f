//! Greedy word wrapping for cells that no longer fit their column.
//!
//! Text is split on single spaces and packed into lines left to right. A line
//! is closed as soon as the next word would fill it exactly or overflow it, so
//! every line is at most `width` columns wide.
//!
//! # Oversized words
//!
//! A word wider than `width` cannot be broken at a word boundary. It is cut to
//! `width - 1` columns and emitted on a line of its own; the rest of the word
//! is dropped and never reconsidered. This loses text. Callers that need every
//! character preserved must keep their words narrower than the column.
//!
//! ```rust
//! use gridtable::wrap::wrap;
//!
//! assert_eq!(wrap("hello world foo bar", 12), vec!["hello world", "foo bar"]);
//! assert_eq!(wrap("a extraordinarily b", 10), vec!["a", "extraordi", "b"]);
//! ```

use crate::measure::{display_width, truncate_to_width};

/// Wraps `text` into lines no wider than `width` display columns.
///
/// Runs of spaces collapse to a single separator. Empty input yields no lines.
/// A `width` of 0 is treated as 1.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = LineBuffer::default();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let word_width = display_width(word);

        if word_width > width {
            line.flush_into(&mut lines);
            lines.push(truncate_to_width(word, width - 1));
            continue;
        }

        if line.width + word_width >= width {
            line.flush_into(&mut lines);
        }
        line.push_word(word, word_width, width);
    }

    line.flush_into(&mut lines);
    log::trace!("wrapped {:?} at width {} into {} lines", text, width, lines.len());
    lines
}

/// Pending line text. `width` counts the trailing separator, if any.
#[derive(Default)]
struct LineBuffer {
    text: String,
    width: usize,
}

impl LineBuffer {
    fn push_word(&mut self, word: &str, word_width: usize, limit: usize) {
        self.text.push_str(word);
        self.width += word_width;
        if self.width + 1 < limit {
            self.text.push(' ');
            self.width += 1;
        }
    }

    fn flush_into(&mut self, lines: &mut Vec<String>) {
        if self.text.is_empty() {
            return;
        }
        lines.push(self.text.trim_end_matches(' ').to_string());
        self.text.clear();
        self.width = 0;
    }
}
