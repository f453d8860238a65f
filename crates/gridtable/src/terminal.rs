//! Terminal width discovery.
//!
//! Rendering never looks at the terminal itself; callers pass a width to
//! [`Table::render`](crate::Table::render). This module supplies that width
//! for [`Table::print`](crate::Table::print) and the command-line tool.
//!
//! # Detection Order
//!
//! 1. The `COLUMNS` environment variable, when it holds a positive integer.
//! 2. The width reported by the terminal attached to stdout.
//! 3. Otherwise 0, which renders without shrinking.
//!
//! Use [`set_width_detector`] to override detection in tests.

use once_cell::sync::Lazy;
use std::sync::Mutex;

type WidthDetector = fn() -> Option<usize>;

static WIDTH_DETECTOR: Lazy<Mutex<WidthDetector>> =
    Lazy::new(|| Mutex::new(default_width_detector));

/// Overrides the function used to find the terminal width.
///
/// # Example
///
/// ```rust
/// use gridtable::terminal::{detect_width, set_width_detector};
///
/// set_width_detector(|| Some(100));
/// assert_eq!(detect_width(), 100);
/// ```
pub fn set_width_detector(detector: WidthDetector) {
    let mut guard = match WIDTH_DETECTOR.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = detector;
}

/// Restores the built-in detector.
pub fn reset_width_detector() {
    set_width_detector(default_width_detector);
}

/// Returns the available terminal width, or 0 when it cannot be found.
pub fn detect_width() -> i32 {
    let detector = match WIDTH_DETECTOR.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    };
    let width = detector()
        .and_then(|w| i32::try_from(w).ok())
        .unwrap_or(0);
    log::debug!("detected terminal width {}", width);
    width
}

fn default_width_detector() -> Option<usize> {
    parse_columns(std::env::var("COLUMNS").ok().as_deref())
        .or_else(|| terminal_size::terminal_size().map(|(w, _)| w.0 as usize))
}

/// Parses a `COLUMNS` value; anything but a positive integer is ignored.
fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn parse_columns_accepts_positive() {
        assert_eq!(parse_columns(Some("120")), Some(120));
        assert_eq!(parse_columns(Some(" 80 ")), Some(80));
    }

    #[test]
    fn parse_columns_rejects_garbage() {
        assert_eq!(parse_columns(None), None);
        assert_eq!(parse_columns(Some("")), None);
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("-4")), None);
        assert_eq!(parse_columns(Some("wide")), None);
    }

    #[test]
    #[serial]
    fn detector_override() {
        set_width_detector(|| Some(72));
        assert_eq!(detect_width(), 72);
        reset_width_detector();
    }

    #[test]
    #[serial]
    fn unknown_width_is_zero() {
        set_width_detector(|| None);
        assert_eq!(detect_width(), 0);
        reset_width_detector();
    }

    #[test]
    #[serial]
    fn oversized_width_is_zero() {
        set_width_detector(|| Some(usize::MAX));
        assert_eq!(detect_width(), 0);
        reset_width_detector();
    }
}
