//! End-to-end rendering scenarios.

use gridtable::measure::display_width;
use gridtable::wrap::wrap;
use gridtable::{Align, ColumnStyle, Table, TableStyle, VerticalAlign};

// ============================================================================
// Helpers
// ============================================================================

fn people() -> Table {
    let mut table = Table::new(["Name", "Age"]).unwrap();
    table.add_row(["Alice", "30"]);
    table
}

fn assert_rectangular(output: &str) {
    let widths: Vec<usize> = output.lines().map(display_width).collect();
    assert!(
        widths.windows(2).all(|w| w[0] == w[1]),
        "ragged output:\n{}",
        output
    );
}

// ============================================================================
// Basic grids
// ============================================================================

#[test]
fn two_by_two_grid() {
    let mut table = people();
    let expected = "\
+-------+-----+
| Name  | Age |
+-------+-----+
| Alice | 30  |
+-------+-----+
";
    assert_eq!(table.render(0), expected);
}

#[test]
fn short_row_renders_empty_cell() {
    let mut table = people();
    table.add_row(["Bob"]);
    let output = table.render(0);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[5], "| Bob   |     |");
    assert_eq!(lines.len(), 7);
}

#[test]
fn lookup_by_name() {
    let table = people();
    let age = table.column_by_name("Age").unwrap();
    assert_eq!(age.name(), "Age");
    assert!(std::ptr::eq(age, table.column(1).unwrap()));
    assert!(table.column_by_name("Missing").is_none());
}

#[test]
fn wide_characters_keep_grid_aligned() {
    let mut table = Table::new(["Word", "Meaning"]).unwrap();
    table.add_row(["日本", "Japan"]);
    table.add_row(["café", "coffee"]);
    assert_rectangular(&table.render(0));
}

#[test]
fn header_style_is_used_only_for_header() {
    let mut table = people();
    table
        .column_by_name_mut("Name")
        .unwrap()
        .set_header_style(ColumnStyle::new().align(Align::Right));
    let output = table.render(0);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "|  Name | Age |");
    assert_eq!(lines[3], "| Alice | 30  |");
}

#[test]
fn zero_padding_columns() {
    let mut table = people();
    for i in 0..2 {
        table
            .column_mut(i)
            .unwrap()
            .set_style(ColumnStyle::new().no_padding());
    }
    assert_eq!(
        table.render(0),
        "+-----+---+\n|Name |Age|\n+-----+---+\n|Alice|30 |\n+-----+---+\n"
    );
}

// ============================================================================
// Shrinking and wrapping
// ============================================================================

#[test]
fn long_text_wraps_on_word_boundaries() {
    let text = "the quick brown fox jumps over the lazy dog and more";
    let mut table = Table::new(["Text"]).unwrap();
    table.add_row([text]);

    // Natural width 54 + 2 borders; a 19 column terminal leaves a usable
    // width of 10 after the five column margin.
    let layout = table.layout(19);
    assert!(layout.shrunk);
    assert_eq!(layout.widths, vec![12]);

    let cell = &table.rows()[1].cells()[0];
    assert_eq!(cell.parts(), wrap(text, 10).as_slice());
    assert!(cell.parts().iter().all(|p| display_width(p) <= 10));
    assert_eq!(cell.parts().join(" "), text);
}

#[test]
fn oversized_word_is_truncated_one_short() {
    let mut table = Table::new(["Text"]).unwrap();
    table.add_row(["short incomprehensibilities end"]);
    table.layout(19);

    let cell = &table.rows()[1].cells()[0];
    assert_eq!(cell.parts(), ["short", "incompreh", "end"]);
}

#[test]
fn five_equal_columns_fit_terminal() {
    let names = ["One", "Two", "Three", "Four", "Five"];
    let mut table = Table::new(names).unwrap();
    let value = "x".repeat(18);
    table.add_row(vec![value.as_str(); 5]);

    // Each column is 20 wide naturally: 106 columns with borders.
    let natural = table.layout(0);
    assert_eq!(natural.widths, vec![20; 5]);
    assert_eq!(natural.total_width, 106);

    let layout = table.layout(60);
    assert!(layout.shrunk);
    assert!(layout.widths.iter().all(|&w| w < 20));
    assert!(layout.total_width <= 60);

    let output = table.render(60);
    assert_rectangular(&output);
    assert!(output.lines().all(|l| display_width(l) <= 60));
}

#[test]
fn tiny_terminal_clamps_columns() {
    let mut table = Table::new(["A", "B"]).unwrap();
    table.add_row(["alpha beta gamma", "delta epsilon"]);
    let layout = table.layout(3);
    assert!(layout.widths.iter().all(|&w| w >= 3));
    assert_rectangular(&table.render(3));
}

#[test]
fn fits_without_shrink_at_exact_width() {
    let mut table = people();
    let natural = table.layout(0).total_width;
    let layout = table.layout(natural as i32);
    assert!(!layout.shrunk);
}

#[test]
fn middle_alignment_centers_short_cell() {
    let mut table = Table::new(["Text", "Mid"]).unwrap();
    table
        .column_mut(1)
        .unwrap()
        .set_style(ColumnStyle::new().vertical_align(VerticalAlign::Middle));
    table.add_row(["aaa bbb ccc", "m"]);

    let layout = table.layout(15);
    assert_eq!(layout.heights[1], 3);
    let output = table.render(15);
    let lines: Vec<&str> = output.lines().collect();
    // Body lines are 3, 4, 5; the middle one carries the short cell.
    assert!(lines[4].contains(" m "));
    assert!(!lines[3].contains(" m "));
    assert!(!lines[5].contains(" m "));
}

#[test]
fn light_borders_render() {
    let mut table = people();
    table.set_style(TableStyle::light());
    let output = table.render(0);
    assert!(output.lines().all(|l| l.starts_with('│') || l.starts_with('┼')));
    assert_rectangular(&output);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn reset_and_refill_reproduces_render() {
    let rows = [["Alice", "30"], ["Bob", "4"], ["Carol", "102"]];
    let mut table = Table::new(["Name", "Age"]).unwrap();
    for row in rows {
        table.add_row(row);
    }
    let before = table.render(0);

    table.reset();
    assert_eq!(table.rows().len(), 1);
    for row in rows {
        table.add_row(row);
    }
    assert_eq!(table.render(0), before);
}
