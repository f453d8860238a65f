//! The process-wide default table style.
//!
//! Kept in its own test binary because it mutates global state.

use gridtable::{default_table_style, set_default_table_style, Table, TableStyle};

#[test]
fn new_tables_pick_up_replaced_default() {
    assert_eq!(default_table_style(), TableStyle::ascii());

    let before = Table::new(["A"]).unwrap();
    set_default_table_style(TableStyle::double());
    let mut after = Table::new(["A"]).unwrap();

    assert_eq!(before.style(), &TableStyle::ascii());
    assert_eq!(after.style(), &TableStyle::double());
    assert!(after.render(0).starts_with('╬'));

    set_default_table_style(TableStyle::ascii());
}
