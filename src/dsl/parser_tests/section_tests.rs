//! Tests for the header -> data transition.

use super::{parse_err, parse_ok};

#[test]
fn header_key_after_data_is_a_data_row() {
    let ir = parse_ok("A: 10\nTitle: 20");
    assert!(ir.title.is_none());
    assert_eq!(ir.labels, vec!["A", "Title"]);
    assert_eq!(ir.values, vec![10.0, 20.0]);
}

#[test]
fn stray_text_header_after_data_is_a_number_error() {
    let diags = parse_err("A: 10\nTitle: Late");
    let first = diags.first().unwrap();
    assert_eq!(first.line, 2);
    assert!(first.message.contains("\"Late\" is not a valid number"));
}

#[test]
fn short_axis_keys_are_headers_only_before_data() {
    let ir = parse_ok("X: Month\nJan: 1\nX: 2");
    assert_eq!(ir.meta.unwrap().x_axis.as_deref(), Some("Month"));
    assert_eq!(ir.labels, vec!["Jan", "X"]);
}

#[test]
fn failed_data_row_still_ends_header_section() {
    // The first data row fails to parse but the section has still switched.
    let diags = parse_err("A: oops\nTitle: x");
    assert_eq!(diags.len(), 2);
}
