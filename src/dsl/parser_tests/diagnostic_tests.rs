//! Tests for diagnostics: line numbers, messages and hints.

use super::parse_err;

#[test]
fn reports_missing_colon_with_line_number() {
    let diags = parse_err("\nType: Bar\nA 10\n");
    let first = diags.first().unwrap();

    assert_eq!(diags.len(), 1);
    assert!(first.message.contains("Missing ':'"));
    assert_eq!(first.line, 3);
    assert_eq!(first.source_line.as_deref(), Some("A 10"));
}

#[test]
fn suggests_colon_instead_of_equals() {
    let diags = parse_err("Sales = 100");
    let first = diags.first().unwrap();

    assert_eq!(first.message, "Use ':' instead of '='");
    assert_eq!(first.hint.as_deref(), Some("Try: Sales : 100"));
}

#[test]
fn reports_invalid_number() {
    let diags = parse_err("Type: Bar\nA: abc");
    let first = diags.first().unwrap();

    assert!(first.message.contains("not a valid number"));
    assert!(first.message.contains("\"abc\""));
    assert_eq!(
        first.hint.as_deref(),
        Some("Use a number like: A: 100 (supports $, %, commas)")
    );
}

#[test]
fn reports_unknown_chart_type() {
    let diags = parse_err("Type: Pizza\nA: 10");
    let first = diags.first().unwrap();

    assert!(first.message.contains("Unknown chart type"));
    assert!(first.message.contains("Pizza"));
    let hint = first.hint.as_deref().unwrap();
    assert!(hint.contains("Valid types"));
    assert!(hint.contains("Did you mean \"pie\"?"));
}

#[test]
fn reports_no_data_points_for_empty_document() {
    let diags = parse_err("");
    let first = diags.first().unwrap();

    assert_eq!(diags.len(), 1);
    assert_eq!(first.line, 0);
    assert_eq!(first.message, "No data points found");
    assert!(first.hint.as_deref().unwrap().contains("Apples: 50"));
}

#[test]
fn reports_no_data_points_for_header_only_document() {
    let diags = parse_err("Type: Bar\nTitle: Empty\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.first().unwrap().message, "No data points found");
}

#[test]
fn comments_only_document_has_no_data() {
    let diags = parse_err("// nothing\n# here");
    assert_eq!(diags.first().unwrap().message, "No data points found");
}

#[test]
fn reports_empty_label() {
    let diags = parse_err(": 10");
    let first = diags.first().unwrap();
    assert_eq!(first.message, "Empty label before ':'");
    assert!(first.hint.is_some());
}

#[test]
fn reports_missing_value() {
    let diags = parse_err("Apples:");
    let first = diags.first().unwrap();
    assert_eq!(first.message, "Missing value after ':'");
    assert_eq!(first.hint.as_deref(), Some("Add a number value, e.g., \"Apples: 100\""));
}

#[test]
fn colon_inside_value_is_not_a_number() {
    let diags = parse_err("Time 10:30: 5");
    assert!(diags.first().unwrap().message.contains("\"30: 5\""));
}

#[test]
fn collects_all_diagnostics_in_document_order() {
    let diags = parse_err("Type: Pizza\nA 10\nB: 20\nC: lots\nD = 4");
    let lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 5]);
}

#[test]
fn no_partial_ir_when_some_rows_are_valid() {
    let diags = parse_err("A: 10\nB: nope\nC: 30");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.first().unwrap().line, 2);
}

#[test]
fn no_data_diagnostic_not_added_when_other_errors_exist() {
    let diags = parse_err("Type: Pizza");
    assert_eq!(diags.len(), 1);
    assert!(diags.first().unwrap().message.contains("Unknown chart type"));
}
