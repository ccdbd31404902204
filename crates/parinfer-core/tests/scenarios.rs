//! The six worked scenarios from spec.md §8, as integration tests.

use parinfer_core::{indent_mode, paren_mode, ChangedLine, ErrorKind, Options};

#[test]
fn scenario_1_indent_mode_closes_open_paren() {
    let result = indent_mode("(foo", &Options::default());
    assert!(result.success);
    assert_eq!(result.text, "(foo)");
    assert_eq!(
        result.changed_lines,
        vec![ChangedLine { line_no: 0, line: "(foo)".to_string() }]
    );
}

#[test]
fn scenario_2_indent_mode_closes_where_indent_dictates() {
    let result = indent_mode("(foo (bar\nbaz)", &Options::default());
    assert!(result.success);
    assert_eq!(result.text, "(foo (bar)\nbaz)");
}

#[test]
fn scenario_3_paren_mode_corrects_unaligned_indent() {
    let result = paren_mode("(foo\n bar)", &Options::default());
    assert!(result.success);
    assert_eq!(result.text, "(foo\n  bar)");
}

#[test]
fn scenario_4_unclosed_quote_fails_with_position() {
    let result = indent_mode("(foo \"hi", &Options::default());
    assert!(!result.success);
    let err = result.error.unwrap();
    assert_eq!(err.kind, ErrorKind::UnclosedQuote);
    assert_eq!(err.line_no, 0);
    assert_eq!(err.x, 5);
    assert_eq!(result.text, "(foo \"hi");
}

#[test]
fn scenario_5_quote_danger_in_comment_fails_at_cached_position() {
    let result = indent_mode("(foo ; bar \"baz", &Options::default());
    assert!(!result.success);
    let err = result.error.unwrap();
    assert_eq!(err.kind, ErrorKind::QuoteDanger);
    assert_eq!(err.line_no, 0);
    assert_eq!(err.x, 11);
    assert_eq!(result.text, "(foo ; bar \"baz");
}

#[test]
fn scenario_6_trailing_backslash_at_eol_in_code_fails() {
    let result = indent_mode("(foo\\\n bar)", &Options::default());
    assert!(!result.success);
    let err = result.error.unwrap();
    assert_eq!(err.kind, ErrorKind::EolBackslash);
    assert_eq!(err.line_no, 0);
    assert_eq!(err.x, 4);
    assert_eq!(result.text, "(foo\\\n bar)");
}
