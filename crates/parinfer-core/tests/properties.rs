//! Quantified invariants from spec.md §8, checked with `proptest` the way
//! the wider pack uses it for formatter/parser invariants.

use parinfer_core::{indent_mode, paren_mode, Options};
use proptest::prelude::*;

/// Generates snippets drawn only from the alphabet the state machine
/// actually dispatches on, so most inputs land on interesting structural
/// transitions instead of being rejected as lexically inert.
fn lisp_fragment() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('('), Just(')'), Just('['), Just(']'), Just('{'), Just('}'),
            Just(' '), Just('\n'), Just(';'), Just('"'), Just('a'), Just('\\'),
        ],
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn code_parens(text: &str) -> (i64, i64) {
    let mut opens = 0i64;
    let mut closes = 0i64;
    let mut in_str = false;
    let mut in_comment = false;
    let mut escaping = false;
    for c in text.chars() {
        if escaping {
            escaping = false;
            continue;
        }
        match c {
            '\\' if !in_comment => escaping = true,
            '\n' => in_comment = false,
            '"' if !in_comment => in_str = !in_str,
            ';' if !in_str && !in_comment => in_comment = true,
            '(' | '[' | '{' if !in_str && !in_comment => opens += 1,
            ')' | ']' | '}' if !in_str && !in_comment => closes += 1,
            _ => {}
        }
    }
    (opens, closes)
}

proptest! {
    #[test]
    fn indent_mode_is_idempotent(text in lisp_fragment()) {
        let first = indent_mode(&text, &Options::default());
        if first.success {
            let second = indent_mode(&first.text, &Options::default());
            prop_assert!(second.success);
            prop_assert_eq!(second.text, first.text);
        }
    }

    #[test]
    fn paren_mode_is_idempotent(text in lisp_fragment()) {
        let first = paren_mode(&text, &Options::default());
        if first.success {
            let second = paren_mode(&first.text, &Options::default());
            prop_assert!(second.success);
            prop_assert_eq!(second.text, first.text);
        }
    }

    #[test]
    fn failure_returns_input_verbatim(text in lisp_fragment()) {
        let indent = indent_mode(&text, &Options::default());
        if !indent.success {
            prop_assert_eq!(&indent.text, &text);
        }
        let paren = paren_mode(&text, &Options::default());
        if !paren.success {
            prop_assert_eq!(&paren.text, &text);
        }
    }

    #[test]
    fn successful_output_has_no_raw_tabs(text in lisp_fragment()) {
        let indent = indent_mode(&text, &Options::default());
        if indent.success {
            prop_assert!(!indent.text.contains('\t'));
        }
        let paren = paren_mode(&text, &Options::default());
        if paren.success {
            prop_assert!(!paren.text.contains('\t'));
        }
    }

    #[test]
    fn successful_run_balances_structural_parens(text in lisp_fragment()) {
        let indent = indent_mode(&text, &Options::default());
        if indent.success {
            let (opens, closes) = code_parens(&indent.text);
            prop_assert_eq!(opens, closes);
        }
        let paren = paren_mode(&text, &Options::default());
        if paren.success {
            let (opens, closes) = code_parens(&paren.text);
            prop_assert_eq!(opens, closes);
        }
    }

    #[test]
    fn changed_lines_are_strictly_increasing_and_valid(text in lisp_fragment()) {
        let line_count = text.split('\n').count();
        let indent = indent_mode(&text, &Options::default());
        if indent.success {
            let mut prev: Option<usize> = None;
            for cl in &indent.changed_lines {
                prop_assert!(cl.line_no < line_count);
                if let Some(p) = prev {
                    prop_assert!(cl.line_no > p);
                }
                prev = Some(cl.line_no);
            }
        }
    }
}

#[test]
fn canonical_form_is_identity_for_both_modes() {
    let canonical = "(foo\n  (bar)\n  baz)";
    let indent = indent_mode(canonical, &Options::default());
    let paren = paren_mode(canonical, &Options::default());
    assert!(indent.success && indent.changed_lines.is_empty());
    assert!(paren.success && paren.changed_lines.is_empty());
    assert_eq!(indent.text, canonical);
    assert_eq!(paren.text, canonical);
}
