//! Single-pass indent/paren inference for Lisp-family source code.
//!
//! [`indent_mode`] treats indentation as authoritative and corrects trailing
//! close-parens to match it. [`paren_mode`] treats parens as authoritative
//! and corrects indentation to match them. Both walk the input exactly
//! once, character by character, line by line; neither parses Lisp
//! semantics, builds an AST, or reformats anything not structurally
//! required.

mod cursor;
mod driver;
mod edit;
mod error;
mod indent;
mod lexical;
mod options;
mod paren_stack;
mod paren_trail;
mod state;

use serde::{Deserialize, Serialize};

pub use error::{ErrorKind, ParinferError};
pub use options::Options;

/// Which structure is authoritative for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Indentation is authoritative; trailing close-parens are corrected.
    Indent,
    /// Parens are authoritative; indentation is corrected.
    Paren,
}

/// One line whose content differs from the corresponding input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedLine {
    pub line_no: usize,
    pub line: String,
}

/// The outcome of a run: either the corrected text and the lines that
/// changed, or the original text verbatim alongside the error that aborted
/// the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParinferResult {
    pub text: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changed_lines: Vec<ChangedLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ParinferError>,
}

fn line_ending(text: &str) -> &'static str {
    if text.contains('\r') {
        "\r\n"
    } else {
        "\n"
    }
}

fn public_result(state: state::State) -> ParinferResult {
    if !state.success {
        let error = state.error;
        return ParinferResult {
            text: state.orig_text,
            success: false,
            changed_lines: Vec::new(),
            error,
        };
    }

    let ending = line_ending(&state.orig_text);
    let changed_lines = state.get_changed_lines();
    log::debug!(
        "parinfer run succeeded: {} line(s) changed",
        changed_lines.len()
    );
    ParinferResult {
        text: state.lines.join(ending),
        success: true,
        changed_lines,
        error: None,
    }
}

/// Run Indent Mode over `text`: indentation is authoritative, trailing
/// close-parens are corrected to match it.
pub fn indent_mode(text: &str, options: &Options) -> ParinferResult {
    log::trace!("indent_mode: {} line(s) of input", text.lines().count());
    let state = driver::process_text(text, options, Mode::Indent);
    public_result(state)
}

/// Run Paren Mode over `text`: parens are authoritative, indentation is
/// corrected to match them.
pub fn paren_mode(text: &str, options: &Options) -> ParinferResult {
    log::trace!("paren_mode: {} line(s) of input", text.lines().count());
    let state = driver::process_text(text, options, Mode::Paren);
    public_result(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_mode_closes_an_open_paren() {
        let result = indent_mode("(foo", &Options::default());
        assert!(result.success);
        assert_eq!(result.text, "(foo)");
        assert_eq!(
            result.changed_lines,
            vec![ChangedLine { line_no: 0, line: "(foo)".to_string() }]
        );
    }

    #[test]
    fn paren_mode_corrects_misaligned_indent() {
        let result = paren_mode("(foo\n bar)", &Options::default());
        assert!(result.success);
        assert_eq!(result.text, "(foo\n  bar)");
    }

    #[test]
    fn canonical_input_is_unchanged_by_both_modes() {
        let canonical = "(foo\n  (bar)\n  baz)";
        let indent = indent_mode(canonical, &Options::default());
        let paren = paren_mode(canonical, &Options::default());
        assert!(indent.success && indent.changed_lines.is_empty());
        assert!(paren.success && paren.changed_lines.is_empty());
        assert_eq!(indent.text, canonical);
        assert_eq!(paren.text, canonical);
    }

    #[test]
    fn unclosed_string_fails_with_position() {
        let result = indent_mode("(foo \"hi", &Options::default());
        assert!(!result.success);
        let err = result.error.unwrap();
        assert_eq!(err.kind, ErrorKind::UnclosedQuote);
        assert_eq!(err.line_no, 0);
        assert_eq!(err.x, 5);
        assert_eq!(result.text, "(foo \"hi");
    }
}
