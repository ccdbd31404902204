//! Walks lines, then characters, then finalizes (spec component: Driver).

use crate::error::ErrorKind;
use crate::state::State;
use crate::{Mode, ParinferError};

impl State {
    /// One character through the full per-char pipeline: cursor delta (Paren
    /// Mode), indent dispatch, classifier + trail-bounds update, then commit
    /// the (possibly rewritten) character into the line buffer.
    pub(crate) fn process_char(&mut self, ch: char) -> Result<(), ParinferError> {
        let orig_ch = ch.to_string();
        self.ch = orig_ch.clone();
        self.skip_char = false;

        if matches!(self.mode, Mode::Paren) {
            self.handle_cursor_delta();
        }

        if self.tracking_indent && ch != ' ' && ch != '\t' {
            self.on_indent()?;
        }

        if self.skip_char {
            self.ch = String::new();
        } else {
            self.on_char()?;
            self.update_paren_trail_bounds();
        }

        self.commit_char(&orig_ch);
        Ok(())
    }

    /// One line: append it to the output buffer, prime per-line state, then
    /// stream every character (plus a synthetic trailing LF, spec §9) through
    /// `process_char`.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<(), ParinferError> {
        self.init_line(line.to_string());

        self.tracking_indent = match self.mode {
            Mode::Indent => !self.paren_stack.is_empty() && !self.is_in_str,
            Mode::Paren => !self.is_in_str,
        };

        for c in line.chars().chain(std::iter::once('\n')) {
            self.process_char(c)?;
        }

        if Some(self.line_no_usize()) == self.paren_trail.line_no {
            self.finish_new_paren_trail();
        }
        Ok(())
    }

    /// Runs once after every line has been processed.
    pub(crate) fn finalize_result(&mut self) -> Result<(), ParinferError> {
        if self.quote_danger {
            return Err(self.new_error(ErrorKind::QuoteDanger, None));
        }
        if self.is_in_str {
            return Err(self.new_error(ErrorKind::UnclosedQuote, None));
        }
        if !self.paren_stack.is_empty() {
            match self.mode {
                Mode::Paren => {
                    let opener = *self.paren_stack.last().expect("checked non-empty above");
                    return Err(self.new_error(ErrorKind::UnclosedParen, Some((opener.line_no, opener.x))));
                }
                Mode::Indent => self.correct_paren_trail(0),
            }
        }
        self.success = true;
        Ok(())
    }
}

/// Runs a full mode over `text`, catching the single error exit path once
/// (spec §9's "result-or-error sum type propagated ... process-text catches
/// once").
pub(crate) fn process_text(text: &str, options: &crate::Options, mode: Mode) -> State {
    let mut state = State::new(text, options, mode);

    let outcome: Result<(), ParinferError> = (|| {
        for i in 0..state.orig_lines.len() {
            let line = state.orig_lines[i].clone();
            state.process_line(&line)?;
        }
        state.finalize_result()
    })();

    if let Err(e) = outcome {
        state.process_error(e);
    }

    state
}
