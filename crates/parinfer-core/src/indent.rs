//! On the first non-whitespace character of a line, either correct the
//! indent (Paren Mode) or the paren trail (Indent Mode) (spec component:
//! Indent handler).

use crate::error::ErrorKind;
use crate::paren_stack::{is_close_paren, is_valid_close_paren, matching_paren};
use crate::state::State;
use crate::{Mode, ParinferError};

impl State {
    /// Dispatched once per line, on the first character that isn't a space
    /// or tab while `trackingIndent` is set.
    pub(crate) fn on_indent(&mut self) -> Result<(), ParinferError> {
        let ch = self.ch.chars().next().expect("on_indent runs on a single raw char");
        if is_close_paren(ch) {
            self.on_leading_close_paren()?;
        } else if ch == ';' {
            // Comments don't establish an indentation point.
            self.tracking_indent = false;
        } else if ch != '\n' {
            self.on_proper_indent()?;
        }
        Ok(())
    }

    fn on_proper_indent(&mut self) -> Result<(), ParinferError> {
        self.tracking_indent = false;

        if self.quote_danger {
            return Err(self.new_error(ErrorKind::QuoteDanger, None));
        }

        match self.mode {
            Mode::Indent => {
                let indent_x = self.x;
                self.correct_paren_trail(indent_x);
            }
            Mode::Paren => self.correct_indent(),
        }
        Ok(())
    }

    fn on_leading_close_paren(&mut self) -> Result<(), ParinferError> {
        self.skip_char = true;
        self.tracking_indent = true;

        if matches!(self.mode, Mode::Paren) {
            let ch = self.ch.chars().next().expect("leading close-paren is a single char");
            if is_valid_close_paren(&self.paren_stack, ch) {
                if self.cursor_on_left() {
                    self.skip_char = false;
                    self.on_proper_indent()?;
                } else {
                    self.append_paren_trail();
                }
            }
        }
        Ok(())
    }

    /// Close, at the current indent boundary, every opener that indent no
    /// longer justifies: pop while the stack top's column is at or past
    /// `indent_x`, accumulating the matching closers, then splice them in
    /// at the trail's start.
    pub(crate) fn correct_paren_trail(&mut self, indent_x: usize) {
        let mut parens = String::new();
        while let Some(opener) = self.paren_stack.last().copied() {
            if opener.x >= indent_x {
                self.paren_stack.pop();
                parens.push(matching_paren(opener.ch).expect("opener.ch is always an open-paren"));
            } else {
                break;
            }
        }

        let line_no = self
            .paren_trail
            .line_no
            .expect("a non-empty paren stack implies the trail was reset by the opener's own line");
        let start_x = self.paren_trail.start_x.expect("trail start set alongside trail line");
        if !parens.is_empty() {
            log::debug!(
                "indent: correct_paren_trail inserting \"{parens}\" at ({line_no}, {start_x})"
            );
        }
        self.insert_within_line(line_no, start_x, &parens);
    }

    /// Shift this line's indent to sit strictly right of the enclosing
    /// open-paren and within `maxIndent`, propagating the shift as
    /// `indentDelta` for later lines of the same form.
    fn correct_indent(&mut self) {
        let orig_indent = self.x;
        let mut new_indent = orig_indent as isize;
        let mut min_indent: usize = 0;
        let max_indent = self.max_indent;

        if let Some(opener) = self.paren_stack.last().copied() {
            min_indent = opener.x + 1;
            new_indent += opener.indent_delta;
        }

        new_indent = new_indent.max(min_indent as isize);
        if let Some(max) = max_indent {
            new_indent = new_indent.min(max as isize);
        }
        let new_indent = new_indent as usize;

        if new_indent != orig_indent {
            let indent_str = " ".repeat(new_indent);
            let line_no = self.line_no_usize();
            log::debug!(
                "indent: correct_indent line {line_no} {orig_indent} -> {new_indent}"
            );
            self.replace_within_line(line_no, 0, orig_indent, &indent_str);
            self.x = new_indent;
            self.indent_delta += new_indent as isize - orig_indent as isize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn correct_paren_trail_closes_everything_at_column_zero() {
        let mut state = State::new("(foo", &Options::default(), Mode::Indent);
        state.init_line("(foo".to_string());
        state.paren_stack.push(crate::paren_stack::Opener {
            line_no: 0,
            x: 0,
            ch: '(',
            indent_delta: 0,
        });
        state.paren_trail.reset(0, 4);
        state.correct_paren_trail(0);
        assert_eq!(state.lines[0], "(foo)");
        assert!(state.paren_stack.is_empty());
    }
}
