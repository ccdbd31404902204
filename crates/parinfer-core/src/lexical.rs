//! Per-character dispatch updating lexical state (spec component: Lexical
//! classifier). Reacts to the raw incoming character and may rewrite `ch`
//! (tab -> two spaces, unmatched close -> erased, newline -> erased).

use crate::error::ErrorKind;
use crate::paren_stack::{is_valid_close_paren, Opener};
use crate::state::State;
use crate::ParinferError;

impl State {
    /// Tagged dispatch on the current raw character; a small match replaces
    /// the reference's character -> handler map, per spec §9.
    pub(crate) fn on_char(&mut self) -> Result<(), ParinferError> {
        if self.is_escaping {
            self.after_backslash()?;
        } else if let Some(c) = self.ch.chars().next() {
            match c {
                '(' | '[' | '{' => self.on_open_paren(),
                ')' | ']' | '}' => self.on_close_paren(),
                '"' => self.on_quote(),
                ';' => self.on_semicolon(),
                '\\' => self.on_backslash(),
                '\t' => self.on_tab(),
                '\n' => self.on_new_line(),
                _ => {}
            }
        }

        self.is_in_code = !self.is_in_comment && !self.is_in_str;
        Ok(())
    }

    fn on_open_paren(&mut self) {
        if self.is_in_code {
            let ch = self.ch.chars().next().expect("open-paren char is non-empty");
            let line_no = self.line_no_usize();
            let x = self.x;
            log::trace!("paren_stack: push '{ch}' at ({line_no}, {x})");
            self.paren_stack.push(Opener {
                line_no,
                x,
                ch,
                indent_delta: self.indent_delta,
            });
        }
    }

    fn on_close_paren(&mut self) {
        if !self.is_in_code {
            return;
        }
        let ch = self.ch.chars().next().expect("close-paren char is non-empty");
        if is_valid_close_paren(&self.paren_stack, ch) {
            self.on_matched_close_paren();
        } else {
            self.on_unmatched_close_paren();
        }
    }

    fn on_matched_close_paren(&mut self) {
        let opener = *self.paren_stack.last().expect("validated against a non-empty stack");
        self.paren_trail.end_x = Some(self.x + 1);
        self.paren_trail.openers.push(opener);
        self.max_indent = Some(opener.x);
        self.paren_stack.pop();
        log::trace!(
            "paren_stack: pop '{}' opened at ({}, {})",
            opener.ch,
            opener.line_no,
            opener.x
        );
    }

    fn on_unmatched_close_paren(&mut self) {
        self.ch = String::new();
    }

    fn on_tab(&mut self) {
        if self.is_in_code {
            self.ch = "  ".to_string();
        }
    }

    fn on_semicolon(&mut self) {
        if self.is_in_code {
            self.is_in_comment = true;
            self.comment_x = Some(self.x);
        }
    }

    pub(crate) fn on_new_line(&mut self) {
        self.is_in_comment = false;
        self.ch = String::new();
    }

    fn on_quote(&mut self) {
        if self.is_in_str {
            self.is_in_str = false;
        } else if self.is_in_comment {
            self.quote_danger = !self.quote_danger;
            if self.quote_danger {
                let (line_no, x) = (self.line_no_usize(), self.x);
                self.cache_error_pos(ErrorKind::QuoteDanger, line_no, x);
            }
        } else {
            self.is_in_str = true;
            let (line_no, x) = (self.line_no_usize(), self.x);
            self.cache_error_pos(ErrorKind::UnclosedQuote, line_no, x);
        }
    }

    fn on_backslash(&mut self) {
        self.is_escaping = true;
    }

    fn after_backslash(&mut self) -> Result<(), ParinferError> {
        self.is_escaping = false;

        if self.ch == "\n" {
            if self.is_in_code {
                return Err(self.new_error(ErrorKind::EolBackslash, Some((self.line_no_usize(), self.x - 1))));
            }
            self.on_new_line();
        }
        Ok(())
    }
}
