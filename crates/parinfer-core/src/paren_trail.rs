//! The tail region of the current line made of close-parens (and, pre-clean
//! in Paren Mode, incidental spaces), plus the openers matched within it
//! (spec component: Paren trail tracker).

use crate::paren_stack::{is_close_paren, Opener};
use crate::state::State;

#[derive(Debug, Clone, Default)]
pub(crate) struct ParenTrail {
    pub(crate) line_no: Option<usize>,
    pub(crate) start_x: Option<usize>,
    pub(crate) end_x: Option<usize>,
    pub(crate) openers: Vec<Opener>,
}

impl ParenTrail {
    pub(crate) fn reset(&mut self, line_no: usize, x: usize) {
        self.line_no = Some(line_no);
        self.start_x = Some(x);
        self.end_x = Some(x);
        self.openers.clear();
    }
}

impl State {
    /// After a committed, non-suppressed character: decide whether this
    /// character terminates the previous trail and stages a fresh one
    /// starting just past it.
    pub(crate) fn update_paren_trail_bounds(&mut self) {
        let line = &self.lines[self.line_no_usize()];
        let prev_ch = if self.x > 0 {
            line.chars().nth(self.x - 1)
        } else {
            None
        };
        let ch = self.ch.clone();

        let should_reset = self.is_in_code
            && !ch.is_empty()
            && !(ch.chars().count() == 1 && is_close_paren(ch.chars().next().unwrap()))
            && (ch != " " || prev_ch == Some('\\'))
            && ch != "  ";

        if should_reset {
            let line_no = self.line_no_usize();
            let x = self.x;
            log::trace!("paren_trail: reset at ({line_no}, {})", x + 1);
            self.paren_trail.reset(line_no, x + 1);
            self.max_indent = None;
        }
    }

    /// Pop a trail's openers back onto the paren stack, restoring "we have
    /// not yet seen that trail." Order matters: the trail's `openers` were
    /// appended in the order closers were encountered left-to-right, which
    /// is innermost-first from the stack's perspective, so popping from the
    /// end of `openers` and pushing restores LIFO correctness.
    pub(crate) fn remove_paren_trail(&mut self) {
        let (start_x, end_x) = match (self.paren_trail.start_x, self.paren_trail.end_x) {
            (Some(s), Some(e)) => (s, e),
            _ => return,
        };
        if start_x == end_x {
            return;
        }

        while let Some(opener) = self.paren_trail.openers.pop() {
            self.paren_stack.push(opener);
        }

        let line_no = self.line_no_usize();
        self.remove_within_line(line_no, start_x, end_x);
    }

    /// Keep only the close-parens of `[startX, endX)`, dropping interior
    /// spaces, on any line other than the one still being typed.
    pub(crate) fn clean_paren_trail(&mut self) {
        let (start_x, end_x) = match (self.paren_trail.start_x, self.paren_trail.end_x) {
            (Some(s), Some(e)) => (s, e),
            _ => return,
        };
        if start_x == end_x || Some(self.line_no_usize()) != self.paren_trail.line_no {
            return;
        }

        let line = self.lines[self.line_no_usize()].clone();
        let mut new_trail = String::new();
        let mut space_count = 0usize;
        for c in line.chars().skip(start_x).take(end_x - start_x) {
            if is_close_paren(c) {
                new_trail.push(c);
            } else {
                space_count += 1;
            }
        }

        if space_count > 0 {
            let line_no = self.line_no_usize();
            self.replace_within_line(line_no, start_x, end_x, &new_trail);
            self.paren_trail.end_x = Some(end_x - space_count);
        }
    }

    /// Migrate a close-paren written at the head of a later line back onto
    /// the trailing region where it belongs (spec §4.5 append-paren-trail).
    pub(crate) fn append_paren_trail(&mut self) {
        let opener = self.paren_stack.pop().expect("append_paren_trail requires a non-empty stack");
        let close_ch = crate::paren_stack::matching_paren(opener.ch)
            .expect("opener.ch is always an open-paren with a defined match");

        self.max_indent = Some(opener.x);
        let trail_line_no = self.paren_trail.line_no.expect("trail line must be set");
        let end_x = self.paren_trail.end_x.expect("trail end must be set");
        self.insert_within_line(trail_line_no, end_x, &close_ch.to_string());
        self.paren_trail.end_x = Some(end_x + 1);
    }

    /// Runs at end-of-line when the trail is on this line: clamp/remove in
    /// Indent Mode, or clean in place (on non-cursor lines) in Paren Mode.
    pub(crate) fn finish_new_paren_trail(&mut self) {
        log::debug!(
            "paren_trail: finish on line {} [{:?}, {:?})",
            self.line_no_usize(),
            self.paren_trail.start_x,
            self.paren_trail.end_x
        );
        match self.mode {
            crate::Mode::Indent => {
                self.clamp_paren_trail_to_cursor();
                self.remove_paren_trail();
            }
            crate::Mode::Paren => {
                if Some(self.line_no_usize()) != self.cursor_line {
                    self.clean_paren_trail();
                }
            }
        }
    }
}
