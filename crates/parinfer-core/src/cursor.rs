//! Cursor-aware clamping and delta adjustment (spec component: Cursor
//! adapter). All three predicates are false whenever the cursor isn't on
//! the line currently being processed.

use crate::paren_stack::is_close_paren;
use crate::state::State;

impl State {
    pub(crate) fn cursor_on_left(&self) -> bool {
        self.cursor_line == Some(self.line_no_usize())
            && self.cursor_x.is_some_and(|cx| cx <= self.x)
    }

    pub(crate) fn cursor_on_right(&self, reference: Option<usize>) -> bool {
        match (self.cursor_line == Some(self.line_no_usize()), self.cursor_x, reference) {
            (true, Some(cx), Some(c)) => cx > c,
            _ => false,
        }
    }

    pub(crate) fn cursor_in_comment(&self) -> bool {
        self.cursor_on_right(self.comment_x)
    }

    /// Paren Mode only: at the exact column the cursor sits on this line,
    /// fold `cursorDx` into the running indent delta.
    pub(crate) fn handle_cursor_delta(&mut self) {
        let has_cursor_delta = self.cursor_dx.is_some()
            && self.cursor_line == Some(self.line_no_usize())
            && self.cursor_x == Some(self.x);

        if has_cursor_delta {
            self.indent_delta += self.cursor_dx.unwrap();
        }
    }

    /// Indent Mode only: close-parens at or after the cursor column are
    /// preserved as user intent in progress; those before it are stripped
    /// along with the rest of the trail during removal.
    pub(crate) fn clamp_paren_trail_to_cursor(&mut self) {
        let (start_x, end_x) = match (self.paren_trail.start_x, self.paren_trail.end_x) {
            (Some(s), Some(e)) => (s, e),
            _ => return,
        };

        let is_cursor_clamping = self.cursor_on_right(Some(start_x)) && !self.cursor_in_comment();
        if !is_cursor_clamping {
            return;
        }

        let cursor_x = self.cursor_x.expect("cursor_on_right implies cursor_x is set");
        let new_start_x = start_x.max(cursor_x);
        let new_end_x = end_x.max(cursor_x);

        let line = self.lines[self.line_no_usize()].clone();
        let remove_count = line
            .chars()
            .skip(start_x)
            .take(new_start_x - start_x)
            .filter(|&c| is_close_paren(c))
            .count();

        for _ in 0..remove_count {
            if self.paren_trail.openers.is_empty() {
                break;
            }
            self.paren_trail.openers.remove(0);
        }
        self.paren_trail.start_x = Some(new_start_x);
        self.paren_trail.end_x = Some(new_end_x);
    }
}
